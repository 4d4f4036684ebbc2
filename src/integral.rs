use peroxide::numerical::integral::newton_cotes_quadrature;

use crate::error::{QuadratureError, Result};
use crate::quadrature::Rule;
use crate::sample::{chebyshev_abscissas, SamplePoint, SampleSet};

pub trait Integral {
    fn integrate<F>(&self, f: F, support: (f64, f64)) -> Result<f64>
    where
        F: Fn(f64) -> f64;
}

fn check_support((a, b): (f64, f64)) -> Result<()> {
    if (a..b).is_empty() {
        Err(QuadratureError::EmptySupport { a, b })?;
    }

    Ok(())
}

/// Runs a rule on Chebyshev abscissas mapped onto the support.
///
/// The samples keep the reference abscissas in `[-1, 1]`, so the rule
/// integrates `f((a + b) / 2 + (b - a) / 2 * t)` in `t` and the result is
/// scaled by `(b - a) / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebyshevQuadrature {
    pub order: usize,
    pub rule: Rule,
}

impl ChebyshevQuadrature {
    pub fn new(order: usize, rule: Rule) -> Self {
        Self { order, rule }
    }
}

impl Integral for ChebyshevQuadrature {
    fn integrate<F>(&self, f: F, support: (f64, f64)) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        check_support(support)?;

        let (a, b) = support;
        let mid = (a + b) / 2.;
        let half = (b - a) / 2.;

        let set: SampleSet = chebyshev_abscissas(self.order)?
            .into_iter()
            .map(|t| SamplePoint::new(t, f(mid + half * t)))
            .collect();

        Ok(self.rule.apply(&set)? * half)
    }
}

/// `peroxide`'s Newton–Cotes rule on `n` equal sub-intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonCotesQuadrature {
    pub n: usize,
}

impl Integral for NewtonCotesQuadrature {
    fn integrate<F>(&self, f: F, support: (f64, f64)) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        if self.n == 0 {
            return Err(QuadratureError::zero_order());
        }
        check_support(support)?;

        Ok(newton_cotes_quadrature(f, self.n, support))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_chebyshev_on_shifted_support() {
        // ∫_0^2 x^3 = 4
        for rule in Rule::CLENSHAW_CURTIS {
            let integral = ChebyshevQuadrature::new(6, rule);
            let value = integral.integrate(|x| x.powi(3), (0., 2.)).unwrap();

            assert_abs_diff_eq!(value, 4., epsilon = 1e-12);
        }
    }

    #[test]
    fn test_trapezoid_scaling() {
        let integral = ChebyshevQuadrature::new(64, Rule::Trapezoid);
        let value = integral.integrate(|x| x, (1., 3.)).unwrap();

        assert_relative_eq!(value, 4., epsilon = 1e-12);
    }

    #[test]
    fn test_newton_cotes_matches_clenshaw_curtis() {
        let f = |x: f64| (x * 0.3).exp();
        let support = (0., 1.);

        let nc = NewtonCotesQuadrature { n: 8 }.integrate(f, support).unwrap();
        let cc = ChebyshevQuadrature::new(8, Rule::ClenshawCurtis)
            .integrate(f, support)
            .unwrap();

        assert_relative_eq!(nc, cc, epsilon = 1e-8);
        assert_relative_eq!(cc, ((0.3f64).exp() - 1.) / 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_support() {
        let integral = ChebyshevQuadrature::new(4, Rule::ClenshawCurtis);

        assert_eq!(
            integral.integrate(|x| x, (1., 1.)),
            Err(QuadratureError::EmptySupport { a: 1., b: 1. })
        );
        assert!(NewtonCotesQuadrature { n: 4 }
            .integrate(|x| x, (2., -2.))
            .is_err());
    }

    #[test]
    fn test_newton_cotes_zero_intervals() {
        let zero = NewtonCotesQuadrature { n: 0 }.integrate(|x| x, (0., 1.));
        assert!(zero.unwrap_err().is_rule_order_error());

        let one = NewtonCotesQuadrature { n: 1 }.integrate(|x| x, (0., 1.)).unwrap();
        assert_relative_eq!(one, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_parity_error_propagates() {
        let integral = ChebyshevQuadrature::new(5, Rule::ClenshawCurtisEvenOnly);

        assert!(integral
            .integrate(|x| x, (-1., 1.))
            .unwrap_err()
            .is_rule_order_error());
    }
}
