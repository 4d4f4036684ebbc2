use std::f64::consts::{E, PI};

/// A test function with its exact integral over `[-1, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceFunction {
    label: &'static str,
    exact: f64,
    f: fn(f64) -> f64,
}

impl ReferenceFunction {
    pub const fn new(label: &'static str, exact: f64, f: fn(f64) -> f64) -> Self {
        Self { label, exact, f }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn exact(&self) -> f64 {
        self.exact
    }

    pub fn function(&self) -> fn(f64) -> f64 {
        self.f
    }

    pub fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// `∫ x^k dx` over `[-1, 1]`.
pub fn monomial_integral(k: u32) -> f64 {
    if k % 2 == 0 {
        2. / (k as f64 + 1.)
    } else {
        0.
    }
}

/// Ordered, read-only list of reference functions meant to be run at one
/// rule order.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: &'static str,
    order: usize,
    entries: Vec<ReferenceFunction>,
}

impl Catalog {
    pub fn new(name: &'static str, order: usize, entries: Vec<ReferenceFunction>) -> Self {
        Self {
            name,
            order,
            entries,
        }
    }

    /// Low powers of `x`, run at `N = 4`.
    pub fn low_order() -> Self {
        Self::new(
            "low order",
            4,
            vec![
                ReferenceFunction::new("x", monomial_integral(1), |x| x),
                ReferenceFunction::new("x^2", monomial_integral(2), |x| x.powi(2)),
                ReferenceFunction::new("x^3", monomial_integral(3), |x| x.powi(3)),
                ReferenceFunction::new("x^4", monomial_integral(4), |x| x.powi(4)),
            ],
        )
    }

    /// High powers and a mixed even/odd polynomial, run at `N = 13`.
    pub fn high_order() -> Self {
        let mixed = monomial_integral(12)
            + 2. * monomial_integral(10)
            + 3. * monomial_integral(8)
            + monomial_integral(5)
            + 5. * monomial_integral(1);

        Self::new(
            "high order",
            13,
            vec![
                ReferenceFunction::new("x", monomial_integral(1), |x| x),
                ReferenceFunction::new("x^10", monomial_integral(10), |x| x.powi(10)),
                ReferenceFunction::new("x^11", monomial_integral(11), |x| x.powi(11)),
                ReferenceFunction::new("x^12", monomial_integral(12), |x| x.powi(12)),
                ReferenceFunction::new("x^12 + 2x^10 + 3x^8 + x^5 + 5x", mixed, |x| {
                    x.powi(12) + 2. * x.powi(10) + 3. * x.powi(8) + x.powi(5) + 5. * x
                }),
            ],
        )
    }

    /// Non-polynomial functions. No rule integrates these exactly.
    pub fn smooth() -> Self {
        Self::new(
            "smooth",
            16,
            vec![
                ReferenceFunction::new("e^x", E - 1. / E, f64::exp),
                runge(),
                ReferenceFunction::new("cos(pi x / 2)", 4. / PI, |x| (PI * x / 2.).cos()),
            ],
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn entries(&self) -> &[ReferenceFunction] {
        &self.entries
    }
}

/// `1 / (1 + 25 x^2)`.
pub fn runge() -> ReferenceFunction {
    ReferenceFunction::new("1 / (1 + 25x^2)", 0.4 * 5f64.atan(), |x| {
        1. / (1. + 25. * x * x)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integral::{Integral, NewtonCotesQuadrature};
    use approx::assert_relative_eq;

    #[test]
    fn test_monomial_integral() {
        assert_eq!(monomial_integral(0), 2.);
        assert_eq!(monomial_integral(3), 0.);
        assert_relative_eq!(monomial_integral(4), 0.4);
    }

    #[test]
    fn test_catalog_layout() {
        let low = Catalog::low_order();
        assert_eq!(low.order(), 4);
        assert_eq!(
            low.entries().iter().map(|e| e.label()).collect::<Vec<_>>(),
            ["x", "x^2", "x^3", "x^4"]
        );

        let high = Catalog::high_order();
        assert_eq!(high.order(), 13);
        assert_eq!(high.entries().len(), 5);
        assert_relative_eq!(
            high.entries()[4].exact(),
            2. * (1. / 13. + 2. / 11. + 3. / 9.)
        );
    }

    #[test]
    fn test_smooth_exact_values() {
        let nc = NewtonCotesQuadrature { n: 10 };

        let catalog = Catalog::smooth();
        let runge = runge();

        for entry in catalog.entries().iter().filter(|e| e.label() != runge.label()) {
            let value = nc.integrate(entry.function(), (-1., 1.)).unwrap();
            assert_relative_eq!(value, entry.exact(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_eval() {
        let entry = Catalog::high_order().entries()[4];

        assert_eq!(entry.eval(1.), 12.);
        assert_eq!(entry.eval(0.), 0.);
    }
}
