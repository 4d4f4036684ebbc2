//! Interpolatory weights from the Chebyshev moment system.
//!
//! For abscissas `x_0..x_N` the weights solve
//!
//! ```text
//! sum_i T_j(x_i) w_i = ∫ T_j(x) dx    for j = 0..=N
//! ```
//!
//! over `[-1, 1]`. On Chebyshev abscissas the solution is the Clenshaw–Curtis
//! weight vector, which makes this an independent check on the cosine sums.

use nalgebra::{DMatrix, DVector};

use crate::error::{QuadratureError, Result};

/// `∫ T_j(x) dx` over `[-1, 1]`.
fn chebyshev_moment(j: usize) -> f64 {
    if j % 2 == 0 {
        2. / (1. - (j * j) as f64)
    } else {
        0.
    }
}

/// `T_0(x)..T_degree(x)` by the three-term recurrence.
fn chebyshev_values(x: f64, degree: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(degree + 1);
    values.push(1.);
    if degree >= 1 {
        values.push(x);
    }
    for j in 2..=degree {
        values.push(2. * x * values[j - 1] - values[j - 2]);
    }

    values
}

pub fn interpolatory_weights(abscissas: &[f64]) -> Result<Vec<f64>> {
    if abscissas.is_empty() {
        return Err(QuadratureError::DegenerateSampleSet {
            rule: "Interpolatory",
            required: 1,
            actual: 0,
        });
    }

    let size = abscissas.len();
    let degree = size - 1;

    let columns: Vec<Vec<f64>> = abscissas
        .iter()
        .map(|&x| chebyshev_values(x, degree))
        .collect();
    let system = DMatrix::from_fn(size, size, |j, i| columns[i][j]);
    let moments = DVector::from_fn(size, |j, _| chebyshev_moment(j));

    let weights = system
        .lu()
        .solve(&moments)
        .ok_or(QuadratureError::SingularMomentSystem { points: size })?;

    log::debug!("solved moment system for {size} abscissas");

    Ok(weights.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clenshaw_curtis::clenshaw_curtis_weights;
    use crate::sample::chebyshev_abscissas;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_chebyshev_values() {
        let values = chebyshev_values(0.5, 4);

        // cos(j * pi / 3)
        assert_abs_diff_eq!(values[2], -0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(values[3], -1., epsilon = 1e-15);
        assert_abs_diff_eq!(values[4], -0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_matches_clenshaw_curtis_weights() {
        for order in [1, 2, 4, 7, 12, 13] {
            let xs = chebyshev_abscissas(order).unwrap();
            let solved = interpolatory_weights(&xs).unwrap();
            let cosine_sum = clenshaw_curtis_weights(order).unwrap();

            for (a, b) in solved.iter().zip(cosine_sum.iter()) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_equispaced_is_simpson() {
        let w = interpolatory_weights(&[-1., 0., 1.]).unwrap();

        assert_abs_diff_eq!(w[0], 1. / 3., epsilon = 1e-14);
        assert_abs_diff_eq!(w[1], 4. / 3., epsilon = 1e-14);
        assert_abs_diff_eq!(w[2], 1. / 3., epsilon = 1e-14);
    }

    #[test]
    fn test_singular_system() {
        assert_eq!(
            interpolatory_weights(&[0., 0.]),
            Err(QuadratureError::SingularMomentSystem { points: 2 })
        );
        assert!(interpolatory_weights(&[]).is_err());
    }
}
