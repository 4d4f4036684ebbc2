use std::f64::consts::PI;
use std::ops::Deref;

use serde::Serialize;

use crate::error::{QuadratureError, Result};

/// An abscissa together with the function value sampled there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    x: f64,
    y: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for SamplePoint {
    fn from((x, y): (f64, f64)) -> Self {
        SamplePoint { x, y }
    }
}

/// Ordered sequence of sample points.
///
/// A set of length `N + 1` describes a rule of order `N`. Sets built with
/// [`SampleSet::chebyshev`] hold `x_i = cos(pi * i / N)` for ascending `i`,
/// so the abscissas run from `1` down to `-1`. The Clenshaw–Curtis rules
/// rely on that layout and do not check it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSet {
    points: Vec<SamplePoint>,
}

impl SampleSet {
    pub fn new(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    /// Samples `f` on the Chebyshev abscissas of the given order.
    pub fn chebyshev<F>(order: usize, f: F) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        let points = chebyshev_abscissas(order)?
            .into_iter()
            .map(|x| SamplePoint::new(x, f(x)))
            .collect();

        Ok(Self { points })
    }

    /// Rule order, one less than the number of points.
    pub fn order(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<SamplePoint> {
        self.points
    }
}

impl Deref for SampleSet {
    type Target = [SamplePoint];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl FromIterator<SamplePoint> for SampleSet {
    fn from_iter<I: IntoIterator<Item = SamplePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// `x_i = cos(pi * i / order)` for `i = 0..=order`.
pub fn chebyshev_abscissas(order: usize) -> Result<Vec<f64>> {
    if order == 0 {
        return Err(QuadratureError::zero_order());
    }

    let n = order as f64;
    Ok((0..=order).map(|i| (PI * (i as f64 / n)).cos()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_chebyshev_abscissas_span_interval() {
        for order in [1, 2, 4, 7, 13, 32] {
            let xs = chebyshev_abscissas(order).unwrap();

            assert_eq!(xs.len(), order + 1);
            assert_eq!(xs[0], 1.);
            assert_eq!(xs[order], -1.);
            assert!(xs.windows(2).all(|w| w[1] < w[0]));
        }
    }

    #[test]
    fn test_chebyshev_abscissas_order_4() {
        let xs = chebyshev_abscissas(4).unwrap();
        let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;

        for (x, expected) in xs.iter().zip([1., half_sqrt2, 0., -half_sqrt2, -1.]) {
            assert_abs_diff_eq!(*x, expected, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_zero_order_rejected() {
        assert!(chebyshev_abscissas(0).unwrap_err().is_rule_order_error());
        assert!(SampleSet::chebyshev(0, |x| x).is_err());
    }

    #[test]
    fn test_chebyshev_sampling_is_deterministic() {
        let f = |x: f64| x.powi(12) + 2. * x.powi(10) + 5. * x;

        let first = SampleSet::chebyshev(13, f).unwrap();
        let second = SampleSet::chebyshev(13, f).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.x().to_bits(), b.x().to_bits());
            assert_eq!(a.y().to_bits(), b.y().to_bits());
        }
    }

    #[test]
    fn test_sample_values() {
        let set = SampleSet::chebyshev(4, |x| x * x).unwrap();

        assert_eq!(set.order(), 4);
        for point in set.iter() {
            assert_eq!(point.y(), point.x() * point.x());
        }
    }

    #[test]
    fn test_from_tuples() {
        let set: SampleSet = [(0., 1.), (1., 3.)]
            .into_iter()
            .map(SamplePoint::from)
            .collect();

        assert_eq!(set.order(), 1);
        assert_eq!(set[1], SamplePoint::new(1., 3.));
        assert_eq!(SampleSet::default().order(), 0);
    }

    #[test]
    fn test_new_and_into_points() {
        let points = vec![SamplePoint::new(1., 2.), SamplePoint::new(-1., 2.)];
        let set = SampleSet::new(points.clone());

        assert_eq!(set.order(), 1);
        assert_eq!(set.points(), points.as_slice());
        assert_eq!(set.into_points(), points);
    }
}
