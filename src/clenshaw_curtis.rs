//! Clenshaw–Curtis quadrature on Chebyshev abscissas.
//!
//! Every rule here expects `N + 1` points with `x_n = cos(pi * n / N)` for
//! ascending `n`, as produced by [`SampleSet::chebyshev`]. The abscissas are
//! not inspected: a set with any other spacing yields a wrong value, not an
//! error.
//!
//! The weights come from integrating the even cosine terms of `f(cos t)`:
//!
//! ```text
//! w_n = b(n) * (2 / N) * sum_k c(k) * cos(2 pi n k / N)
//! c(k) = 1 / (1 - (2k)^2)   at k == 0 or 2k == N, twice that otherwise
//! b(n) = 1/2                at n == 0 or n == N, 1 otherwise
//! ```
//!
//! The four rules evaluate this sum in different arrangements and are kept
//! apart so that each can be checked against the others.
//!
//! [`SampleSet::chebyshev`]: crate::sample::SampleSet::chebyshev

use std::f64::consts::PI;

use crate::error::{QuadratureError, Result};
use crate::quadrature::Rule;
use crate::sample::SamplePoint;

fn rule_order(points: &[SamplePoint], rule: Rule) -> Result<usize> {
    match points.len() {
        0 => Err(QuadratureError::DegenerateSampleSet {
            rule: rule.name(),
            required: 1,
            actual: 0,
        }),
        1 => Err(QuadratureError::zero_order()),
        len => Ok(len - 1),
    }
}

fn even_rule_order(points: &[SamplePoint], rule: Rule) -> Result<usize> {
    let order = rule_order(points, rule)?;
    if order % 2 != 0 {
        return Err(QuadratureError::odd_order(order));
    }

    Ok(order)
}

/// `c(k)` for `k = 0..=N/2`, with `N` even.
fn even_coefficients(order: usize) -> Vec<f64> {
    (0..=order / 2)
        .map(|k| {
            let denominator = 1. - ((2 * k) as f64).powi(2);
            if k == 0 || 2 * k == order {
                1. / denominator
            } else {
                2. / denominator
            }
        })
        .collect()
}

/// Folds `y_n` with its mirror `y_{N-n}` and computes only half of the
/// weights. The centre point `n = N/2` is its own mirror and gets halved.
///
/// Fails with [`QuadratureError::InvalidRuleOrder`] when `N` is odd.
pub fn clenshaw_curtis_rule_even_only(points: &[SamplePoint]) -> Result<f64> {
    let order = even_rule_order(points, Rule::ClenshawCurtisEvenOnly)?;
    let n_f = order as f64;
    let half = order / 2;
    let d = even_coefficients(order);

    let mut result = 0.;
    for n in 0..=half {
        let mult = if n == 0 || n == half { 0.5 } else { 1. };

        let mut w = 0.;
        for (k, dk) in d.iter().enumerate() {
            w += mult * (2. / n_f) * ((n * k) as f64 * PI * 2. / n_f).cos() * dk;
        }

        result += (points[n].y() + points[order - n].y()) * w;
    }

    Ok(result)
}

/// Same coefficients as [`clenshaw_curtis_rule_even_only`], one weight per
/// point without folding.
///
/// Fails with [`QuadratureError::InvalidRuleOrder`] when `N` is odd.
pub fn clenshaw_curtis_rule_expanded_even_only(points: &[SamplePoint]) -> Result<f64> {
    let order = even_rule_order(points, Rule::ClenshawCurtisExpandedEvenOnly)?;
    let n_f = order as f64;
    let d = even_coefficients(order);

    let mut result = 0.;
    for (n, point) in points.iter().enumerate() {
        let mult = if n == 0 || n == order { 0.5 } else { 1. };

        let mut w = 0.;
        for (k, dk) in d.iter().enumerate() {
            w += mult * (2. / n_f) * ((n * k) as f64 * PI * 2. / n_f).cos() * dk;
        }

        result += point.y() * w;
    }

    Ok(result)
}

fn expanded_weight(n: usize, order: usize) -> f64 {
    let n_f = order as f64;
    let point_count = order + 1;
    let n2_max = if point_count % 2 == 0 {
        (order - 1) / 2
    } else {
        order / 2
    };

    let mut w = 0.;
    for k in 0..=n2_max {
        let denominator = 1. - ((2 * k) as f64).powi(2);
        let c = if k == 0 || 2 * k == order {
            1. / denominator
        } else {
            2. / denominator
        };
        let b = if n == 0 || n == order { 0.5 } else { 1. };

        w += b * (2. / n_f) * ((n * k) as f64 * PI * 2. / n_f).cos() * c;
    }

    w
}

/// Computes every weight from the full cosine sum. Valid for any `N >= 1`.
pub fn clenshaw_curtis_rule_expanded(points: &[SamplePoint]) -> Result<f64> {
    let order = rule_order(points, Rule::ClenshawCurtisExpanded)?;

    let mut result = 0.;
    for (n, point) in points.iter().enumerate() {
        result += point.y() * expanded_weight(n, order);
    }

    Ok(result)
}

/// Closed-form weights split on the parity of `N`.
///
/// The endpoints get `1 / (N^2 - 1)` for even `N` and `1 / N^2` for odd `N`.
/// Interior points subtract the cosine terms from one, with the unpaired
/// `cos(N theta)` term present only for even `N`.
pub fn clenshaw_curtis_rule(points: &[SamplePoint]) -> Result<f64> {
    let order = rule_order(points, Rule::ClenshawCurtis)?;
    let n_f = order as f64;
    let even = order % 2 == 0;

    let edge = if even {
        1. / (n_f * n_f - 1.)
    } else {
        1. / (n_f * n_f)
    };

    let mut result = edge * points[0].y();
    for (n, point) in points.iter().enumerate().take(order).skip(1) {
        let theta = PI * n as f64 / n_f;

        let mut v = 1.;
        for k in 1..=(order - 1) / 2 {
            let k_f = k as f64;
            v -= 2. * (2. * k_f * theta).cos() / (4. * k_f * k_f - 1.);
        }
        if even {
            v -= (n_f * theta).cos() / (n_f * n_f - 1.);
        }

        result += 2. * v / n_f * point.y();
    }
    result += edge * points[order].y();

    Ok(result)
}

/// Weights of the order-`N` rule, indexed like the Chebyshev abscissas.
pub fn clenshaw_curtis_weights(order: usize) -> Result<Vec<f64>> {
    if order == 0 {
        return Err(QuadratureError::zero_order());
    }

    Ok((0..=order).map(|n| expanded_weight(n, order)).collect())
}
