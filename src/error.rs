use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("invalid rule order {order}: {reason}")]
    InvalidRuleOrder { order: usize, reason: &'static str },

    #[error("degenerate sample set: {rule} needs at least {required} points, got {actual}")]
    DegenerateSampleSet {
        rule: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("moment system for {points} abscissas is singular")]
    SingularMomentSystem { points: usize },

    #[error("empty support [{a}, {b}]")]
    EmptySupport { a: f64, b: f64 },
}

pub type Result<T> = std::result::Result<T, QuadratureError>;

impl QuadratureError {
    pub fn is_rule_order_error(&self) -> bool {
        matches!(self, QuadratureError::InvalidRuleOrder { .. })
    }

    pub(crate) fn odd_order(order: usize) -> Self {
        QuadratureError::InvalidRuleOrder {
            order,
            reason: "rule requires an even order",
        }
    }

    pub(crate) fn zero_order() -> Self {
        QuadratureError::InvalidRuleOrder {
            order: 0,
            reason: "order must be at least 1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuadratureError::odd_order(13);
        assert_eq!(
            err.to_string(),
            "invalid rule order 13: rule requires an even order"
        );

        let err = QuadratureError::DegenerateSampleSet {
            rule: "Trapezoid",
            required: 2,
            actual: 1,
        };
        assert!(err.to_string().contains("Trapezoid"));
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn test_is_rule_order_error() {
        assert!(QuadratureError::zero_order().is_rule_order_error());
        assert!(!QuadratureError::EmptySupport { a: 1., b: 0. }.is_rule_order_error());
    }
}
