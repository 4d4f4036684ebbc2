use std::fmt;

use serde::{Serialize, Serializer};

use crate::clenshaw_curtis::{
    clenshaw_curtis_rule, clenshaw_curtis_rule_even_only, clenshaw_curtis_rule_expanded,
    clenshaw_curtis_rule_expanded_even_only,
};
use crate::error::{QuadratureError, Result};
use crate::sample::SamplePoint;

/// Piecewise-linear quadrature over consecutive points.
///
/// Uses `|x_{i+1} - x_i|` as the interval width, so the points may be given
/// in either direction and need not be evenly spaced.
pub fn trapezoid_rule(points: &[SamplePoint]) -> Result<f64> {
    if points.len() < 2 {
        return Err(QuadratureError::DegenerateSampleSet {
            rule: Rule::Trapezoid.name(),
            required: 2,
            actual: points.len(),
        });
    }

    let mut result = 0.;
    for pair in points.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        result += (right.y() + left.y()) * (right.x() - left.x()).abs() / 2.;
    }

    Ok(result)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Trapezoid,
    ClenshawCurtisEvenOnly,
    ClenshawCurtisExpandedEvenOnly,
    ClenshawCurtisExpanded,
    ClenshawCurtis,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::Trapezoid,
        Rule::ClenshawCurtisEvenOnly,
        Rule::ClenshawCurtisExpandedEvenOnly,
        Rule::ClenshawCurtisExpanded,
        Rule::ClenshawCurtis,
    ];

    pub const CLENSHAW_CURTIS: [Rule; 4] = [
        Rule::ClenshawCurtisEvenOnly,
        Rule::ClenshawCurtisExpandedEvenOnly,
        Rule::ClenshawCurtisExpanded,
        Rule::ClenshawCurtis,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Trapezoid => "Trapezoid",
            Rule::ClenshawCurtisEvenOnly => "Clenshaw-Curtis (even only)",
            Rule::ClenshawCurtisExpandedEvenOnly => "Clenshaw-Curtis (expanded, even only)",
            Rule::ClenshawCurtisExpanded => "Clenshaw-Curtis (expanded)",
            Rule::ClenshawCurtis => "Clenshaw-Curtis",
        }
    }

    pub fn is_clenshaw_curtis(&self) -> bool {
        !matches!(self, Rule::Trapezoid)
    }

    pub fn requires_even_order(&self) -> bool {
        matches!(
            self,
            Rule::ClenshawCurtisEvenOnly | Rule::ClenshawCurtisExpandedEvenOnly
        )
    }

    /// Why the rule cannot run at `order`, or `None` when it can.
    pub fn order_rejection(&self, order: usize) -> Option<&'static str> {
        if order == 0 {
            Some("order must be at least 1")
        } else if self.requires_even_order() && order % 2 != 0 {
            Some("requires an even order")
        } else {
            None
        }
    }

    pub fn accepts_order(&self, order: usize) -> bool {
        self.order_rejection(order).is_none()
    }

    pub fn apply(&self, points: &[SamplePoint]) -> Result<f64> {
        match self {
            Rule::Trapezoid => trapezoid_rule(points),
            Rule::ClenshawCurtisEvenOnly => clenshaw_curtis_rule_even_only(points),
            Rule::ClenshawCurtisExpandedEvenOnly => {
                clenshaw_curtis_rule_expanded_even_only(points)
            }
            Rule::ClenshawCurtisExpanded => clenshaw_curtis_rule_expanded(points),
            Rule::ClenshawCurtis => clenshaw_curtis_rule(points),
        }
    }
}

impl Serialize for Rule {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
