//! Runs every configured rule over a catalog and compares against the exact
//! integrals.

use std::fmt;

use serde::Serialize;

use crate::catalog::{Catalog, ReferenceFunction};
use crate::error::Result;
use crate::quadrature::Rule;
use crate::sample::SampleSet;

/// Absolute error bounds. `None` means the rule is reported without a
/// verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub clenshaw_curtis: Option<f64>,
    pub trapezoid: Option<f64>,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            clenshaw_curtis: Some(1e-9),
            trapezoid: None,
        }
    }
}

impl Tolerances {
    pub fn for_rule(&self, rule: Rule) -> Option<f64> {
        if rule.is_clenshaw_curtis() {
            self.clenshaw_curtis
        } else {
            self.trapezoid
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    pub rules: Vec<Rule>,
    pub tolerances: Tolerances,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            rules: Rule::ALL.to_vec(),
            tolerances: Tolerances::default(),
        }
    }
}

/// One rule applied to one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadratureResult {
    pub catalog: &'static str,
    pub order: usize,
    pub function: &'static str,
    pub rule: Rule,
    pub value: f64,
    pub exact: f64,
    pub error: f64,
    pub abs_error: f64,
    pub within_tolerance: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkippedRule {
    pub rule: Rule,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryReport {
    pub function: &'static str,
    pub exact: f64,
    pub results: Vec<QuadratureResult>,
    pub skipped: Vec<SkippedRule>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub catalog: &'static str,
    pub order: usize,
    pub entries: Vec<EntryReport>,
}

impl Report {
    pub fn results(&self) -> impl Iterator<Item = &QuadratureResult> {
        self.entries.iter().flat_map(|entry| entry.results.iter())
    }

    pub fn violations(&self) -> impl Iterator<Item = &QuadratureResult> {
        self.results()
            .filter(|result| result.within_tolerance == Some(false))
    }

    pub fn passed(&self) -> bool {
        self.violations().next().is_none()
    }
}

fn run_entry(
    catalog: &Catalog,
    order: usize,
    entry: &ReferenceFunction,
    config: &HarnessConfig,
) -> Result<EntryReport> {
    let set = SampleSet::chebyshev(order, entry.function())?;
    let exact = entry.exact();

    let mut results = Vec::with_capacity(config.rules.len());
    let mut skipped = Vec::new();

    for &rule in &config.rules {
        if let Some(reason) = rule.order_rejection(order) {
            log::warn!("{rule} skipped for {} at N={order}: {reason}", entry.label());
            skipped.push(SkippedRule { rule, reason });
            continue;
        }

        let value = rule.apply(&set)?;
        let error = value - exact;
        let abs_error = error.abs();
        let within_tolerance = config
            .tolerances
            .for_rule(rule)
            .map(|tolerance| abs_error < tolerance);

        log::debug!("{rule} on {}: {value} (error {error:e})", entry.label());
        if within_tolerance == Some(false) {
            log::warn!(
                "{rule} on {} at N={order} off by {abs_error:e}",
                entry.label()
            );
        }

        results.push(QuadratureResult {
            catalog: catalog.name(),
            order,
            function: entry.label(),
            rule,
            value,
            exact,
            error,
            abs_error,
            within_tolerance,
        });
    }

    Ok(EntryReport {
        function: entry.label(),
        exact,
        results,
        skipped,
    })
}

/// Runs the catalog at its own order.
pub fn verify(catalog: &Catalog, config: &HarnessConfig) -> Result<Report> {
    verify_at(catalog, catalog.order(), config)
}

/// Runs the catalog at an explicit order.
pub fn verify_at(catalog: &Catalog, order: usize, config: &HarnessConfig) -> Result<Report> {
    log::info!(
        "verifying {} catalog ({} functions) at N={order}",
        catalog.name(),
        catalog.entries().len()
    );

    let entries = catalog
        .entries()
        .iter()
        .map(|entry| run_entry(catalog, order, entry, config))
        .collect::<Result<Vec<_>>>()?;

    Ok(Report {
        catalog: catalog.name(),
        order,
        entries,
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} catalog, N={} ===", self.catalog, self.order)?;

        for entry in &self.entries {
            writeln!(f)?;
            writeln!(f, "{}", entry.function)?;
            writeln!(f, "Expected: {}", entry.exact)?;
            for result in &entry.results {
                write!(
                    f,
                    "{}  value: {}, abs error: {}",
                    result.rule, result.value, result.abs_error
                )?;
                if result.within_tolerance == Some(false) {
                    write!(f, "  [exceeds tolerance]")?;
                }
                writeln!(f)?;
            }
            for SkippedRule { rule, reason } in &entry.skipped {
                writeln!(f, "{rule}  skipped: {reason}")?;
            }
        }

        Ok(())
    }
}
