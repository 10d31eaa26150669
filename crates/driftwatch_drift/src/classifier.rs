use driftwatch_types::{Column, Dataset};
use tracing::debug;

/// Numeric columns with fewer distinct non-missing values than this are
/// treated as categorical. Fixed policy with no dataset-size scaling; it
/// exists to keep KS/PSI away from near-discrete numeric codes.
pub const CARDINALITY_THRESHOLD: usize = 10;

/// A stable partition of the reference dataset's columns. Both groups keep
/// the reference column order, which drives every downstream traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePartition {
    pub continuous: Vec<String>,
    pub categorical: Vec<String>,
}

/// Partition the reference dataset's columns into continuous and categorical
/// groups. Classification is derived solely from the reference dataset so
/// that repeated runs against different production datasets agree on feature
/// kinds.
///
/// An explicit `categorical_override` replaces auto-detection entirely: the
/// continuous group becomes every column not named in the override.
pub fn classify(reference: &Dataset, categorical_override: Option<&[String]>) -> FeaturePartition {
    let mut continuous = Vec::new();
    let mut categorical = Vec::new();

    for column in reference.columns() {
        let is_categorical = match categorical_override {
            Some(names) => names.iter().any(|n| n == &column.name),
            None => auto_detect_categorical(column),
        };

        if is_categorical {
            categorical.push(column.name.clone());
        } else {
            continuous.push(column.name.clone());
        }
    }

    debug!(
        continuous = continuous.len(),
        categorical = categorical.len(),
        "classified reference features"
    );

    FeaturePartition {
        continuous,
        categorical,
    }
}

fn auto_detect_categorical(column: &Column) -> bool {
    match column.numeric_values() {
        Some(values) => distinct_count(values) < CARDINALITY_THRESHOLD,
        None => true,
    }
}

fn distinct_count(mut values: Vec<f64>) -> usize {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    values.dedup();
    values.len()
}
