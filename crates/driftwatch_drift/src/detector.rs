use crate::classifier::{classify, FeaturePartition};
use crate::error::DriftError;
use crate::{categorical, continuous};
use driftwatch_types::{Dataset, DriftConfig, DriftReport, FeatureComparison, FeatureKind};
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, error};

/// Stateless drift detection engine. Construction validates the
/// configuration; each `detect_drift` call is an independent, single-pass
/// computation over the two datasets.
pub struct DriftDetector {
    config: DriftConfig,
}

impl DriftDetector {
    pub fn new(config: DriftConfig) -> Result<Self, DriftError> {
        config.validate()?;
        Ok(DriftDetector { config })
    }

    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Compare every feature of the production dataset against the reference
    /// and fold the per-feature results into a single report.
    ///
    /// Every feature is always evaluated; a comparison error is isolated to
    /// that feature's detail entry and never aborts the rest of the report.
    /// The report's ordering follows the classifier's traversal (continuous
    /// group first, then categorical, each in reference column order)
    /// regardless of worker completion order.
    pub fn detect_drift(
        &self,
        reference: &Dataset,
        production: &Dataset,
    ) -> Result<DriftReport, DriftError> {
        validate_inputs(reference, production)?;

        let partition = classify(reference, self.config.categorical_features.as_deref());
        let work = traversal(&partition);

        let comparisons: Vec<(String, FeatureComparison)> = work
            .into_par_iter()
            .map(|(name, kind)| {
                let comparison = self
                    .compare_feature(&name, kind, reference, production)
                    .unwrap_or_else(|e| {
                        error!(feature = %name, error = %e, "feature comparison failed");
                        FeatureComparison::Failed {
                            error: e.to_string(),
                        }
                    });
                (name, comparison)
            })
            .collect();

        let mut report = DriftReport::default();
        for (name, comparison) in comparisons {
            if comparison.drift_detected() {
                report.drift_detected = true;
                report.features_with_drift.push(name.clone());
            }
            report.feature_details.insert(name, comparison);
        }

        debug!(
            drift_detected = report.drift_detected,
            drifted_features = report.features_with_drift.len(),
            "drift detection complete"
        );

        Ok(report)
    }

    fn compare_feature(
        &self,
        name: &str,
        kind: FeatureKind,
        reference: &Dataset,
        production: &Dataset,
    ) -> Result<FeatureComparison, DriftError> {
        let ref_column = reference
            .column(name)
            .ok_or_else(|| DriftError::FeatureNotExist(name.to_string()))?;
        let prod_column = production
            .column(name)
            .ok_or_else(|| DriftError::FeatureNotExist(name.to_string()))?;

        match kind {
            FeatureKind::Continuous => {
                continuous::compare(name, ref_column, prod_column, &self.config)
            }
            FeatureKind::Categorical => {
                categorical::compare(name, ref_column, prod_column, &self.config)
            }
        }
    }
}

fn traversal(partition: &FeaturePartition) -> Vec<(String, FeatureKind)> {
    partition
        .continuous
        .iter()
        .map(|name| (name.clone(), FeatureKind::Continuous))
        .chain(
            partition
                .categorical
                .iter()
                .map(|name| (name.clone(), FeatureKind::Categorical)),
        )
        .collect()
}

fn validate_inputs(reference: &Dataset, production: &Dataset) -> Result<(), DriftError> {
    if reference.is_empty() {
        return Err(DriftError::EmptyDataset("reference".to_string()));
    }
    if production.is_empty() {
        return Err(DriftError::EmptyDataset("production".to_string()));
    }

    let ref_names: BTreeSet<&str> = reference.column_names().into_iter().collect();
    let prod_names: BTreeSet<&str> = production.column_names().into_iter().collect();

    if ref_names != prod_names {
        return Err(DriftError::SchemaMismatch {
            missing: ref_names.difference(&prod_names).join(", "),
            unexpected: prod_names.difference(&ref_names).join(", "),
        });
    }

    Ok(())
}
