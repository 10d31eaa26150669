use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind assigned to each reference column at classification time. A column's
/// runtime representation is never re-inspected after this is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Continuous,
    Categorical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KsResult {
    pub statistic: f64,
    pub p_value: f64,
    pub drift_detected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsiResult {
    pub psi_value: f64,
    pub drift_detected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChiSquareResult {
    pub statistic: f64,
    pub p_value: f64,
    pub drift_detected: bool,
}

/// Per-feature detail entry. Continuous features carry both KS and PSI
/// results; categorical features carry the chi-square result. A comparison
/// that could not be computed is reported as `Failed` with the error message
/// rather than being dropped or counted as "no drift".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeatureComparison {
    Continuous {
        ks_test: KsResult,
        psi: PsiResult,
        drift_detected: bool,
    },
    Categorical {
        chi_square: ChiSquareResult,
        drift_detected: bool,
    },
    Failed {
        error: String,
    },
}

impl FeatureComparison {
    pub fn drift_detected(&self) -> bool {
        match self {
            FeatureComparison::Continuous { drift_detected, .. } => *drift_detected,
            FeatureComparison::Categorical { drift_detected, .. } => *drift_detected,
            FeatureComparison::Failed { .. } => false,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FeatureComparison::Failed { .. })
    }
}

/// Aggregated outcome of a single detection run.
///
/// `features_with_drift` follows the classifier's traversal order: the
/// continuous group first, then the categorical group, each in reference
/// column order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriftReport {
    pub drift_detected: bool,
    pub features_with_drift: Vec<String>,
    pub feature_details: HashMap<String, FeatureComparison>,
}

impl DriftReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
