use crate::binning::{histogram_counts, quantile_edges};
use crate::error::DriftError;
use crate::stats::{ks_p_value, ks_statistic};
use driftwatch_types::{Column, DriftConfig, FeatureComparison, KsResult, PsiResult};
use ndarray::{Array1, ArrayView1};

/// Zero bin shares are clamped to this constant to keep the PSI log-ratio
/// finite. Fixed policy, kept for compatibility with the standard PSI
/// formulation rather than a sample-size-aware smoothing.
const ZERO_SHARE_CLAMP: f64 = 0.0001;

/// Two-sample Kolmogorov-Smirnov test. Inputs are the cleaned (non-missing,
/// finite) values of one feature from each dataset.
pub fn ks_test(
    reference: &ArrayView1<f64>,
    production: &ArrayView1<f64>,
    significance_level: f64,
) -> KsResult {
    let mut ref_sorted = reference.to_vec();
    let mut prod_sorted = production.to_vec();
    ref_sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    prod_sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let statistic = ks_statistic(&ref_sorted, &prod_sorted);
    let p_value = ks_p_value(statistic, ref_sorted.len(), prod_sorted.len());

    KsResult {
        statistic,
        p_value,
        drift_detected: p_value < significance_level,
    }
}

/// Population Stability Index over quantile bins of the reference data.
///
/// Bin edges are the reference percentiles at `bins + 1` evenly spaced
/// points, deduplicated; a zero-variance reference collapses to a single bin.
/// Both sides are histogrammed into the same edges, shares are taken over
/// each side's full non-missing count, and exact-zero shares are clamped
/// before the log-ratio.
pub fn population_stability_index(
    reference: &ArrayView1<f64>,
    production: &ArrayView1<f64>,
    bins: usize,
    psi_threshold: f64,
) -> PsiResult {
    let edges = quantile_edges(reference, bins);

    let ref_counts = histogram_counts(reference, &edges);
    let prod_counts = histogram_counts(production, &edges);

    let ref_total = reference.len() as f64;
    let prod_total = production.len() as f64;

    let psi_value = ref_counts
        .iter()
        .zip(prod_counts.iter())
        .map(|(&ref_count, &prod_count)| {
            let ref_share = clamp_share(ref_count as f64 / ref_total);
            let prod_share = clamp_share(prod_count as f64 / prod_total);
            (prod_share - ref_share) * (prod_share / ref_share).ln()
        })
        .sum();

    PsiResult {
        psi_value,
        drift_detected: psi_value >= psi_threshold,
    }
}

fn clamp_share(share: f64) -> f64 {
    if share == 0.0 {
        ZERO_SHARE_CLAMP
    } else {
        share
    }
}

/// Full continuous comparison for one feature: KS and PSI computed
/// independently, feature drift is the OR of the two flags.
pub fn compare(
    name: &str,
    reference: &Column,
    production: &Column,
    config: &DriftConfig,
) -> Result<FeatureComparison, DriftError> {
    let ref_values = reference
        .numeric_values()
        .ok_or_else(|| DriftError::NonNumericFeature(name.to_string()))?;
    let prod_values = production
        .numeric_values()
        .ok_or_else(|| DriftError::NonNumericFeature(name.to_string()))?;

    if ref_values.is_empty() || prod_values.is_empty() {
        return Err(DriftError::EmptyFeature(name.to_string()));
    }

    let ref_values = Array1::from(ref_values);
    let prod_values = Array1::from(prod_values);

    let ks = ks_test(
        &ref_values.view(),
        &prod_values.view(),
        config.significance_level,
    );
    let psi = population_stability_index(
        &ref_values.view(),
        &prod_values.view(),
        config.psi_bins,
        config.psi_threshold,
    );

    let drift_detected = ks.drift_detected || psi.drift_detected;

    Ok(FeatureComparison::Continuous {
        ks_test: ks,
        psi,
        drift_detected,
    })
}
