use crate::error::DriftError;
use crate::stats::chi_square_p_value;
use driftwatch_types::{ChiSquareResult, Column, DriftConfig, FeatureComparison};
use ndarray::{Array2, Axis};
use std::collections::{BTreeMap, BTreeSet};

/// Chi-square test of independence between dataset origin and category
/// membership. The category universe is the union of categories seen on
/// either side, so a category new to production (or gone from it) enters the
/// table with a zero count on the missing side.
///
/// Tables with one degree of freedom (two categories) use Yates' continuity
/// correction, matching scipy's `chi2_contingency` default.
///
/// A side with no observations leaves a zero-sum row, which undefines the
/// test and is surfaced as an error attributed to the feature. A single
/// shared category (zero degrees of freedom) is reported as statistic 0 with
/// p-value 1.
pub fn chi_square_test(
    name: &str,
    reference: &[String],
    production: &[String],
    significance_level: f64,
) -> Result<ChiSquareResult, DriftError> {
    if reference.is_empty() || production.is_empty() {
        return Err(DriftError::DegenerateContingencyTable(name.to_string()));
    }

    let categories: BTreeSet<&str> = reference
        .iter()
        .map(String::as_str)
        .chain(production.iter().map(String::as_str))
        .collect();

    let ref_counts = count_by_category(reference);
    let prod_counts = count_by_category(production);

    let mut observed = Array2::<f64>::zeros((2, categories.len()));
    for (k, category) in categories.iter().enumerate() {
        observed[[0, k]] = ref_counts.get(category).copied().unwrap_or(0) as f64;
        observed[[1, k]] = prod_counts.get(category).copied().unwrap_or(0) as f64;
    }

    let df = categories.len() - 1;
    let statistic = chi_square_statistic(&observed, df == 1);
    let p_value = chi_square_p_value(statistic, df)?;

    Ok(ChiSquareResult {
        statistic,
        p_value,
        drift_detected: p_value < significance_level,
    })
}

fn count_by_category(labels: &[String]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for label in labels {
        *counts.entry(label.as_str()).or_insert(0) += 1;
    }
    counts
}

fn chi_square_statistic(observed: &Array2<f64>, yates_correction: bool) -> f64 {
    let row_totals = observed.sum_axis(Axis(1));
    let col_totals = observed.sum_axis(Axis(0));
    let grand_total = observed.sum();

    observed
        .indexed_iter()
        .map(|((row, col), &count)| {
            let expected = row_totals[row] * col_totals[col] / grand_total;
            let mut delta = (count - expected).abs();
            if yates_correction {
                delta = (delta - 0.5).max(0.0);
            }
            delta * delta / expected
        })
        .sum()
}

/// Full categorical comparison for one feature.
pub fn compare(
    name: &str,
    reference: &Column,
    production: &Column,
    config: &DriftConfig,
) -> Result<FeatureComparison, DriftError> {
    let ref_labels = reference.category_labels();
    let prod_labels = production.category_labels();

    let chi_square = chi_square_test(name, &ref_labels, &prod_labels, config.significance_level)?;
    let drift_detected = chi_square.drift_detected;

    Ok(FeatureComparison::Categorical {
        chi_square,
        drift_detected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn labels(spec: &[(&str, usize)]) -> Vec<String> {
        spec.iter()
            .flat_map(|(label, count)| std::iter::repeat_n(label.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_identical_distributions_no_drift() {
        let reference = labels(&[("a", 50), ("b", 30), ("c", 20)]);
        let production = labels(&[("a", 50), ("b", 30), ("c", 20)]);

        let result = chi_square_test("f", &reference, &production, 0.05).unwrap();

        assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.p_value, 1.0);
        assert!(!result.drift_detected);
    }

    #[test]
    fn test_shifted_distribution_drift() {
        let reference = labels(&[("a", 90), ("b", 10)]);
        let production = labels(&[("a", 10), ("b", 90)]);

        let result = chi_square_test("f", &reference, &production, 0.05).unwrap();

        assert!(result.statistic > 50.0);
        assert!(result.p_value < 1e-6);
        assert!(result.drift_detected);
    }

    #[test]
    fn test_two_category_table_uses_continuity_correction() {
        // 54/46 vs 40/60: the plain Pearson statistic is ~3.93 (p ~0.047),
        // which would flag drift; the corrected statistic is ~3.39 (p ~0.066)
        let reference = labels(&[("a", 54), ("b", 46)]);
        let production = labels(&[("a", 40), ("b", 60)]);

        let result = chi_square_test("f", &reference, &production, 0.05).unwrap();

        assert_relative_eq!(result.statistic, 3.3922, epsilon = 1e-3);
        assert!(result.p_value > 0.06 && result.p_value < 0.07);
        assert!(!result.drift_detected);
    }

    #[test]
    fn test_three_category_table_is_plain_pearson() {
        // the correction only applies at one degree of freedom
        let reference = labels(&[("a", 50), ("b", 30), ("c", 20)]);
        let production = labels(&[("a", 30), ("b", 50), ("c", 20)]);

        let result = chi_square_test("f", &reference, &production, 0.05).unwrap();

        // scipy chi2_contingency: statistic 10.0, df 2
        assert_relative_eq!(result.statistic, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_category_missing_on_one_side() {
        // "c" only appears in production, once; the table must still build
        let reference = labels(&[("a", 50), ("b", 50)]);
        let production = labels(&[("a", 50), ("b", 49), ("c", 1)]);

        let result = chi_square_test("f", &reference, &production, 0.05).unwrap();

        assert!(result.statistic.is_finite());
        assert!(result.p_value > 0.0 && result.p_value <= 1.0);
    }

    #[test]
    fn test_single_shared_category_is_not_drift() {
        let reference = labels(&[("only", 40)]);
        let production = labels(&[("only", 60)]);

        let result = chi_square_test("f", &reference, &production, 0.05).unwrap();

        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
        assert!(!result.drift_detected);
    }

    #[test]
    fn test_empty_side_is_degenerate() {
        let reference = labels(&[("a", 10)]);
        let production: Vec<String> = Vec::new();

        let result = chi_square_test("f", &reference, &production, 0.05);

        assert!(matches!(
            result,
            Err(DriftError::DegenerateContingencyTable(_))
        ));
    }

    #[test]
    fn test_compare_numeric_binary_column() {
        let reference = Column::numeric("flag", (0..100).map(|i| Some((i % 2) as f64)).collect());
        let production = Column::numeric("flag", (0..100).map(|_| Some(1.0)).collect());

        let result = compare("flag", &reference, &production, &DriftConfig::default()).unwrap();

        match result {
            FeatureComparison::Categorical {
                chi_square,
                drift_detected,
            } => {
                assert!(drift_detected);
                assert!(chi_square.p_value < 0.05);
            }
            _ => panic!("expected categorical comparison"),
        }
    }
}
