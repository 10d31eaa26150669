use crate::error::DriftError;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Two-sample KS statistic: the maximum absolute distance between the two
/// empirical CDFs. Both inputs must be sorted ascending.
pub fn ks_statistic(reference_sorted: &[f64], production_sorted: &[f64]) -> f64 {
    let n1 = reference_sorted.len() as f64;
    let n2 = production_sorted.len() as f64;

    let mut i = 0;
    let mut j = 0;
    let mut distance: f64 = 0.0;

    while i < reference_sorted.len() && j < production_sorted.len() {
        let x = reference_sorted[i].min(production_sorted[j]);

        while i < reference_sorted.len() && reference_sorted[i] <= x {
            i += 1;
        }
        while j < production_sorted.len() && production_sorted[j] <= x {
            j += 1;
        }

        distance = distance.max((i as f64 / n1 - j as f64 / n2).abs());
    }

    distance
}

/// Asymptotic p-value for the two-sample KS statistic via the Kolmogorov
/// distribution, with the effective-sample-size correction
/// `lambda = (sqrt(ne) + 0.12 + 0.11 / sqrt(ne)) * D`.
///
/// The alternating series `Q(lambda) = 2 * sum (-1)^(k-1) exp(-2 k^2 lambda^2)`
/// converges fast for any practically distinguishable statistic; if it does
/// not converge within 100 terms (lambda near zero) the p-value is 1.
///
/// This is the large-sample approximation only. scipy's `ks_2samp` switches
/// to the exact two-sample distribution for small samples, so p-values here
/// can differ slightly from scipy's at small n (e.g. ~0.95 vs ~0.96 for
/// D = 0.1 with 50 observations per side).
pub fn ks_p_value(statistic: f64, n1: usize, n2: usize) -> f64 {
    if statistic <= 0.0 {
        return 1.0;
    }

    let ne = (n1 * n2) as f64 / (n1 + n2) as f64;
    let sqrt_ne = ne.sqrt();
    let lambda = (sqrt_ne + 0.12 + 0.11 / sqrt_ne) * statistic;

    let a2 = -2.0 * lambda * lambda;
    let mut fac = 2.0;
    let mut sum = 0.0;
    let mut prev_term: f64 = 0.0;

    for k in 1..=100u32 {
        let term = fac * (a2 * f64::from(k * k)).exp();
        sum += term;

        if term.abs() <= 0.001 * prev_term || term.abs() <= 1e-10 * sum.abs() {
            return sum.clamp(0.0, 1.0);
        }

        fac = -fac;
        prev_term = term.abs();
    }

    1.0
}

/// Upper-tail chi-square p-value. Zero degrees of freedom means the two
/// samples share a single category and carries no evidence of drift.
pub fn chi_square_p_value(statistic: f64, df: usize) -> Result<f64, DriftError> {
    if df == 0 {
        return Ok(1.0);
    }

    let dist =
        ChiSquared::new(df as f64).map_err(|_| DriftError::ChiSquareDistribution(df))?;

    Ok((1.0 - dist.cdf(statistic)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ks_statistic_identical_samples() {
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        assert_eq!(ks_statistic(&data, &data), 0.0);
    }

    #[test]
    fn test_ks_statistic_disjoint_samples() {
        let a: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let b: Vec<f64> = (100..150).map(|i| i as f64).collect();

        assert_relative_eq!(ks_statistic(&a, &b), 1.0);
    }

    #[test]
    fn test_ks_statistic_with_ties() {
        let a = vec![1.0, 1.0, 2.0, 2.0];
        let b = vec![1.0, 2.0, 2.0, 2.0];

        // ECDFs differ by 0.25 at x = 1
        assert_relative_eq!(ks_statistic(&a, &b), 0.25);
    }

    #[test]
    fn test_ks_p_value_zero_statistic() {
        assert_eq!(ks_p_value(0.0, 100, 100), 1.0);
    }

    #[test]
    fn test_ks_p_value_large_statistic() {
        assert!(ks_p_value(1.0, 1000, 1000) < 1e-10);
    }

    #[test]
    fn test_ks_p_value_known_value() {
        // the asymptotic approximation gives p ~= 0.95 for D = 0.1 with
        // n1 = n2 = 50 (scipy's exact two-sample value is ~0.96)
        let p = ks_p_value(0.1, 50, 50);
        assert!(p > 0.9 && p < 1.0, "p = {p}");
    }

    #[test]
    fn test_chi_square_p_value_bounds() {
        assert_eq!(chi_square_p_value(0.0, 0).unwrap(), 1.0);
        assert_relative_eq!(chi_square_p_value(0.0, 3).unwrap(), 1.0);
        assert!(chi_square_p_value(100.0, 1).unwrap() < 1e-10);
    }

    #[test]
    fn test_chi_square_p_value_known_value() {
        // chi2 upper tail at the 0.05 critical value for df = 1 is 0.05
        let p = chi_square_p_value(3.841, 1).unwrap();
        assert_relative_eq!(p, 0.05, epsilon = 1e-3);
    }
}
