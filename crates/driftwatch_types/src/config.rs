use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;
pub const DEFAULT_PSI_THRESHOLD: f64 = 0.25;
pub const DEFAULT_PSI_BINS: usize = 10;

/// Tuning parameters for a drift detection run.
///
/// `categorical_features`, when present, fully overrides categorical
/// auto-detection: the continuous group becomes every remaining column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftConfig {
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,

    #[serde(default = "default_psi_threshold")]
    pub psi_threshold: f64,

    #[serde(default = "default_psi_bins")]
    pub psi_bins: usize,

    #[serde(default)]
    pub categorical_features: Option<Vec<String>>,
}

fn default_significance_level() -> f64 {
    DEFAULT_SIGNIFICANCE_LEVEL
}

fn default_psi_threshold() -> f64 {
    DEFAULT_PSI_THRESHOLD
}

fn default_psi_bins() -> usize {
    DEFAULT_PSI_BINS
}

impl Default for DriftConfig {
    fn default() -> Self {
        DriftConfig {
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            psi_threshold: DEFAULT_PSI_THRESHOLD,
            psi_bins: DEFAULT_PSI_BINS,
            categorical_features: None,
        }
    }
}

impl DriftConfig {
    pub fn new(
        significance_level: Option<f64>,
        psi_threshold: Option<f64>,
        psi_bins: Option<usize>,
        categorical_features: Option<Vec<String>>,
    ) -> Result<Self, ConfigError> {
        let config = DriftConfig {
            significance_level: significance_level.unwrap_or(DEFAULT_SIGNIFICANCE_LEVEL),
            psi_threshold: psi_threshold.unwrap_or(DEFAULT_PSI_THRESHOLD),
            psi_bins: psi_bins.unwrap_or(DEFAULT_PSI_BINS),
            categorical_features,
        };

        config.validate()?;
        Ok(config)
    }

    /// Deserialized configs bypass `new`, so callers holding externally
    /// supplied values must validate before running a detection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(ConfigError::InvalidSignificanceLevel(
                self.significance_level,
            ));
        }

        if self.psi_threshold <= 0.0 {
            return Err(ConfigError::InvalidPsiThreshold(self.psi_threshold));
        }

        if self.psi_bins < 2 {
            return Err(ConfigError::InvalidPsiBinCount(self.psi_bins));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DriftConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.significance_level, 0.05);
        assert_eq!(config.psi_threshold, 0.25);
        assert_eq!(config.psi_bins, 10);
        assert!(config.categorical_features.is_none());
    }

    #[test]
    fn test_config_rejects_out_of_range_values() {
        assert!(matches!(
            DriftConfig::new(Some(0.0), None, None, None),
            Err(ConfigError::InvalidSignificanceLevel(_))
        ));
        assert!(matches!(
            DriftConfig::new(Some(1.0), None, None, None),
            Err(ConfigError::InvalidSignificanceLevel(_))
        ));
        assert!(matches!(
            DriftConfig::new(None, Some(-0.1), None, None),
            Err(ConfigError::InvalidPsiThreshold(_))
        ));
        assert!(matches!(
            DriftConfig::new(None, None, Some(1), None),
            Err(ConfigError::InvalidPsiBinCount(_))
        ));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: DriftConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.significance_level, DEFAULT_SIGNIFICANCE_LEVEL);

        let config: DriftConfig =
            serde_json::from_str(r#"{"significance_level": 0.01, "psi_bins": 5}"#).unwrap();
        assert_eq!(config.significance_level, 0.01);
        assert_eq!(config.psi_bins, 5);
        assert_eq!(config.psi_threshold, DEFAULT_PSI_THRESHOLD);
    }
}
