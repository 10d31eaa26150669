use driftwatch_types::error::{ConfigError, DatasetError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriftError {
    #[error("{0} dataset is empty")]
    EmptyDataset(String),

    #[error("column sets do not match; missing in production: [{missing}], unexpected in production: [{unexpected}]")]
    SchemaMismatch { missing: String, unexpected: String },

    #[error("feature '{0}' has no non-missing values")]
    EmptyFeature(String),

    #[error("feature '{0}' is not numeric, cannot run KS/PSI")]
    NonNumericFeature(String),

    #[error("feature '{0}' not present in dataset")]
    FeatureNotExist(String),

    #[error("contingency table for feature '{0}' has a zero-sum row, chi-square is undefined")]
    DegenerateContingencyTable(String),

    #[error("failed to construct chi-square distribution with {0} degrees of freedom")]
    ChiSquareDistribution(usize),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
