use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("significance level must be in (0, 1), got {0}")]
    InvalidSignificanceLevel(f64),

    #[error("PSI threshold must be positive, got {0}")]
    InvalidPsiThreshold(f64),

    #[error("PSI bin count must be at least 2, got {0}")]
    InvalidPsiBinCount(usize),
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("column '{name}' has {actual} rows, expected {expected}")]
    ColumnLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column name '{0}'")]
    DuplicateColumnName(String),
}
