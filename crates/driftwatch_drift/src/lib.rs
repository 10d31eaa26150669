pub mod categorical;
pub mod classifier;
pub mod continuous;
pub mod detector;
pub mod error;

mod binning;
mod stats;

pub use classifier::{classify, FeaturePartition, CARDINALITY_THRESHOLD};
pub use detector::DriftDetector;
