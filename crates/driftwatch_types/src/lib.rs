pub mod config;
pub mod dataset;
pub mod error;
pub mod report;

pub use config::*;
pub use dataset::*;
pub use report::*;
