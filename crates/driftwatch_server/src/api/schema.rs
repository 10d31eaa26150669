use driftwatch_types::{Dataset, DriftConfig};
use serde::Deserialize;

/// Body of `POST /drift/detect`. Config fields are optional and fall back to
/// the engine defaults; validation happens when the detector is constructed.
#[derive(Debug, Deserialize)]
pub struct DriftDetectRequest {
    pub reference: Dataset,
    pub production: Dataset,

    #[serde(default)]
    pub config: DriftConfig,
}
