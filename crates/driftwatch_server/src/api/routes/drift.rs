use crate::api::error::ServerError;
use crate::api::schema::DriftDetectRequest;
use axum::Json;
use driftwatch_drift::DriftDetector;
use driftwatch_types::DriftReport;
use tracing::info;

/// Runs a full drift detection over the uploaded datasets and returns the
/// report. The engine never sees the transport; this handler only constructs
/// the inputs and serializes the result.
pub async fn detect_drift(
    Json(request): Json<DriftDetectRequest>,
) -> Result<Json<DriftReport>, ServerError> {
    let detector = DriftDetector::new(request.config)?;
    let report = detector.detect_drift(&request.reference, &request.production)?;

    info!(
        drift_detected = report.drift_detected,
        features = report.feature_details.len(),
        "drift detection request served"
    );

    Ok(Json(report))
}
