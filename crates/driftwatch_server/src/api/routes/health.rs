use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Alive {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl Default for Alive {
    fn default() -> Self {
        Alive {
            status: "healthy",
            service: "driftwatch",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub async fn health_check() -> Json<Alive> {
    Json(Alive::default())
}
