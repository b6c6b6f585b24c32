use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness check for load balancers and container orchestration.
pub struct HealthApi;

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns `healthy` while the process is serving requests. Does not
    /// touch the database or the model endpoint.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
