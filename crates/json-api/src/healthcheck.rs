//! Bookstore JSON API Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`
    pub message: String,

    /// Why the store could not be reached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Healthcheck handler
///
/// Pings the store; 503 when it cannot be reached.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Store reachable"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state_or_500()?;

    match state.health.check().await {
        Ok(()) => Ok(Json(HealthResponse {
            message: "healthy".to_string(),
            error: None,
        })),
        Err(error) => {
            warn!("health check failed: {error}");

            res.status_code(StatusCode::SERVICE_UNAVAILABLE);

            Ok(Json(HealthResponse {
                message: "unhealthy".to_string(),
                error: Some(error.to_string()),
            }))
        }
    }
}
