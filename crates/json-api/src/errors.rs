//! JSON error bodies.

use salvo::{
    http::{ResBody, StatusError},
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

fn error_message(error: &StatusError) -> String {
    if error.brief.is_empty() {
        error.name.clone()
    } else {
        error.brief.clone()
    }
}

/// Render every error response as `{"error": "..."}`.
#[handler]
pub(crate) async fn json_errors(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    ctrl.call_next(req, depot, res).await;

    let status = res.status_code.unwrap_or(StatusCode::OK);

    let message = match res.take_body() {
        ResBody::Error(error) => error_message(&error),
        ResBody::None if status.is_client_error() || status.is_server_error() => status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string(),
        body => {
            res.body(body);

            return;
        }
    };

    res.render(Json(ErrorResponse { error: message }));
}
