use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// JSON response body. Encoding failures are logged and answered with a bare
/// 500 since nothing has been written yet.
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => ([(CONTENT_TYPE, "application/json")], body).into_response(),
            Err(err) => {
                error!("Failed to encode response body: {err}");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let header = [(CONTENT_TYPE, "text/plain")];
                (status, header, "Internal Server Error").into_response()
            }
        }
    }
}
