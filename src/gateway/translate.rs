use crate::dispatch::BackendResponse;
use crate::error::GatewayError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Fixed body for any internal fault. The taxonomy stays in the logs; the
/// client only ever learns that a retry might help.
pub const RETRY_MESSAGE: &str = "Something went wrong, please retry";

/// Renders a keyed dispatch outcome for the client.
///
/// Whatever the single dispatch returned — success or a backend application
/// error — passes through verbatim; only infrastructure faults are
/// rewritten.
pub fn keyed_response(result: Result<BackendResponse, GatewayError>) -> Response {
    match result {
        Ok(response) => passthrough(response.status, response.body),
        Err(err) => failure(err),
    }
}

/// Renders a gateway fault for the client.
///
/// A `Backend` fault carries the partition's own status and body and passes
/// through unmodified. Every other kind — discovery, transport,
/// serialization — is logged with its cause and rendered as the generic
/// server fault.
pub fn failure(err: GatewayError) -> Response {
    match err {
        GatewayError::Backend { status, body } => passthrough(status, body),
        other => {
            tracing::error!("Gateway fault: {}", other);
            (StatusCode::INTERNAL_SERVER_ERROR, RETRY_MESSAGE).into_response()
        }
    }
}

fn passthrough(status: u16, body: String) -> Response {
    // A backend handing us a malformed status code is an internal fault,
    // rendered like any other.
    match StatusCode::from_u16(status) {
        Ok(status) => (status, body).into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, RETRY_MESSAGE).into_response(),
    }
}
