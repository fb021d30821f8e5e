//! JSON response envelopes returned through the gateway

use http::{header::CONTENT_TYPE, StatusCode};
use lambda_http::{Body, Error, Response};
use serde::Serialize;

/// Success envelope carrying a presigned URL
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    /// The presigned URL
    pub url: String,
}

/// Serializes `payload` into a JSON response with the given status
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized or the response cannot be built
pub fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(payload)?;
    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))?;
    Ok(response)
}
