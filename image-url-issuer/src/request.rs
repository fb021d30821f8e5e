//! Routing of gateway events to typed image URL requests

use lambda_http::{Request, RequestExt};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while turning a gateway event into an [`ImageUrlRequest`]
#[derive(Error, Debug)]
pub enum RequestError {
    /// Upload request arrived without a body
    #[error("request body is missing")]
    MissingBody,

    /// Upload body is not a JSON object with an `imageKey` string
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadBody {
    image_key: String,
}

/// What the caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageUrlRequest {
    /// Issue a PUT URL for a new image
    Upload {
        /// Key the image will be written to
        image_key: String,
    },
    /// Issue a GET URL for an existing image
    Download {
        /// Key of the image to read
        id: String,
    },
}

impl ImageUrlRequest {
    /// Routes a gateway event
    ///
    /// Events without path parameters are uploads and must carry a
    /// `{"imageKey": ...}` body. Events with path parameters are downloads of
    /// the `id` parameter; a missing `id` yields an empty key, which the
    /// storage layer rejects.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::MissingBody` or `RequestError::MalformedBody`
    /// for upload events whose body cannot be read
    pub fn from_event(event: &Request) -> Result<Self, RequestError> {
        let path_parameters = event.path_parameters();

        if path_parameters.is_empty() {
            let body = event.body();
            if body.is_empty() {
                return Err(RequestError::MissingBody);
            }
            let UploadBody { image_key } = serde_json::from_slice(body)?;
            return Ok(Self::Upload { image_key });
        }

        tracing::info!(?path_parameters, "path parameters");
        let id = path_parameters.first("id").unwrap_or_default().to_string();
        Ok(Self::Download { id })
    }
}
