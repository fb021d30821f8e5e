use http::StatusCode;
use lambda_http::{Body, Error, Request, Response};
use tracing::instrument;

use crate::{
    media_storage::MediaStorage,
    request::ImageUrlRequest,
    types::{json_response, AppError, UrlResponse},
};

/// Lambda entry point: answers every event with a JSON response
///
/// All failures, including a success payload that cannot be serialized, are
/// turned into a `{"message": ...}` response with the matching status.
///
/// # Errors
///
/// Returns an error only if the error response itself cannot be built
#[instrument(skip(media_storage, event))]
pub async fn function_handler(
    media_storage: &MediaStorage,
    event: Request,
) -> Result<Response<Body>, Error> {
    let result = issue_url(media_storage, &event).await;

    match result.map(|url| json_response(StatusCode::OK, &UrlResponse { url })) {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(err)) => {
            tracing::error!("Failed to build response: {err}");
            AppError::internal().into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Routes the event and signs the matching URL
///
/// # Errors
///
/// Returns `AppError` with status 400 for unreadable requests or empty keys,
/// and 500 when signing fails
pub async fn issue_url(media_storage: &MediaStorage, event: &Request) -> Result<String, AppError> {
    let request = ImageUrlRequest::from_event(event)?;

    let presigned_url = match request {
        ImageUrlRequest::Upload { image_key } => {
            tracing::info!(image_key = %image_key, "signing upload url");
            media_storage.generate_presigned_put_url(&image_key).await?
        }
        ImageUrlRequest::Download { id } => {
            tracing::info!(id = %id, "signing download url");
            media_storage.generate_presigned_get_url(&id).await?
        }
    };

    tracing::info!(
        bucket = media_storage.bucket_name(),
        expires_at = %presigned_url.expires_at.to_rfc3339(),
        "presigned url issued"
    );

    Ok(presigned_url.url)
}
