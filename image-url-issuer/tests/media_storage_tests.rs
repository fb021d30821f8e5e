mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use common::*;
use image_url_issuer::media_storage::{
    BucketError, MediaStorage, DOWNLOAD_URL_EXPIRY_SECS, UPLOAD_URL_EXPIRY_SECS,
};
use url::Url;

fn media_storage() -> MediaStorage {
    MediaStorage::new(Arc::new(offline_s3_client()), TEST_BUCKET.to_string())
}

#[tokio::test]
async fn test_put_url_expiry() {
    let storage = media_storage();
    let before = Utc::now();

    let presigned = storage.generate_presigned_put_url("photo1.png").await.unwrap();

    let lifetime = presigned.expires_at - before;
    assert!(lifetime >= Duration::seconds(600));
    assert!(lifetime < Duration::seconds(605));

    let url = Url::parse(&presigned.url).unwrap();
    assert_eq!(
        query_param(&url, "X-Amz-Expires"),
        Some(UPLOAD_URL_EXPIRY_SECS.to_string())
    );
}

#[tokio::test]
async fn test_get_url_expiry() {
    let storage = media_storage();
    let before = Utc::now();

    let presigned = storage.generate_presigned_get_url("photo1.png").await.unwrap();

    let lifetime = presigned.expires_at - before;
    assert!(lifetime >= Duration::hours(24));
    assert!(lifetime < Duration::hours(24) + Duration::seconds(5));

    let url = Url::parse(&presigned.url).unwrap();
    assert_eq!(
        query_param(&url, "X-Amz-Expires"),
        Some(DOWNLOAD_URL_EXPIRY_SECS.to_string())
    );
    // GET URLs are not bound to a content type
    let signed_headers = query_param(&url, "X-Amz-SignedHeaders").unwrap();
    assert!(!signed_headers.contains("content-type"));
}

#[tokio::test]
async fn test_empty_key_is_invalid_input() {
    let storage = media_storage();

    assert!(matches!(
        storage.generate_presigned_put_url("").await,
        Err(BucketError::InvalidInput(_))
    ));
    assert!(matches!(
        storage.generate_presigned_get_url("").await,
        Err(BucketError::InvalidInput(_))
    ));
}

#[test]
fn test_bucket_name() {
    assert_eq!(media_storage().bucket_name(), TEST_BUCKET);
}
