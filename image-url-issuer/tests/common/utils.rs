use std::collections::HashMap;

use lambda_http::{Body, Request, RequestExt, Response};
use url::Url;

/// Gateway event without path parameters
pub fn upload_event(body: Body) -> Request {
    http::Request::builder()
        .method("POST")
        .uri("/images")
        .body(body)
        .unwrap()
}

/// Gateway event carrying the given path parameters
pub fn download_event(params: &[(&str, &str)]) -> Request {
    let params: HashMap<String, String> = params
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    http::Request::builder()
        .method("GET")
        .uri("/images/id")
        .body(Body::Empty)
        .unwrap()
        .with_path_parameters(params)
}

/// Parse response body to JSON
pub fn parse_response_body(response: &Response<Body>) -> serde_json::Value {
    serde_json::from_slice(response.body()).unwrap()
}

/// Extracts the `url` field of a success response
pub fn parse_url(response: &Response<Body>) -> Url {
    let body = parse_response_body(response);
    let url = body["url"].as_str().expect("url should be a string");
    assert!(!url.is_empty());
    Url::parse(url).expect("url should parse")
}

/// Returns the decoded value of a query parameter
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
