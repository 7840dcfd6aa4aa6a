/// Response header helpers shared by every handler

use axum::http::HeaderValue;
use axum::response::Response;

/// CORS headers attached to all responses, pre-flight included
pub fn add_cors(mut resp: Response) -> Response {
    let headers = resp.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("POST, OPTIONS"),
    );
    resp
}

/// Cache-suppression headers for the raw relay variant
pub fn add_no_store(mut resp: Response) -> Response {
    let headers = resp.headers_mut();
    headers.insert(
        "Cache-Control",
        HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
    );
    headers.insert("Pragma", HeaderValue::from_static("no-cache"));
    headers.insert("Expires", HeaderValue::from_static("0"));
    resp
}
