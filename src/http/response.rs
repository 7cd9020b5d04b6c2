//! HTTP response building module
//!
//! Builders for the three responses a static file request can end in.

use super::error::error_code;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::borrow::Cow;
use std::io;

pub const NOT_FOUND_BODY: &str = "404 - Page not found";
pub const SERVER_ERROR_PREFIX: &str = "Sorry, check with the site admin for error: ";

/// Placeholder reported in 500 bodies when error codes are hidden
const HIDDEN_ERROR_CODE: &str = "internal";

/// Build 200 OK response carrying the file content
pub fn build_file_response(content: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/html")
        .body(Full::new(Bytes::from_static(NOT_FOUND_BODY.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from_static(NOT_FOUND_BODY.as_bytes())))
        })
}

/// Build 500 Internal Server Error response
///
/// No headers are set. The body names the error code unless `expose_code` is off.
pub fn build_500_response(error: &io::Error, expose_code: bool) -> Response<Full<Bytes>> {
    let code = if expose_code {
        error_code(error)
    } else {
        Cow::Borrowed(HIDDEN_ERROR_CODE)
    };
    let body = format!("{SERVER_ERROR_PREFIX}{code} ..\n");

    Response::builder()
        .status(500)
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            let mut resp = Response::new(Full::new(Bytes::from(body)));
            *resp.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
            resp
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(resp: Response<Full<Bytes>>) -> Bytes {
        match resp.into_body().collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(never) => match never {},
        }
    }

    #[tokio::test]
    async fn test_404_response() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-type"], "text/html");
        assert_eq!(body_of(resp).await, NOT_FOUND_BODY);
    }

    #[tokio::test]
    async fn test_500_response_exposes_code() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        let resp = build_500_response(&err, true);
        assert_eq!(resp.status(), 500);
        assert!(resp.headers().is_empty());
        assert_eq!(
            body_of(resp).await,
            "Sorry, check with the site admin for error: EACCES ..\n"
        );
    }

    #[tokio::test]
    async fn test_500_response_hides_code() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        let body = body_of(build_500_response(&err, false)).await;
        assert_eq!(body, "Sorry, check with the site admin for error: internal ..\n");
    }

    #[tokio::test]
    async fn test_file_response() {
        let resp = build_file_response(b"body{}".to_vec(), "text/css");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().len(), 1);
        assert_eq!(resp.headers()["content-type"], "text/css");
        assert_eq!(body_of(resp).await, "body{}");
    }
}
