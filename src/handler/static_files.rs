//! Static file serving module
//!
//! Resolves a request path under the root directory, checks its type against the
//! MIME table and reads the file.

use crate::config::HandlerConfig;
use crate::handler::resolve;
use crate::http::{self, mime, ServeError};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::fs;

/// Request handler bound to one root directory
///
/// Cloning is cheap; clones share the same configuration.
#[derive(Debug, Clone)]
pub struct StaticFileHandler {
    config: Arc<HandlerConfig>,
}

impl StaticFileHandler {
    /// Handler serving files under `root` with default settings
    ///
    /// The directory is not checked here; a missing root shows up as 404s.
    pub fn new(root: impl Into<String>) -> Self {
        Self::with_config(HandlerConfig::new(root))
    }

    pub fn with_config(config: HandlerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Answer a request
    ///
    /// Only the URL path (and, with access logging on, a few headers) is taken
    /// from the request, so the returned future does not borrow it.
    pub fn handle<B>(
        &self,
        req: &Request<B>,
    ) -> impl Future<Output = Response<Full<Bytes>>> + Send + 'static {
        let handler = self.clone();
        let path = req.uri().path().to_string();
        let started = Instant::now();
        let entry = self.config.access_log.then(|| access_entry(req));

        async move {
            let resp = handler.serve_path(&path).await;
            if let Some(entry) = entry {
                handler.log_access(entry, &resp, started);
            }
            resp
        }
    }

    /// Answer a request for a URL path (no query string)
    pub async fn serve_path(&self, path: &str) -> Response<Full<Bytes>> {
        match self.load(path).await {
            Ok((content, content_type)) => http::build_file_response(content, content_type),
            Err(ServeError::Io(e)) => {
                logger::log_error(&format!("Failed to read file for '{path}': {e}"));
                http::build_500_response(&e, self.config.expose_error_codes)
            }
            Err(_) => http::build_404_response(),
        }
    }

    /// Read the file a request path resolves to, with its Content-Type
    pub async fn load(&self, path: &str) -> Result<(Vec<u8>, &'static str), ServeError> {
        let file_path = resolve::resolve_path(&self.config.root, path);

        if self.config.confine_to_root && !resolve::is_within(&self.config.root, &file_path) {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {path} -> {file_path}"
            ));
            return Err(ServeError::OutsideRoot);
        }

        // Unknown types are rejected before the file system is consulted
        let content_type = mime::get_content_type(resolve::extension(&file_path))
            .ok_or(ServeError::UnrecognizedType)?;

        let content = fs::read(&file_path).await?;
        Ok((content, content_type))
    }

    fn log_access(
        &self,
        mut entry: AccessLogEntry,
        resp: &Response<Full<Bytes>>,
        started: Instant,
    ) {
        entry.status = resp.status().as_u16();
        entry.body_bytes = hyper::body::Body::size_hint(resp.body())
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &self.config.access_log_format);
    }
}

fn access_entry<B>(req: &Request<B>) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(req.method().to_string(), req.uri().path().to_string());
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry
}
