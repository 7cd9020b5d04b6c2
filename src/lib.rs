//! Static file request handler for hyper-based HTTP servers.
//!
//! [`StaticFileHandler`] is bound to a root directory. For each request it resolves
//! the URL path under that directory (`/` and the empty path become `index.html`),
//! picks the Content-Type from a fixed extension table and answers with the file,
//! a 404 or a 500.
//!
//! ```no_run
//! use hyper::server::conn::http1;
//! use static_file_handler::StaticFileHandler;
//!
//! # async fn serve(io: impl hyper::rt::Read + hyper::rt::Write + Unpin + Send + 'static) {
//! let handler = StaticFileHandler::new("/var/www");
//! let _ = http1::Builder::new().serve_connection(io, handler).await;
//! # }
//! ```

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;

pub use config::HandlerConfig;
pub use handler::StaticFileHandler;
pub use http::ServeError;
