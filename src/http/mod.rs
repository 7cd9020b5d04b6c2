//! HTTP protocol layer module
//!
//! Content-type detection, error classification and response builders,
//! decoupled from how a request is resolved to a file.

pub mod error;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use error::{error_code, ServeError};
pub use response::{build_404_response, build_500_response, build_file_response};
