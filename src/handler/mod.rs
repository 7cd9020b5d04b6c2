//! Request handler module
//!
//! Maps a request to a file under the root directory and answers it.

pub mod resolve;
mod service;
pub mod static_files;

// Re-export main entry point
pub use static_files::StaticFileHandler;
