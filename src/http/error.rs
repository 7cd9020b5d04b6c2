//! Serving error module
//!
//! Classifies why a request could not be answered with a file.

use std::borrow::Cow;
use std::fmt;
use std::io;

/// Reasons a request was not served with file content
#[derive(Debug)]
pub enum ServeError {
    /// Extension has no entry in the MIME table (file system not consulted)
    UnrecognizedType,
    /// Resolved path lies outside the root directory
    OutsideRoot,
    /// File does not exist
    FileNotFound,
    /// Any other read failure
    Io(io::Error),
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedType => write!(f, "unrecognized file type"),
            Self::OutsideRoot => write!(f, "path resolves outside the root directory"),
            Self::FileNotFound => write!(f, "file not found"),
            Self::Io(e) => write!(f, "read failed ({}): {e}", error_code(e)),
        }
    }
}

impl std::error::Error for ServeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ServeError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound
        } else {
            Self::Io(e)
        }
    }
}

/// POSIX-style code for an I/O error, e.g. `EACCES`
///
/// OS errors are named after their errno. Errors without one fall back to
/// their kind, and kinds without a well-known code map to `UNKNOWN`.
pub fn error_code(e: &io::Error) -> Cow<'static, str> {
    match e.raw_os_error().and_then(errno_name) {
        Some(name) => Cow::Owned(name),
        None => Cow::Borrowed(kind_code(e.kind())),
    }
}

#[cfg(unix)]
fn errno_name(raw: i32) -> Option<String> {
    use nix::errno::Errno;

    match Errno::from_raw(raw) {
        Errno::UnknownErrno => None,
        errno => Some(format!("{errno:?}")),
    }
}

#[cfg(not(unix))]
const fn errno_name(_raw: i32) -> Option<String> {
    None
}

const fn kind_code(kind: io::ErrorKind) -> &'static str {
    use io::ErrorKind::{
        AddrInUse, AlreadyExists, BrokenPipe, ConnectionRefused, ConnectionReset,
        DirectoryNotEmpty, Interrupted, InvalidInput, IsADirectory, NotADirectory, NotFound,
        OutOfMemory, PermissionDenied, ReadOnlyFilesystem, ResourceBusy, StorageFull, TimedOut,
        Unsupported, WouldBlock,
    };

    match kind {
        NotFound => "ENOENT",
        PermissionDenied => "EACCES",
        IsADirectory => "EISDIR",
        NotADirectory => "ENOTDIR",
        AlreadyExists => "EEXIST",
        DirectoryNotEmpty => "ENOTEMPTY",
        ReadOnlyFilesystem => "EROFS",
        StorageFull => "ENOSPC",
        ResourceBusy => "EBUSY",
        InvalidInput => "EINVAL",
        Interrupted => "EINTR",
        TimedOut => "ETIMEDOUT",
        WouldBlock => "EAGAIN",
        OutOfMemory => "ENOMEM",
        Unsupported => "ENOTSUP",
        BrokenPipe => "EPIPE",
        ConnectionRefused => "ECONNREFUSED",
        ConnectionReset => "ECONNRESET",
        AddrInUse => "EADDRINUSE",
        _ => "UNKNOWN",
    }
}
