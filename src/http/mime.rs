//! MIME type detection module
//!
//! Maps a file extension (with its leading dot) to the Content-Type served for it.
//! Only the extensions listed in [`MIME_TYPES`] are recognized; everything else is
//! treated as not servable.

/// Recognized extensions and their Content-Type values
pub const MIME_TYPES: [(&str, &str); 5] = [
    (".html", "text/html"),
    (".js", "text/javascript"),
    (".css", "text/css"),
    (".png", "image/png"),
    (".jpg", "image/jpg"),
];

/// Get MIME Content-Type for an extension such as `".html"`
///
/// Matching is case-insensitive. Returns `None` for unknown or missing extensions.
///
/// # Examples
/// ```
/// use static_file_handler::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some(".HTML")), Some("text/html"));
/// assert_eq!(get_content_type(Some(".mp4")), None);
/// assert_eq!(get_content_type(None), None);
/// ```
pub fn get_content_type(extension: Option<&str>) -> Option<&'static str> {
    let extension = extension?;
    MIME_TYPES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, mime)| *mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(get_content_type(Some(".html")), Some("text/html"));
        assert_eq!(get_content_type(Some(".js")), Some("text/javascript"));
        assert_eq!(get_content_type(Some(".css")), Some("text/css"));
        assert_eq!(get_content_type(Some(".png")), Some("image/png"));
        assert_eq!(get_content_type(Some(".jpg")), Some("image/jpg"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(get_content_type(Some(".JPG")), Some("image/jpg"));
        assert_eq!(get_content_type(Some(".Css")), Some("text/css"));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some(".htm")), None);
        assert_eq!(get_content_type(Some(".jpeg")), None);
        assert_eq!(get_content_type(Some("html")), None);
        assert_eq!(get_content_type(Some(".")), None);
        assert_eq!(get_content_type(None), None);
    }
}
