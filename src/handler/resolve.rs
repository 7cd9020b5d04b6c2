//! Request path resolution
//!
//! Joins a request path onto the root directory the way a POSIX `path.join`
//! does: purely lexically, without touching the file system.

/// File served for an empty or `/` request path
pub const INDEX_FILE: &str = "index.html";

/// Resolve a request URL path against the root directory
pub fn resolve_path(root: &str, request_path: &str) -> String {
    let relative = if request_path.is_empty() || request_path == "/" {
        INDEX_FILE
    } else {
        request_path
    };
    join(root, relative)
}

/// Join two path strings and normalize the result
///
/// A leading `/` on `tail` does not reset the join; it is just a separator.
pub fn join(head: &str, tail: &str) -> String {
    let joined = match (head.is_empty(), tail.is_empty()) {
        (true, true) => return ".".to_string(),
        (true, false) => tail.to_string(),
        (false, true) => head.to_string(),
        (false, false) => format!("{head}/{tail}"),
    };
    normalize(&joined)
}

/// Collapse `.`, `..` and repeated separators
///
/// `..` never climbs above `/` in an absolute path; in a relative path an
/// unresolvable `..` is kept. A trailing separator is preserved.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if !absolute => segments.push(".."),
                _ => {}
            },
            name => segments.push(name),
        }
    }

    let mut out = segments.join("/");
    if absolute {
        out.insert(0, '/');
    }
    if out.is_empty() {
        out.push('.');
    }
    if trailing && !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Extension of the final path segment, including its leading dot
///
/// Trailing separators are ignored. Names starting with their only dot
/// (`.profile`) and the names `.`/`..` have no extension.
pub fn extension(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches('/');
    let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
    if name == ".." {
        return None;
    }
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&name[idx..]),
    }
}

/// Check that an already normalized path stays inside `root`
pub fn is_within(root: &str, resolved: &str) -> bool {
    let root = normalize(root);
    if root.starts_with('/') != resolved.starts_with('/') {
        return false;
    }

    let parts = |p: &str| -> Vec<String> {
        p.split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .map(str::to_string)
            .collect()
    };
    let root_parts = parts(&root);
    let resolved_parts = parts(resolved);

    resolved_parts.starts_with(&root_parts)
        && resolved_parts.get(root_parts.len()).map(String::as_str) != Some("..")
}
