//! Extension-based MIME resolution for `file:` URLs.

/// Resolves a MIME type from the file extension of a `file:` URL. An unknown
/// extension yields `None`, matching the host MIME database contract.
pub fn from_url(url: &str) -> Option<String> {
    mime_guess::from_path(file_url_path(url))
        .first()
        .map(|mime| mime.essence_str().to_string())
}

/// Extracts the local filesystem path encoded in a `file:` URL.
pub fn file_url_path(url: &str) -> &str {
    url.strip_prefix("file://")
        .or_else(|| url.strip_prefix("file:"))
        .unwrap_or(url)
}

/// Chooser targets match MIME types case-insensitively; normalize before
/// dispatch.
pub fn normalize(mime: &str) -> String {
    mime.trim().to_ascii_lowercase()
}
