const FILE_SEGMENT: &str = "file/";

fn is_absolute_http_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Composes the public URL of a stored file.
///
/// Absolute HTTP(S) URLs are returned unchanged. Relative paths are
/// placed below the `file/` segment of the base URL.
pub fn build_file_url(base_url: &str, path: &str) -> String {
    if is_absolute_http_url(path) {
        return path.to_string();
    }
    let base_url = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.starts_with(FILE_SEGMENT) {
        format!("{base_url}/{path}")
    } else {
        format!("{base_url}/{FILE_SEGMENT}{path}")
    }
}
