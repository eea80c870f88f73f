use crate::entities::DEFAULT_MIME;

const MIME_BY_EXTENSION: &[(&str, &str)] = &[
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".webp", "image/webp"),
    (".bmp", "image/bmp"),
    (".ico", "image/x-icon"),
    (".svg", "image/svg+xml"),
    (".avif", "image/avif"),
    (".heic", "image/heic"),
];

/// Guesses the MIME type of an image by its file name.
pub fn mime_type_of(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    MIME_BY_EXTENSION
        .iter()
        .find(|(ext, _)| lower.ends_with(ext))
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_MIME)
}
