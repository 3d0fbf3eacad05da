//! Object paths for uploaded documents

use uuid::Uuid;

const FALLBACK_BASE_NAME: &str = "document";

/// Split a file name into base name and extension (with its dot).
///
/// The extension is everything after the last dot; a name without a dot has
/// an empty extension.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(index) => (&file_name[..index], &file_name[index..]),
        None => (file_name, ""),
    }
}

/// Keep only ASCII letters, digits, `-` and `_`; an empty result becomes `document`
pub fn sanitize_base_name(base: &str) -> String {
    let sanitized: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if sanitized.is_empty() {
        FALLBACK_BASE_NAME.to_string()
    } else {
        sanitized
    }
}

/// `submissions/<prefix>/<epoch-millis>-<suffix>-<sanitized-base><extension>`
pub fn storage_path(prefix: &str, file_name: &str, epoch_millis: i64, suffix: Uuid) -> String {
    let (base, extension) = split_extension(file_name);
    format!(
        "submissions/{prefix}/{epoch_millis}-{suffix}-{}{extension}",
        sanitize_base_name(base)
    )
}
