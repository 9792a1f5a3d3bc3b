use std::path::Path;

/// Derive the label file's display name from the uploaded file's name:
/// strip the extension, append `_markers`, use the fixed `.txt` extension.
/// Two concurrent uploads sharing a base name get the same display name;
/// uniqueness of the stored artifact is the storage layer's job.
pub fn label_file_name(original: &str) -> String {
    let base = Path::new(original)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("converted");
    format!("{}_markers.txt", base)
}
