//! Upload rules: extension allow-list, filename sanitizing, and rejections.

use std::fmt;

use unicode_normalization::UnicodeNormalization;

/// Extensions accepted when no configuration overrides them.
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 6] = ["pdf", "doc", "docx", "jpg", "jpeg", "png"];

/// Category recorded when the uploader leaves the field out or blank.
pub const DEFAULT_CATEGORY: &str = "Other";

const WINDOWS_DEVICE_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Why an upload was refused. Each variant maps to a 400 plain-text response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejection {
    /// The multipart body has no `document` field.
    MissingFilePart,
    /// The field is present but carries no usable filename.
    NoSelectedFile,
    /// The extension is not in the allow-list.
    DisallowedExtension,
}

impl UploadRejection {
    /// Plain-text body returned to the client.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingFilePart => "No file part",
            Self::NoSelectedFile => "No selected file",
            Self::DisallowedExtension => "Invalid file type",
        }
    }
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Lower-cased last dot-segment of `filename`, or `None` when there is no dot.
#[must_use]
pub fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Whether `filename` carries one of the `allowed` extensions (case-insensitive).
#[must_use]
pub fn is_allowed<S: AsRef<str>>(filename: &str, allowed: &[S]) -> bool {
    extension_of(filename).is_some_and(|ext| {
        allowed
            .iter()
            .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(&ext))
    })
}

/// Reduce a client-supplied filename to a safe, flat ASCII name.
///
/// Text is NFKD-decomposed so accents fold to their base letter, then
/// path separators become word breaks, non-ASCII characters are dropped,
/// whitespace runs become `_`, anything outside `[A-Za-z0-9_.-]` is removed,
/// and leading/trailing `.`/`_` are stripped. Windows device names get a `_`
/// prefix. The result may be empty.
#[must_use]
pub fn secure_filename(name: &str) -> String {
    let flattened: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    let stem = trimmed.split('.').next().unwrap_or_default();
    if !trimmed.is_empty()
        && WINDOWS_DEVICE_NAMES
            .iter()
            .any(|device| device.eq_ignore_ascii_case(stem))
    {
        return format!("_{trimmed}");
    }
    trimmed.to_string()
}

/// Validate a submitted filename and return its sanitized form.
///
/// Checks run in the order the upload route reports them: blank name,
/// then extension. A name that sanitizes to nothing counts as blank.
///
/// # Errors
///
/// Returns the first `UploadRejection` that applies.
pub fn validate_upload_name<S: AsRef<str>>(
    raw: &str,
    allowed: &[S],
) -> Result<String, UploadRejection> {
    if raw.is_empty() {
        return Err(UploadRejection::NoSelectedFile);
    }
    if !is_allowed(raw, allowed) {
        return Err(UploadRejection::DisallowedExtension);
    }
    let safe = secure_filename(raw);
    if safe.is_empty() {
        return Err(UploadRejection::NoSelectedFile);
    }
    if !is_allowed(&safe, allowed) {
        return Err(UploadRejection::DisallowedExtension);
    }
    Ok(safe)
}

/// MIME type served for a stored document.
#[must_use]
pub fn content_type_for(filename: &str) -> &'static str {
    match extension_of(filename).as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
