//! Upload directory and file acceptance rules.

use loan_core::uploads::DEFAULT_ALLOWED_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_dir() -> PathBuf {
    PathBuf::from("documents")
}

fn default_allowed_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// 16 MiB.
const fn default_max_bytes() -> usize {
    16 * 1024 * 1024
}

/// How two uploads that sanitize to the same filename share the upload directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Store each upload under `{application}-{random}-{name}`; nothing is overwritten.
    #[default]
    Prefix,
    /// Store under the sanitized name; a later upload replaces the earlier bytes.
    Overwrite,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Directory holding uploaded documents, created on first run.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Accepted extensions, compared case-insensitively.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    #[serde(default)]
    pub collision: CollisionPolicy,

    /// Maximum accepted request body for uploads.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            allowed_extensions: default_allowed_extensions(),
            collision: CollisionPolicy::default(),
            max_bytes: default_max_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_office_and_image_formats() {
        let config = UploadConfig::default();
        assert_eq!(config.dir, PathBuf::from("documents"));
        assert_eq!(
            config.allowed_extensions,
            vec!["pdf", "doc", "docx", "jpg", "jpeg", "png"]
        );
        assert_eq!(config.collision, CollisionPolicy::Prefix);
        assert_eq!(config.max_bytes, 16 * 1024 * 1024);
    }
}
