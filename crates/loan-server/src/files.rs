//! Upload directory on local disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use loan_config::{CollisionPolicy, UploadConfig};
use loan_core::uploads::secure_filename;
use uuid::Uuid;

/// Stores uploaded document bytes under a flat directory.
///
/// Writes are not synchronized. Under [`CollisionPolicy::Overwrite`] two
/// uploads with the same sanitized name race on one path and the last write
/// wins.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    collision: CollisionPolicy,
    allowed_extensions: Vec<String>,
    max_bytes: usize,
}

impl FileStore {
    /// Open the store, creating the directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the directory cannot be created.
    pub fn open(config: &UploadConfig) -> std::io::Result<Self> {
        std::fs::create_dir_all(&config.dir)?;
        Ok(Self {
            root: config.dir.clone(),
            collision: config.collision,
            allowed_extensions: config.allowed_extensions.clone(),
            max_bytes: config.max_bytes,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    #[must_use]
    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Key a sanitized upload name will be stored under.
    fn storage_key(&self, application_id: i64, name: &str) -> String {
        match self.collision {
            CollisionPolicy::Prefix => {
                format!("{application_id}-{}-{name}", Uuid::new_v4().simple())
            }
            CollisionPolicy::Overwrite => name.to_string(),
        }
    }

    /// Write `bytes` for an already-sanitized `name` and return the storage key.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be written.
    pub async fn save(
        &self,
        application_id: i64,
        name: &str,
        bytes: &[u8],
    ) -> std::io::Result<String> {
        let key = self.storage_key(application_id, name);
        let path = self.root.join(&key);
        if self.collision == CollisionPolicy::Overwrite
            && tokio::fs::try_exists(&path).await.unwrap_or(false)
        {
            tracing::warn!(key = %key, "overwriting stored document with the same name");
        }
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(key = %key, size = bytes.len(), "document bytes written");
        Ok(key)
    }

    /// Read a stored document by key.
    ///
    /// Names that do not survive sanitizing unchanged never reach the
    /// filesystem. Returns `None` when nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns I/O errors other than not-found.
    pub async fn read(&self, key: &str) -> std::io::Result<Option<Vec<u8>>> {
        if key.is_empty() || secure_filename(key) != key {
            return Ok(None);
        }
        match tokio::fs::read(self.root.join(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error),
        }
    }
}
