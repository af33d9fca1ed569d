//! JSON file backend - the post document as a single pretty-printed file.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use quickboard_core::PersistenceError;
use quickboard_core::ports::{PostBackend, PostDocument};

/// Stores the whole document in one JSON file.
///
/// Writes go to a sibling `.tmp` file that is then renamed over the target,
/// so readers never observe a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("db.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write `bytes` to `temp`, fsync, then rename it over the target.
    async fn replace_with(&self, temp: &Path, bytes: &[u8]) -> Result<(), PersistenceError> {
        let write_err = |e: std::io::Error| PersistenceError::Write(format!("{}: {}", temp.display(), e));

        let mut file = fs::File::create(temp).await.map_err(write_err)?;
        file.write_all(bytes).await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        fs::rename(temp, &self.path)
            .await
            .map_err(|e| PersistenceError::Write(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl PostBackend for JsonFileBackend {
    async fn load(&self) -> Result<Option<PostDocument>, PersistenceError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Store file does not exist");
                return Ok(None);
            }
            Err(e) => return Err(PersistenceError::Read(format!("{}: {}", self.path.display(), e))),
        };

        if raw.trim().is_empty() {
            tracing::warn!(path = %self.path.display(), "Store file is empty, treating as missing");
            return Ok(None);
        }

        let document: PostDocument = serde_json::from_str(&raw)
            .map_err(|e| PersistenceError::Malformed(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(
            path = %self.path.display(),
            posts = document.posts.len(),
            "Store file loaded"
        );

        Ok(Some(document))
    }

    async fn save(&self, document: &PostDocument) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| PersistenceError::Write(format!("serialization failed: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::Write(format!("{}: {}", parent.display(), e)))?;
        }

        let temp = self.temp_path();
        if let Err(e) = self.replace_with(&temp, &bytes).await {
            // Best effort; the write error is what gets reported.
            let _ = fs::remove_file(&temp).await;
            return Err(e);
        }

        tracing::debug!(
            path = %self.path.display(),
            posts = document.posts.len(),
            bytes = bytes.len(),
            "Store file written"
        );

        Ok(())
    }

    fn describe(&self) -> String {
        format!("json-file:{}", self.path.display())
    }
}
