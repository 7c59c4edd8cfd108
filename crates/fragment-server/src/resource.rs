// ABOUTME: The ConfigResource owning the on-disk configuration document.
// ABOUTME: Holds the write-password digest, the file path, and the reader/writer lock.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use fragment_core::auth;
use fragment_core::document::{ConfigDocument, DEFAULT_DOCUMENT};
use tokio::sync::RwLock;

use crate::error::ApiError;

/// Owns the configuration document: the file path, the optional
/// write-password digest, and the lock mediating all file access.
/// Constructed once at startup; the file is the durable state.
pub struct ConfigResource {
    digest: Option<String>,
    path: PathBuf,
    file_lock: RwLock<()>,
}

/// Type alias for the Arc-wrapped resource used with Axum's State extractor.
pub type SharedResource = Arc<ConfigResource>;

impl ConfigResource {
    /// Open the resource at `path`, seeding the default document when no
    /// file exists yet so reads never fail on a fresh install.
    ///
    /// `digest` is the hex SHA-256 of the write password, in either case;
    /// it is normalized to uppercase here. `None` or an empty string puts
    /// the resource in read-only mode for the process lifetime.
    pub fn open(path: impl Into<PathBuf>, digest: Option<String>) -> std::io::Result<Self> {
        let path = path.into();
        let digest = digest
            .filter(|d| !d.is_empty())
            .map(|d| d.to_ascii_uppercase());

        if !path.exists() {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, DEFAULT_DOCUMENT)?;
        }

        Ok(Self {
            digest,
            path,
            file_lock: RwLock::new(()),
        })
    }

    /// Whether a write password is configured.
    pub fn writable(&self) -> bool {
        self.digest.is_some()
    }

    /// The `Allow` value advertised for the resource, fixed at construction.
    pub fn allow_header(&self) -> &'static str {
        if self.writable() {
            "OPTIONS, GET, HEAD, POST"
        } else {
            "OPTIONS, GET, HEAD"
        }
    }

    /// Check a submitted password against the configured digest.
    /// Always false in read-only mode.
    pub fn verify(&self, password: &str) -> bool {
        self.digest
            .as_deref()
            .is_some_and(|digest| auth::verify_password(digest, password))
    }

    /// Read the current document bytes under the shared lock. Concurrent
    /// reads proceed in parallel; a replace in flight holds the exclusive
    /// lock, so a reader sees either the old or the new document in full.
    pub async fn read_bytes(&self) -> Result<Vec<u8>, ApiError> {
        let _guard = self.file_lock.read().await;

        Ok(fs::read(&self.path)?)
    }

    /// Replace the document under the exclusive lock. The encoded document
    /// is written to a temporary file in the same directory, fsynced, and
    /// renamed over the target, so the file never holds a partial document
    /// even across a crash mid-write.
    pub async fn replace(&self, document: &ConfigDocument) -> Result<(), ApiError> {
        let json = serde_json::to_vec(document).map_err(std::io::Error::other)?;

        let _guard = self.file_lock.write().await;

        let tmp_path = self.path.with_extension("tmp");
        let mut file = File::create(&tmp_path)?;
        file.write_all(&json)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
