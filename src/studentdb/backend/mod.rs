//! # Persistence Layer
//!
//! A [`Backend`] turns a [`Store`] into a file and back. The rest of the crate only
//! ever talks to this trait, so the live store and the history stay independent of
//! the on-disk representation.
//!
//! ## Implementations
//!
//! - [`binary::BinaryBackend`]: compact bincode encoding behind a magic header
//!   (`studentdb.bin` by default)
//! - [`json::JsonBackend`]: pretty-printed JSON keyed by decimal roll
//!   (`studentdb.json` by default)
//! - [`memory::MemoryBackend`]: keeps saved stores in memory, for tests
//!
//! ## Failure Model
//!
//! Loading never fails. A missing, unreadable or corrupt file, or a file whose
//! top-level shape is wrong, all load as an empty store; individual bad entries
//! are dropped and the rest are kept. Saving is the opposite: any write error is
//! returned to the caller.
//!
//! Writes go to a temporary file next to the target and are renamed into place,
//! so a failed save never leaves a half-written file behind.

use crate::error::{Result, StudentDbError};
use crate::store::Store;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

pub mod binary;
pub mod json;
pub mod memory;

pub use binary::BinaryBackend;
pub use json::JsonBackend;
pub use memory::MemoryBackend;

/// Which on-disk representation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Binary,
    Json,
}

impl BackendKind {
    /// Label shown in the session banner.
    pub fn label(&self) -> &'static str {
        match self {
            BackendKind::Binary => "Binary",
            BackendKind::Json => "JSON",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Binary => write!(f, "binary"),
            BackendKind::Json => write!(f, "json"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(BackendKind::Binary),
            "json" => Ok(BackendKind::Json),
            other => Err(format!("unknown backend '{}' (expected binary or json)", other)),
        }
    }
}

/// Save/load capability for one file representation.
pub trait Backend {
    fn kind(&self) -> BackendKind;

    /// Write the whole store to `path`, replacing any previous content.
    fn save(&self, store: &Store, path: &Path) -> Result<()>;

    /// Read a store from `path`. Anything unreadable yields an empty store.
    fn load(&self, path: &Path) -> Store;
}

impl Backend for Box<dyn Backend> {
    fn kind(&self) -> BackendKind {
        (**self).kind()
    }

    fn save(&self, store: &Store, path: &Path) -> Result<()> {
        (**self).save(store, path)
    }

    fn load(&self, path: &Path) -> Store {
        (**self).load(path)
    }
}

/// Build the file backend for `kind`.
pub fn for_kind(kind: BackendKind) -> Box<dyn Backend> {
    match kind {
        BackendKind::Binary => Box::new(BinaryBackend),
        BackendKind::Json => Box::new(JsonBackend),
    }
}

/// Read the whole file, or `None` if it cannot be read for any reason.
pub(crate) fn read_file(path: &Path) -> Option<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no data file, starting empty");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read data file, starting empty");
            None
        }
    }
}

/// Write `bytes` to a temp file beside `path`, then rename it over `path`.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(StudentDbError::Io)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "studentdb".to_string());
    let tmp_file = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    fs::write(&tmp_file, bytes).map_err(StudentDbError::Io)?;
    if let Err(e) = fs::rename(&tmp_file, path) {
        let _ = fs::remove_file(&tmp_file);
        return Err(StudentDbError::Io(e));
    }
    Ok(())
}
