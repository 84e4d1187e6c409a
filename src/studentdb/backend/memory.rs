use super::{Backend, BackendKind};
use crate::error::{Result, StudentDbError};
use crate::store::Store;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory backend for testing.
///
/// Uses `RefCell` for interior mutability since the session is single-threaded,
/// which lets `Backend` keep `&self` for both save and load.
#[derive(Default)]
pub struct MemoryBackend {
    kind: BackendKind,
    files: RefCell<HashMap<PathBuf, Store>>,
    simulate_write_error: RefCell<bool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that reports `kind`, for exercising per-format labels.
    pub fn of_kind(kind: BackendKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Pre-populate `path` as if a previous session had saved `store` there.
    pub fn with_file(self, path: impl Into<PathBuf>, store: Store) -> Self {
        self.files.borrow_mut().insert(path.into(), store);
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// What was last saved at `path`, if anything.
    pub fn saved(&self, path: &Path) -> Option<Store> {
        self.files.borrow().get(path).cloned()
    }
}

impl Backend for MemoryBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn save(&self, store: &Store, path: &Path) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StudentDbError::Io(io::Error::other("simulated write error")));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), store.clone());
        Ok(())
    }

    fn load(&self, path: &Path) -> Store {
        self.saved(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let backend = MemoryBackend::new();
        let path = Path::new("db.bin");
        let mut store = Store::new();
        store.add(1, "Amit", 88).unwrap();

        backend.save(&store, path).unwrap();
        assert_eq!(backend.load(path), store);
        assert!(backend.load(Path::new("other.bin")).is_empty());
    }

    #[test]
    fn test_saved_copy_is_independent() {
        let backend = MemoryBackend::new();
        let path = Path::new("db.bin");
        let mut store = Store::new();
        store.add(1, "Amit", 88).unwrap();
        backend.save(&store, path).unwrap();

        store.delete(1).unwrap();
        assert_eq!(backend.load(path).len(), 1);
    }

    #[test]
    fn test_reported_kind() {
        assert_eq!(MemoryBackend::new().kind(), BackendKind::Binary);
        assert_eq!(MemoryBackend::of_kind(BackendKind::Json).kind(), BackendKind::Json);
    }

    #[test]
    fn test_simulated_write_error() {
        let backend = MemoryBackend::new();
        backend.set_simulate_write_error(true);
        match backend.save(&Store::new(), Path::new("db.bin")) {
            Err(StudentDbError::Io(_)) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
        assert!(backend.saved(Path::new("db.bin")).is_none());
    }
}
