//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every session operation, whatever the UI.
//!
//! It owns the three pieces of session state: the live store with its history,
//! the persistence backend, and the data file path. Each method dispatches to
//! exactly one command and returns its `CmdResult`.
//!
//! ## Generic Over Backend
//!
//! `StudentDbApi<B: Backend>` is generic over the persistence backend:
//! - Production: `StudentDbApi<Box<dyn Backend>>` picked from the config
//! - Testing: `StudentDbApi<MemoryBackend>`

use crate::backend::Backend;
use crate::commands::{self, DbState};
use crate::error::Result;
use crate::history::History;
use crate::model::{Marks, Record, Roll};
use crate::store::Store;
use std::path::{Path, PathBuf};

pub use crate::backend::BackendKind;
pub use commands::update::RecordUpdate;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

pub struct StudentDbApi<B: Backend> {
    state: DbState,
    backend: B,
    path: PathBuf,
}

impl<B: Backend> StudentDbApi<B> {
    /// Start a session from whatever `backend` can load from `path`.
    pub fn open(backend: B, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = backend.load(&path);
        tracing::info!(
            backend = %backend.kind(),
            path = %path.display(),
            records = store.len(),
            "store loaded"
        );
        Self::with_store(backend, path, store)
    }

    /// Start a session from an explicit store, ignoring anything on disk.
    pub fn with_store(backend: B, path: impl Into<PathBuf>, store: Store) -> Self {
        Self {
            state: DbState::new(store),
            backend,
            path: path.into(),
        }
    }

    pub fn add(&mut self, roll: Roll, name: String, marks: Marks) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.state, roll, name, marks)
    }

    pub fn view_all(&self) -> Result<commands::CmdResult> {
        commands::view::run(&self.state)
    }

    pub fn search(&self, roll: Roll) -> Result<commands::CmdResult> {
        commands::search::run(&self.state, roll)
    }

    pub fn update(&mut self, roll: Roll, update: RecordUpdate) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.state, roll, update)
    }

    pub fn delete(&mut self, roll: Roll) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.state, roll)
    }

    pub fn undo(&mut self) -> Result<commands::CmdResult> {
        commands::undo::run(&mut self.state)
    }

    pub fn redo(&mut self) -> Result<commands::CmdResult> {
        commands::redo::run(&mut self.state)
    }

    pub fn save(&self) -> Result<commands::CmdResult> {
        commands::save::run(&self.state, &self.backend, &self.path)
    }

    /// Read-only lookup, for showing current values before an update.
    pub fn get(&self, roll: Roll) -> Option<&Record> {
        self.state.store.get(roll)
    }

    pub fn store(&self) -> &Store {
        &self.state.store
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
