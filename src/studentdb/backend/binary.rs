//! Binary backend.
//!
//! File layout: the 4-byte magic `SDB1`, then a bincode-encoded list of
//! `(key, record)` pairs. Keys are written as integers; text keys are still
//! accepted on load and coerced when they hold a decimal number.

use super::{read_file, write_atomic, Backend, BackendKind};
use crate::error::Result;
use crate::model::{Record, Roll};
use crate::store::Store;
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAGIC: &[u8; 4] = b"SDB1";
pub const DEFAULT_FILE_NAME: &str = "studentdb.bin";

const SIZE_LIMIT: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryKey {
    Int(Roll),
    Text(String),
}

impl BinaryKey {
    fn coerce(&self) -> Option<Roll> {
        match self {
            BinaryKey::Int(roll) => Some(*roll),
            BinaryKey::Text(text) => text.trim().parse().ok(),
        }
    }
}

type Entries = Vec<(BinaryKey, Record)>;

fn codec() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SIZE_LIMIT)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryBackend;

impl BinaryBackend {
    /// Encode a store, header included.
    pub fn encode(store: &Store) -> Result<Vec<u8>> {
        let entries: Entries = store
            .list_all()
            .into_iter()
            .map(|record| (BinaryKey::Int(record.roll), record.clone()))
            .collect();
        Self::encode_entries(&entries)
    }

    /// Encode raw entries. Lets callers produce files with text keys.
    pub fn encode_entries(entries: &[(BinaryKey, Record)]) -> Result<Vec<u8>> {
        let mut bytes = MAGIC.to_vec();
        bytes.extend(codec().serialize(entries)?);
        Ok(bytes)
    }

    /// Decode a file image. Anything that is not a valid entry list is empty.
    pub fn decode(bytes: &[u8]) -> Store {
        let Some(payload) = bytes.strip_prefix(MAGIC.as_slice()) else {
            tracing::warn!("binary data file has no StudentDB header, starting empty");
            return Store::new();
        };
        let entries: Entries = match codec().deserialize(payload) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "could not decode binary data file, starting empty");
                return Store::new();
            }
        };

        let mut store = Store::new();
        for (key, record) in entries {
            match key.coerce() {
                Some(roll) => store.insert_loaded(roll, record),
                None => tracing::debug!(?key, "dropping entry with non-integer key"),
            }
        }
        store
    }
}

impl Backend for BinaryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Binary
    }

    fn save(&self, store: &Store, path: &Path) -> Result<()> {
        let bytes = Self::encode(store)?;
        write_atomic(path, &bytes)?;
        tracing::info!(path = %path.display(), records = store.len(), "saved binary data file");
        Ok(())
    }

    fn load(&self, path: &Path) -> Store {
        match read_file(path) {
            Some(bytes) => Self::decode(&bytes),
            None => Store::new(),
        }
    }
}
