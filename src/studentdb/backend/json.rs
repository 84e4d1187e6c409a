//! JSON backend.
//!
//! JSON objects only have string keys, so each roll is written as its decimal
//! string while the record keeps the numeric `roll` field:
//!
//! ```text
//! {
//!   "1": {
//!     "roll": 1,
//!     "name": "Amit",
//!     "marks": 88
//!   }
//! }
//! ```

use super::{read_file, write_atomic, Backend, BackendKind};
use crate::error::Result;
use crate::input::parse_integer;
use crate::model::{Record, Roll};
use crate::store::Store;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_FILE_NAME: &str = "studentdb.json";

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonBackend;

impl JsonBackend {
    pub fn encode(store: &Store) -> Result<String> {
        let object: BTreeMap<String, &Record> = store
            .list_all()
            .into_iter()
            .map(|record| (record.roll.to_string(), record))
            .collect();
        Ok(serde_json::to_string_pretty(&object)?)
    }

    /// Decode file text. A non-object top level is empty; bad entries are dropped.
    pub fn decode(text: &str) -> Store {
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "could not parse JSON data file, starting empty");
                return Store::new();
            }
        };
        let Value::Object(object) = value else {
            tracing::warn!("JSON data file is not an object, starting empty");
            return Store::new();
        };

        let mut store = Store::new();
        for (key, entry) in object {
            let Some(roll) = parse_integer::<Roll>(&key) else {
                tracing::debug!(%key, "dropping entry with non-numeric key");
                continue;
            };
            if !entry.is_object() {
                tracing::debug!(%key, "dropping entry that is not an object");
                continue;
            }
            match serde_json::from_value::<Record>(entry) {
                Ok(record) => {
                    if store.contains(roll) {
                        tracing::debug!(%key, roll, "key collides with an earlier entry, replacing it");
                    }
                    store.insert_loaded(roll, record);
                }
                Err(e) => tracing::debug!(%key, error = %e, "dropping malformed record"),
            }
        }
        store
    }
}

impl Backend for JsonBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Json
    }

    fn save(&self, store: &Store, path: &Path) -> Result<()> {
        let text = Self::encode(store)?;
        write_atomic(path, text.as_bytes())?;
        tracing::info!(path = %path.display(), records = store.len(), "saved JSON data file");
        Ok(())
    }

    fn load(&self, path: &Path) -> Store {
        let Some(bytes) = read_file(path) else {
            return Store::new();
        };
        match String::from_utf8(bytes) {
            Ok(text) => Self::decode(&text),
            Err(e) => {
                tracing::warn!(error = %e, "JSON data file is not UTF-8, starting empty");
                Store::new()
            }
        }
    }
}
