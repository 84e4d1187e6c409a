//! # Command Layer
//!
//! One module per session command. Each `run` function takes the live
//! [`DbState`] plus already-validated arguments and returns a [`CmdResult`]
//! describing what happened. Nothing here prints.
//!
//! Recoverable conditions (unknown roll, duplicate roll, empty history) come
//! back as messages inside an `Ok` result. Only persistence failures are
//! returned as `Err`.

use crate::history::History;
use crate::model::Record;
use crate::store::Store;

pub mod add;
pub mod delete;
pub mod redo;
pub mod save;
pub mod search;
pub mod undo;
pub mod update;
pub mod view;

/// The live store together with its undo/redo history.
#[derive(Debug, Default)]
pub struct DbState {
    pub store: Store,
    pub history: History,
}

impl DbState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            history: History::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed by the command, as they ended up.
    pub affected_records: Vec<Record>,
    /// Records the command wants displayed.
    pub listed_records: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    /// True when any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

pub(crate) const NOT_FOUND: &str = "Student not found.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors() {
        let ok = CmdResult::default().with_message(CmdMessage::success("done"));
        assert!(!ok.has_errors());

        let failed = CmdResult::default()
            .with_message(CmdMessage::warning("careful"))
            .with_message(CmdMessage::error(NOT_FOUND));
        assert!(failed.has_errors());
    }
}
