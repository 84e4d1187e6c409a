//! # Snapshot History
//!
//! Undo/redo is implemented with two stacks of whole-store snapshots rather than
//! inverse operations. Every snapshot is an owned [`Store`] value, so nothing in
//! either stack can alias the live store.
//!
//! Recording a snapshot always discards the redo stack: history never branches.
//!
//! `undo` and `redo` move the live store into the opposite stack instead of
//! cloning it, and move the popped snapshot back out as the new live store.

use crate::store::Store;
use std::mem;

#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Store>,
    redo: Vec<Store>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a copy of `store` onto the undo stack and clear redo.
    pub fn record(&mut self, store: &Store) {
        self.undo.push(store.clone());
        self.redo.clear();
        tracing::debug!(undo = self.undo.len(), "snapshot recorded");
    }

    /// Restore the most recent snapshot into `store`.
    ///
    /// Returns `false`, leaving `store` untouched, when there is nothing to undo.
    pub fn undo(&mut self, store: &mut Store) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                self.redo.push(mem::replace(store, previous));
                true
            }
            None => false,
        }
    }

    /// Reapply the most recently undone state into `store`.
    ///
    /// Returns `false`, leaving `store` untouched, when there is nothing to redo.
    pub fn redo(&mut self, store: &mut Store) -> bool {
        match self.redo.pop() {
            Some(next) => {
                self.undo.push(mem::replace(store, next));
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_empty_is_soft() {
        let mut history = History::new();
        let mut store = Store::new();
        store.add(1, "Amit", 88).unwrap();
        let before = store.clone();

        assert!(!history.undo(&mut store));
        assert_eq!(store, before);
        assert!(!history.redo(&mut store));
        assert_eq!(store, before);
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = History::new();
        let mut store = Store::new();

        history.record(&store);
        store.add(1, "Amit", 88).unwrap();
        let after_add = store.clone();

        assert!(history.undo(&mut store));
        assert!(store.is_empty());
        assert_eq!(history.redo_depth(), 1);

        assert!(history.redo(&mut store));
        assert_eq!(store, after_add);
        assert_eq!(history.undo_depth(), 1);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        let mut store = Store::new();

        history.record(&store);
        store.add(1, "Amit", 88).unwrap();
        history.undo(&mut store);
        assert!(history.can_redo());

        history.record(&store);
        store.add(2, "Ravi", 70).unwrap();
        assert!(!history.can_redo());
        assert!(!history.redo(&mut store));
    }

    #[test]
    fn test_snapshot_not_aliased() {
        let mut history = History::new();
        let mut store = Store::new();
        store.add(1, "Amit", 88).unwrap();

        history.record(&store);
        store.update(1, Some("Changed".into()), Some(1)).unwrap();

        history.undo(&mut store);
        assert_eq!(store.get(1).unwrap().name, "Amit");
        assert_eq!(store.get(1).unwrap().marks, 88);
    }

    #[test]
    fn test_multi_level_undo() {
        let mut history = History::new();
        let mut store = Store::new();
        for roll in 1..=3 {
            history.record(&store);
            store.add(roll, format!("S{}", roll), 50).unwrap();
        }
        assert_eq!(history.undo_depth(), 3);

        while history.undo(&mut store) {}
        assert!(store.is_empty());
        assert_eq!(history.redo_depth(), 3);
    }
}
