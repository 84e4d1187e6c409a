use crate::commands::{CmdMessage, CmdResult, DbState};
use crate::error::{Result, StudentDbError};
use crate::model::{Marks, Roll};

pub const DUPLICATE: &str = "Roll already exists. Use update option.";

/// Add a student.
///
/// The snapshot is taken before the duplicate check, so a rejected add still
/// occupies an undo slot and clears redo.
pub fn run(state: &mut DbState, roll: Roll, name: String, marks: Marks) -> Result<CmdResult> {
    state.history.record(&state.store);

    match state.store.add(roll, name, marks) {
        Ok(record) => Ok(CmdResult::default()
            .with_affected_records(vec![record.clone()])
            .with_message(CmdMessage::success("Student added."))),
        Err(StudentDbError::DuplicateKey(_)) => {
            tracing::debug!(roll, "add rejected, roll exists");
            Ok(CmdResult::default().with_message(CmdMessage::error(DUPLICATE)))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{undo, MessageLevel};
    use crate::model::Record;

    #[test]
    fn adds_record() {
        let mut state = DbState::default();
        let result = run(&mut state, 1, "Amit".into(), 88).unwrap();

        assert_eq!(result.affected_records, vec![Record::new(1, "Amit", 88)]);
        assert_eq!(result.messages[0].content, "Student added.");
        assert_eq!(state.store.get(1), Some(&Record::new(1, "Amit", 88)));
        assert!(state.history.can_undo());
    }

    #[test]
    fn duplicate_leaves_store_but_records_snapshot() {
        let mut state = DbState::default();
        run(&mut state, 1, "Amit".into(), 88).unwrap();
        let before = state.store.clone();
        let depth = state.history.undo_depth();

        let result = run(&mut state, 1, "X".into(), 0).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(result.messages[0].content, DUPLICATE);
        assert!(result.affected_records.is_empty());
        assert_eq!(state.store, before);
        assert_eq!(state.history.undo_depth(), depth + 1);

        // Undoing the rejected add is a no-op.
        undo::run(&mut state).unwrap();
        assert_eq!(state.store, before);
    }

    #[test]
    fn duplicate_clears_redo() {
        let mut state = DbState::default();
        run(&mut state, 1, "Amit".into(), 88).unwrap();
        run(&mut state, 2, "Ravi".into(), 70).unwrap();
        undo::run(&mut state).unwrap();
        assert!(state.history.can_redo());

        run(&mut state, 1, "Dup".into(), 5).unwrap();
        assert!(!state.history.can_redo());
    }
}
