use crate::commands::{CmdMessage, CmdResult, DbState, NOT_FOUND};
use crate::error::Result;
use crate::input::parse_integer;
use crate::model::{Marks, Roll};

pub const INVALID_MARKS: &str = "Invalid marks. Keeping old marks.";

/// Replacement values for an update. `None` keeps the current value.
///
/// `marks` is the raw answer: it is only parsed here, and an unparsable value
/// is dropped with a warning instead of failing the whole update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub marks: Option<String>,
}

impl RecordUpdate {
    /// Build from the two prompt answers; blank means keep.
    pub fn from_answers(name: &str, marks: &str) -> Self {
        let keep_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            name: keep_blank(name),
            marks: keep_blank(marks),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn marks(mut self, marks: impl Into<String>) -> Self {
        self.marks = Some(marks.into());
        self
    }
}

/// Update a student. An unknown roll records nothing in the history.
pub fn run(state: &mut DbState, roll: Roll, update: RecordUpdate) -> Result<CmdResult> {
    if !state.store.contains(roll) {
        return Ok(CmdResult::default().with_message(CmdMessage::error(NOT_FOUND)));
    }
    state.history.record(&state.store);

    let mut result = CmdResult::default();
    let marks = match update.marks.as_deref() {
        Some(raw) => {
            let parsed = parse_integer::<Marks>(raw);
            if parsed.is_none() {
                result.add_message(CmdMessage::warning(INVALID_MARKS));
            }
            parsed
        }
        None => None,
    };

    let record = state.store.update(roll, update.name, marks)?.clone();
    result.add_message(CmdMessage::success("Student updated."));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, undo, MessageLevel};
    use crate::model::Record;

    fn with_amit() -> DbState {
        let mut state = DbState::default();
        add::run(&mut state, 1, "Amit".into(), 88).unwrap();
        state
    }

    #[test]
    fn from_answers_blank_keeps() {
        assert_eq!(RecordUpdate::from_answers("  ", ""), RecordUpdate::default());
        assert_eq!(
            RecordUpdate::from_answers(" Ravi ", "70"),
            RecordUpdate::default().name("Ravi").marks("70")
        );
    }

    #[test]
    fn updates_supplied_fields() {
        let mut state = with_amit();
        let result = run(&mut state, 1, RecordUpdate::default().marks("95")).unwrap();

        assert_eq!(result.affected_records, vec![Record::new(1, "Amit", 95)]);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Student updated.");
    }

    #[test]
    fn invalid_marks_kept_with_warning() {
        let mut state = with_amit();
        let update = RecordUpdate::default().name("Amit Kumar").marks("ninety");
        let result = run(&mut state, 1, update).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, INVALID_MARKS);
        assert_eq!(result.messages[1].content, "Student updated.");
        assert_eq!(state.store.get(1), Some(&Record::new(1, "Amit Kumar", 88)));
    }

    #[test]
    fn missing_roll_does_not_touch_history() {
        let mut state = with_amit();
        let depth = state.history.undo_depth();

        let result = run(&mut state, 2, RecordUpdate::default().name("Ghost")).unwrap();
        assert_eq!(result.messages[0].content, NOT_FOUND);
        assert_eq!(state.history.undo_depth(), depth);
        assert!(!state.store.contains(2));
    }

    #[test]
    fn undo_restores_previous_values() {
        let mut state = with_amit();
        run(&mut state, 1, RecordUpdate::default().name("Changed").marks("1")).unwrap();
        undo::run(&mut state).unwrap();
        assert_eq!(state.store.get(1), Some(&Record::new(1, "Amit", 88)));
    }
}
