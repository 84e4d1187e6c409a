use crate::commands::{CmdMessage, CmdResult, DbState, NOT_FOUND};
use crate::error::Result;
use crate::model::Roll;

/// Delete a student. An unknown roll records nothing in the history.
pub fn run(state: &mut DbState, roll: Roll) -> Result<CmdResult> {
    if !state.store.contains(roll) {
        return Ok(CmdResult::default().with_message(CmdMessage::error(NOT_FOUND)));
    }
    state.history.record(&state.store);
    let removed = state.store.delete(roll)?;
    Ok(CmdResult::default()
        .with_affected_records(vec![removed])
        .with_message(CmdMessage::success("Student deleted.")))
}
