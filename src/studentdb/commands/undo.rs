use crate::commands::{CmdMessage, CmdResult, DbState};
use crate::error::Result;

pub fn run(state: &mut DbState) -> Result<CmdResult> {
    if !state.history.undo(&mut state.store) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Nothing to undo.")));
    }
    tracing::debug!(
        undo = state.history.undo_depth(),
        redo = state.history.redo_depth(),
        "undo applied"
    );
    Ok(CmdResult::default().with_message(CmdMessage::success("Undo done.")))
}
