use crate::backend::Backend;
use crate::commands::{CmdMessage, CmdResult, DbState};
use crate::error::Result;
use std::path::Path;

/// Persist the live store. Write failures are returned, not reported.
pub fn run<B: Backend>(state: &DbState, backend: &B, path: &Path) -> Result<CmdResult> {
    backend.save(&state.store, path)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Saved.")))
}
