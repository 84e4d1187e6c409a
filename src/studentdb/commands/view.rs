use crate::commands::{CmdMessage, CmdResult, DbState};
use crate::error::Result;

pub fn run(state: &DbState) -> Result<CmdResult> {
    let records: Vec<_> = state.store.list_all().into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    Ok(result.with_listed_records(records))
}
