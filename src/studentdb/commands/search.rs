use crate::commands::{CmdMessage, CmdResult, DbState, NOT_FOUND};
use crate::error::Result;
use crate::model::Roll;

pub fn run(state: &DbState, roll: Roll) -> Result<CmdResult> {
    let result = match state.store.get(roll) {
        Some(record) => CmdResult::default().with_listed_records(vec![record.clone()]),
        None => CmdResult::default().with_message(CmdMessage::error(NOT_FOUND)),
    };
    Ok(result)
}
