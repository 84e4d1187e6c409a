//! Core data types.
//!
//! A [`Record`] is one student entry. Its `roll` doubles as the key it is filed
//! under in the [`Store`](crate::store::Store), so the two must always agree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a record.
pub type Roll = u64;

/// Marks are nominally 0-100, but only the input boundary prompts for that range.
pub type Marks = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub roll: Roll,
    pub name: String,
    pub marks: Marks,
}

impl Record {
    pub fn new(roll: Roll, name: impl Into<String>, marks: Marks) -> Self {
        Self {
            roll,
            name: name.into(),
            marks,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roll: {} | Name: {} | Marks: {}",
            self.roll, self.name, self.marks
        )
    }
}
