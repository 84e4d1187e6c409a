use colored::Colorize;
use std::io::{self, Write};
use studentdb::api::{CmdMessage, MessageLevel};
use studentdb::model::Record;

const RULE: &str = "=========================";

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_menu<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, " {}", format!("StudentDB ({})", label).bold())?;
    writeln!(out, "{}", RULE)?;
    for line in [
        "1. Add Student",
        "2. View All Students",
        "3. Search Student",
        "4. Update Student",
        "5. Delete Student",
        "6. Undo",
        "7. Redo",
        "8. Save",
        "9. Save & Exit",
        "10. Exit (No Save)",
    ] {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)
}

pub(super) fn print_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{}", "--- All Students ---".bold())?;
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

pub(super) fn print_found<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(out, "Found -> {}", record)?;
    }
    Ok(())
}

pub(super) fn print_current<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(
        out,
        "Current -> Name: {} | Marks: {}",
        record.name, record.marks
    )
}
