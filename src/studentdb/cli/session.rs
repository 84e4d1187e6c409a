use super::print::{print_current, print_found, print_menu, print_messages, print_records};
use std::io::{BufRead, Write};
use std::str::FromStr;
use studentdb::api::{CmdMessage, RecordUpdate, StudentDbApi};
use studentdb::backend::Backend;
use studentdb::error::{Result, StudentDbError};
use studentdb::input::{read_integer, read_text};
use studentdb::model::{Marks, Roll};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MenuChoice {
    Add,
    ViewAll,
    Search,
    Update,
    Delete,
    Undo,
    Redo,
    Save,
    SaveAndExit,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::ViewAll),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Update),
            "5" => Ok(MenuChoice::Delete),
            "6" => Ok(MenuChoice::Undo),
            "7" => Ok(MenuChoice::Redo),
            "8" => Ok(MenuChoice::Save),
            "9" => Ok(MenuChoice::SaveAndExit),
            "10" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

const NOT_SAVED: &str = "Bye! (Not saved)";

/// Run the menu loop until the user exits or input ends.
///
/// End of input anywhere counts as "exit without saving". Apart from terminal
/// write errors, only a failed save escapes.
pub(super) fn run<B, R, W>(api: &mut StudentDbApi<B>, input: &mut R, output: &mut W) -> Result<()>
where
    B: Backend,
    R: BufRead,
    W: Write,
{
    let label = api.backend().kind().label();
    writeln!(
        output,
        "StudentDB ({}) loaded. Records: {}",
        label,
        api.store().len()
    )?;

    loop {
        print_menu(output, label)?;
        match step(api, input, output) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(StudentDbError::InputClosed) => {
                tracing::debug!("input closed, leaving without saving");
                writeln!(output)?;
                print_messages(output, &[CmdMessage::info(NOT_SAVED)])?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

fn step<B, R, W>(api: &mut StudentDbApi<B>, input: &mut R, output: &mut W) -> Result<Flow>
where
    B: Backend,
    R: BufRead,
    W: Write,
{
    let raw = read_text(input, output, "Choose option: ")?;
    let Ok(choice) = raw.parse::<MenuChoice>() else {
        print_messages(output, &[CmdMessage::error("Invalid choice.")])?;
        return Ok(Flow::Continue);
    };
    tracing::debug!(?choice, "dispatching");

    let result = match choice {
        MenuChoice::Add => {
            let roll: Roll = read_integer(input, output, "Enter roll: ")?;
            if api.get(roll).is_some() {
                // Duplicate roll: the add command records the snapshot and reports it.
                api.add(roll, String::new(), 0)?
            } else {
                let name = read_text(input, output, "Enter name: ")?;
                let marks: Marks = read_integer(input, output, "Enter marks (0-100): ")?;
                api.add(roll, name, marks)?
            }
        }
        MenuChoice::ViewAll => {
            let result = api.view_all()?;
            print_records(output, &result.listed_records)?;
            result
        }
        MenuChoice::Search => {
            let roll: Roll = read_integer(input, output, "Enter roll to search: ")?;
            let result = api.search(roll)?;
            print_found(output, &result.listed_records)?;
            result
        }
        MenuChoice::Update => {
            let roll: Roll = read_integer(input, output, "Enter roll to update: ")?;
            let update = match api.get(roll) {
                Some(current) => {
                    print_current(output, current)?;
                    let name = read_text(input, output, "Enter new name (blank = keep): ")?;
                    let marks = read_text(input, output, "Enter new marks (blank = keep): ")?;
                    RecordUpdate::from_answers(&name, &marks)
                }
                None => RecordUpdate::default(),
            };
            api.update(roll, update)?
        }
        MenuChoice::Delete => {
            let roll: Roll = read_integer(input, output, "Enter roll to delete: ")?;
            api.delete(roll)?
        }
        MenuChoice::Undo => api.undo()?,
        MenuChoice::Redo => api.redo()?,
        MenuChoice::Save => api.save()?,
        MenuChoice::SaveAndExit => {
            api.save()?;
            print_messages(output, &[CmdMessage::success("Saved. Bye!")])?;
            return Ok(Flow::Exit);
        }
        MenuChoice::Exit => {
            print_messages(output, &[CmdMessage::info(NOT_SAVED)])?;
            return Ok(Flow::Exit);
        }
    };

    print_messages(output, &result.messages)?;
    Ok(Flow::Continue)
}
