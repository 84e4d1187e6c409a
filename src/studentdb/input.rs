//! # Validated Input
//!
//! Boundary functions that turn raw lines into checked values. Callers receive
//! only valid data; an invalid integer is answered with a hint and a re-prompt,
//! never with an error.
//!
//! All functions are generic over `BufRead`/`Write` so the session loop can be
//! driven from a script in tests.

use crate::error::{Result, StudentDbError};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const INVALID_NUMBER_HINT: &str = "Please enter a valid number.";

/// Parse an unsigned decimal number. Only ASCII digits are accepted, so signs,
/// whitespace inside the number and empty input are all rejected.
pub fn parse_integer<T: FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Print `prompt` and return the trimmed line.
///
/// Returns `InputClosed` at end of input. Bytes that are not UTF-8 are replaced
/// with U+FFFD, so such a line reads as text that no number parses from.
pub fn read_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Err(StudentDbError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&line).trim().to_string())
}

/// Prompt until the answer is a valid number.
pub fn read_integer<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = read_text(input, output, prompt)?;
        if let Some(value) = parse_integer(&line) {
            return Ok(value);
        }
        tracing::debug!(input = %line, "rejected non-numeric input");
        writeln!(output, "{}", INVALID_NUMBER_HINT)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<u64>("42"), Some(42));
        assert_eq!(parse_integer::<u64>("  7 \n"), Some(7));
        assert_eq!(parse_integer::<u64>("007"), Some(7));
        assert_eq!(parse_integer::<u64>(""), None);
        assert_eq!(parse_integer::<u64>("-1"), None);
        assert_eq!(parse_integer::<u64>("+1"), None);
        assert_eq!(parse_integer::<u64>("4 2"), None);
        assert_eq!(parse_integer::<u64>("abc"), None);
        assert_eq!(parse_integer::<u32>("99999999999"), None);
    }

    #[test]
    fn test_read_integer_retries() {
        let mut input = Cursor::new("abc\n\n12x\n 12 \n");
        let mut output = Vec::new();

        let value: u64 = read_integer(&mut input, &mut output, "Enter roll: ").unwrap();
        assert_eq!(value, 12);

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Enter roll: ").count(), 4);
        assert_eq!(printed.matches(INVALID_NUMBER_HINT).count(), 3);
    }

    #[test]
    fn test_read_integer_input_closed() {
        let mut input = Cursor::new("nope\n");
        let mut output = Vec::new();
        let result: Result<u64> = read_integer(&mut input, &mut output, "Enter roll: ");
        assert!(matches!(result, Err(StudentDbError::InputClosed)));
    }

    #[test]
    fn test_read_integer_skips_non_utf8_line() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n', b'5', b'\n']);
        let mut output = Vec::new();

        let value: u64 = read_integer(&mut input, &mut output, "Enter roll: ").unwrap();
        assert_eq!(value, 5);

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches(INVALID_NUMBER_HINT).count(), 1);
    }

    #[test]
    fn test_read_text_replaces_non_utf8() {
        let mut input = Cursor::new(vec![b'A', 0xff, b'm', b'\n']);
        let mut output = Vec::new();
        let name = read_text(&mut input, &mut output, "Enter name: ").unwrap();
        assert_eq!(name, "A\u{fffd}m");
    }

    #[test]
    fn test_read_text_trims() {
        let mut input = Cursor::new("   Amit Kumar  \n");
        let mut output = Vec::new();
        let name = read_text(&mut input, &mut output, "Enter name: ").unwrap();
        assert_eq!(name, "Amit Kumar");
    }
}
