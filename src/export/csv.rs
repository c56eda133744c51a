//! Quote-aware CSV reading and writing for the founder database.

use std::io::{self, Write};
use std::mem::take;

use crate::error::{Result, TrackerError};

const SEP: char = ',';

/// Parse CSV text into rows of fields.
///
/// Handles quoted fields with embedded separators, newlines and doubled
/// quotes; LF and CRLF line endings are both accepted. Blank lines are
/// skipped. An unterminated quote is an error.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut quote_opened_at = 0;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            },
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_opened_at = line;
            },
            c if c == SEP && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                line += 1;
                row.push(take(&mut field));
                if row.len() == 1 && row[0].is_empty() {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            },
            c => {
                if c == '\n' {
                    line += 1;
                }
                field.push(c);
            },
        }
    }

    if in_quotes {
        return Err(TrackerError::CsvError {
            line: quote_opened_at,
            message: "unterminated quoted field".to_string(),
        });
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row, quoting only the fields that need it.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", SEP)?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    write!(w, "\r\n")
}
