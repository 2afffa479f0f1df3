//! Terminal output: status marks, session fields and backend rows as JSON.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Report a completed action.
pub fn success(msg: &str) {
    println!("{} {msg}", "✓".green());
}

/// Report a failure on stderr.
pub fn error(msg: &str) {
    eprintln!("{} {msg}", "✗".red());
}

/// Show one `label: value` line of session details.
pub fn field(label: &str, value: &str) {
    println!("{}: {value}", label.dimmed());
}

/// Write `value` to stdout as one JSON document.
fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print each backend row as its own JSON document, followed by a count.
///
/// An empty list prints `empty` on stderr, so stdout stays parseable.
pub fn records<T: Serialize>(rows: &[T], pretty: bool, empty: &str) -> Result<()> {
    if rows.is_empty() {
        eprintln!("{}", empty.dimmed());
        return Ok(());
    }

    rows.iter().try_for_each(|row| emit(row, pretty))?;
    eprintln!("{}", format!("{} found", rows.len()).dimmed());
    Ok(())
}

/// Print the row the backend echoed back, or `fallback` when the body was empty.
pub fn maybe<T: Serialize>(row: Option<&T>, pretty: bool, fallback: &str) -> Result<()> {
    match row {
        Some(row) => emit(row, pretty),
        None => {
            success(fallback);
            Ok(())
        }
    }
}
