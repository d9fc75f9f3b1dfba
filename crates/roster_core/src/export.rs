//! CSV export of a roster view.
//!
//! # Responsibility
//! - Render records, in the order given, as comma-separated text.
//!
//! # Invariants
//! - Export is a derived view; it never feeds back into the store.
//! - Header is always `id,name,major,gpa`; `gpa` has two decimals.

use crate::model::student::{Student, StudentField};
use crate::snapshot::{write_text_atomically, SnapshotResult};
use log::info;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

/// Writes `students` as CSV to `writer`.
pub fn write_csv<W: Write>(mut writer: W, students: &[Student]) -> io::Result<()> {
    writer.write_all(render_csv(students).as_bytes())?;
    writer.flush()
}

/// Writes `students` as CSV to `path`, replacing it atomically.
pub fn export_csv_file(path: &Path, students: &[Student]) -> SnapshotResult<()> {
    write_text_atomically(path, &render_csv(students))?;
    info!(
        "event=csv_export module=export status=ok records={}",
        students.len()
    );
    Ok(())
}

/// Renders `students` as CSV text with a header row.
pub fn render_csv(students: &[Student]) -> String {
    let mut out = String::new();
    push_row(&mut out, StudentField::ALL.iter().map(|field| Cow::Borrowed(field.as_str())));
    for student in students {
        push_row(
            &mut out,
            StudentField::ALL.iter().map(|field| student.field_text(*field)),
        );
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = Cow<'a, str>>) {
    for (index, cell) in cells.enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(&escape_cell(&cell));
    }
    out.push('\n');
}

fn escape_cell(cell: &str) -> Cow<'_, str> {
    let padded = cell.starts_with(char::is_whitespace) || cell.ends_with(char::is_whitespace);
    if padded || cell.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}
