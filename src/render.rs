// Tabular (CSV) and JSON views of a parsed script.

use std::io::{self, Write};

use crate::script::Script;

pub const HEADER: [&str; 4] = ["Dialogue ID", "Line Number", "Speaker", "Dialogue"];

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub dialogue_id: usize,
    pub line_number: usize,
    pub speaker: String,
    pub dialogue: String,
}

impl Row {
    fn fields(&self) -> [String; 4] {
        [
            self.dialogue_id.to_string(),
            self.line_number.to_string(),
            self.speaker.clone(),
            self.dialogue.clone(),
        ]
    }
}

/// One row per turn, or with `split_lines` one row per embedded line.
///
/// Rows from the same turn share its dialogue id (the turn index) and its first
/// source line number.
pub fn rows(script: &Script, split_lines: bool) -> Vec<Row> {
    let mut rows = Vec::with_capacity(script.turns().len());
    for (dialogue_id, turn) in script.turns().iter().enumerate() {
        let row = |dialogue: &str| Row {
            dialogue_id,
            line_number: turn.first_line_number(),
            speaker: turn.speaker().to_string(),
            dialogue: dialogue.to_string(),
        };
        if split_lines {
            rows.extend(turn.text().split('\n').map(row));
        } else {
            rows.push(row(turn.text()));
        }
    }
    rows
}

/// Write `rows` as CSV with a header line.
pub fn write_csv<W: Write>(mut writer: W, rows: &[Row]) -> io::Result<()> {
    write_record(&mut writer, &HEADER)?;
    for row in rows {
        write_record(&mut writer, &row.fields())?;
    }
    writer.flush()
}

/// Pretty-printed JSON array of the script's turns.
pub fn write_json<W: Write>(mut writer: W, script: &Script) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, script.turns())?;
    writeln!(writer)?;
    writer.flush()
}

fn write_record<W: Write, S: AsRef<str>>(writer: &mut W, fields: &[S]) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write_field(writer, field.as_ref())?;
    }
    writer.write_all(b"\n")
}

fn write_field<W: Write>(writer: &mut W, field: &str) -> io::Result<()> {
    if !field.contains([',', '"', '\n', '\r']) {
        return writer.write_all(field.as_bytes());
    }
    writer.write_all(b"\"")?;
    writer.write_all(field.replace('"', "\"\"").as_bytes())?;
    writer.write_all(b"\"")
}
