//! Delimited output file writing.

use std::fs::File;
use std::io::{self, BufWriter, Write};

const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single delimited row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{SEP}")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Write a header row plus one row per record to `path`, replacing any
/// existing file.
pub fn write_records(path: &str, fields: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
    write_row(&mut w, &header)?;
    for row in rows {
        write_row(&mut w, row)?;
    }
    w.flush()
}
