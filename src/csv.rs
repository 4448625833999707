// src/csv.rs
use std::io::{self, Write};

use crate::specs::contacts::{Contact, HEADERS};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Contacts as delimited text, optionally led by the header line.
pub fn write_contacts<W: Write>(
    mut w: W,
    contacts: &[Contact],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &HEADERS, sep)?;
    }
    for c in contacts {
        write_row(&mut w, &c.fields(), sep)?;
    }
    Ok(())
}

pub fn contacts_to_string(contacts: &[Contact], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_contacts(&mut buf, contacts, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let rows = [
            Contact::new("Alice", "Lecturer, Part-time", "alice@example.edu", "1234"),
            Contact::new("Bob \"B\"", "Professor", "bob@example.edu", "2000"),
        ];
        let out = contacts_to_string(&rows, true, ',');
        assert_eq!(
            out,
            "Name,Title,Email,Extension\n\
             Alice,\"Lecturer, Part-time\",alice@example.edu,1234\n\
             \"Bob \"\"B\"\"\",Professor,bob@example.edu,2000\n"
        );
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let rows = [Contact::new("Alice", "Lecturer, Part-time", "alice@example.edu", "1234")];
        let out = contacts_to_string(&rows, false, '\t');
        assert_eq!(out, "Alice\tLecturer, Part-time\talice@example.edu\t1234\n");
    }
}
