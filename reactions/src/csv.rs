//! Comma separated output, quoted the way spreadsheet software expects.

use std::fmt::{Display, Write};

/// Builds a CSV document line by line. Every line, including the header, is terminated by `\n`.
pub struct TableBuilder {
    buf: String,
}

impl TableBuilder {
    pub fn new() -> TableBuilder {
        TableBuilder { buf: String::new() }
    }

    pub fn with_header<I>(header: I) -> TableBuilder
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut builder = TableBuilder::new();
        builder.add_line(header);
        builder
    }

    pub fn add_line<I>(&mut self, row: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (i, cell) in row.into_iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }

            write_cell(&mut self.buf, &cell.to_string());
        }

        self.buf.push('\n');
    }

    pub fn build(self) -> String {
        self.buf
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn needs_quoting(cell: &str) -> bool {
    cell.contains([',', '"', '\n'])
}

fn write_cell(buf: &mut String, cell: &str) {
    if needs_quoting(cell) {
        // Writing to a String never fails
        let _ = write!(buf, "\"{}\"", cell.replace('"', "\"\""));
    } else {
        buf.push_str(cell);
    }
}
