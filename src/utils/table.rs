//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: "-".to_string(),
        }
    }

    /// Character drawn between the header and the rows (configurable via
    /// `separator_char`). An empty string suppresses the separator line.
    pub fn with_separator(mut self, sep: &str) -> Self {
        self.separator = sep.to_string();
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
        }
        out.push('\n');

        if let Some(ch) = self.separator.chars().next() {
            let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
            out.push_str(&ch.to_string().repeat(total));
            out.push('\n');
        }

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad(&row[i], col.width));
            }
            out.push('\n');
        }

        out
    }
}

/// Pad by display width so venue and subject names with wide characters keep
/// the columns aligned.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let fill = width.saturating_sub(w) + 1;
    format!("{}{}", s, " ".repeat(fill))
}
