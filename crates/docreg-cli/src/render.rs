//! Plain-text rendering of a [`PageView`].

use docreg_core::api::{PageView, RowView};
use std::fmt::Write;

pub fn banner(page: &PageView<'_>) -> String {
    let width = page.title.chars().count().max(page.subtitle.chars().count()) + 4;
    let rule = "=".repeat(width);
    format!(
        "{rule}\n{:^width$}\n{:^width$}\n{rule}\n",
        page.title, page.subtitle
    )
}

fn cells(row: &RowView<'_>) -> [String; 5] {
    let country = match &row.flag {
        Some(flag) => format!("{flag} {}", row.country),
        None => row.country.to_string(),
    };
    let link = if row.link.is_empty() { "-" } else { row.link };
    [
        country,
        row.document_type.to_string(),
        row.price.clone(),
        row.source.to_string(),
        link.to_string(),
    ]
}

/// The result table, or the no-results message when there is one.
pub fn table(page: &PageView<'_>) -> String {
    if let Some(message) = page.message {
        return format!("{message}\n");
    }

    let rows: Vec<[String; 5]> = page.rows.iter().map(cells).collect();
    let mut widths = page.columns.map(|c| c.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = page.columns.map(str::to_string);
    push_line(&mut out, &header, &widths);
    let rule = widths.map(|w| "-".repeat(w));
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (i, (cell, w)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(" | ");
        }
        let _ = write!(line, "{cell:<w$}", w = *w);
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
