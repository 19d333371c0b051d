//! Format a report as human-readable text.

use crate::report::pager::Page;
use crate::report::Report;
use crate::types::EntryKind;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline when colour is enabled.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

fn page_table(page: &Page, with_header: bool, color: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    if with_header {
        table.set_header(vec!["TYPE", "FILE PATH", "DESCRIPTION"]);
    }
    for row in &page.rows {
        let tag = match row.kind {
            EntryKind::File => Cell::new(row.kind_label()).fg(Color::Blue),
            EntryKind::Directory => Cell::new(row.kind_label()).fg(Color::DarkYellow),
        };
        table.add_row(vec![
            tag,
            Cell::new(&row.display_path),
            Cell::new(&row.annotation),
        ]);
    }
    table
}

/// Format a full report; the column header appears on the first page only.
pub fn format_report_text(report: &Report, color: bool) -> String {
    let header = &report.header;
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format_section_heading(&format!("Report: {}", header.title), color)
    ));
    out.push_str(&format!(
        "Total entries: {} ({} files, {} directories)\n",
        header.total_entries, header.files, header.directories
    ));
    out.push_str(&format!(
        "Generated: {}\n\n",
        header.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if report.pages.is_empty() {
        out.push_str("No entries.\n");
        return out;
    }

    let total = report.pages.len();
    for page in &report.pages {
        out.push_str(&format!("Page {} of {}\n", page.number, total));
        out.push_str(&format!(
            "{}\n\n",
            page_table(page, page.number == 1, color)
        ));
    }
    out
}
