use anyhow::Result;
use crossterm::{
    style::{Attribute, SetAttribute},
    ExecutableCommand,
};
use std::io;

use crate::cli::ui::{check_mark, term_size, truncate};
use crate::models::ContactRecord;

/// Column layout based on terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnLayout {
    name_width: usize,
    phone_width: usize,
    show_tag: bool,
}

impl ColumnLayout {
    pub(crate) fn for_width(width: usize) -> Self {
        if width >= 60 {
            // Full display: Name | Phone | Tag
            ColumnLayout {
                name_width: 30,
                phone_width: 18,
                show_tag: true,
            }
        } else {
            // Compact display: Name | Phone
            ColumnLayout {
                name_width: 20,
                phone_width: width.saturating_sub(28).max(8),
                show_tag: false,
            }
        }
    }

    fn current() -> Self {
        Self::for_width(term_size().0)
    }
}

pub(crate) fn format_table_header(layout: ColumnLayout) -> String {
    if layout.show_tag {
        format!(
            "    {:<name_w$}  {:<phone_w$}  TAG",
            "NAME",
            "PHONE",
            name_w = layout.name_width,
            phone_w = layout.phone_width
        )
    } else {
        format!("    {:<name_w$}  PHONE", "NAME", name_w = layout.name_width)
    }
}

pub(crate) fn format_contact_row(record: &ContactRecord, layout: ColumnLayout) -> String {
    let name = truncate(&record.display_name(), layout.name_width);
    let phone = truncate(&record.phone_number, layout.phone_width);
    let mark = check_mark(record.is_selected());

    if layout.show_tag {
        format!(
            "{} {:<name_w$}  {:<phone_w$}  {}",
            mark,
            name,
            phone,
            truncate(&record.tag, 12),
            name_w = layout.name_width,
            phone_w = layout.phone_width
        )
    } else {
        format!(
            "{} {:<name_w$}  {}",
            mark,
            name,
            phone,
            name_w = layout.name_width
        )
    }
}

pub fn print_table_header() {
    println!("{}", format_table_header(ColumnLayout::current()));
}

/// Print one row, reversed when it is under the cursor
pub fn print_contact_row(record: &ContactRecord, highlighted: bool) {
    let line = format_contact_row(record, ColumnLayout::current());

    if highlighted {
        let mut stdout = io::stdout();
        let _ = stdout.execute(SetAttribute(Attribute::Reverse));
        print!("{}", line);
        let _ = stdout.execute(SetAttribute(Attribute::Reset));
        println!();
    } else {
        println!("{}", line);
    }
}

pub fn print_contact_table(records: &[ContactRecord]) {
    print_table_header();
    for record in records {
        print_contact_row(record, false);
    }
}

/// Execute the list command
pub fn run_list(records: &[ContactRecord]) -> Result<()> {
    if records.is_empty() {
        println!("No contacts.");
        return Ok(());
    }

    print_contact_table(records);
    println!("\n{} contacts", records.len());
    Ok(())
}
