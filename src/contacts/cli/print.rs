use colored::Colorize;
use contacts::api::{CmdMessage, MessageLevel};
use contacts::config::ContactsConfig;
use contacts::error::{ContactsError, Result};
use contacts::model::{Contact, Field};
use contacts::query::PageInfo;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_COLUMN_WIDTH: usize = 24;
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }

    let (header, rows) = table_lines(contacts);
    println!("{}", header.bold());
    for row in rows {
        println!("{}", row);
    }
}

pub(super) fn print_page_footer(info: &PageInfo) {
    println!();
    println!("{}", page_footer(info).dimmed());
}

pub(super) fn print_full_contacts(contacts: &[Contact]) {
    for (i, contact) in contacts.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        println!(
            "{} {}",
            format!("#{}", contact.id).yellow(),
            contact.full_name().bold()
        );
        for field in Field::ALL.iter().skip(1) {
            println!("  {:<16}{}", label(*field), contact.value(*field));
        }
    }
}

pub(super) fn print_config(config: &ContactsConfig) {
    for key in ContactsConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

#[derive(Serialize)]
struct JsonListing<'a> {
    contacts: &'a [Contact],
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<&'a PageInfo>,
}

pub(super) fn print_json(contacts: &[Contact], page: Option<&PageInfo>) -> Result<()> {
    let listing = JsonListing { contacts, page };
    let out = serde_json::to_string_pretty(&listing).map_err(ContactsError::Serialization)?;
    println!("{}", out);
    Ok(())
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Id => "ID",
        Field::LastName => "Last name",
        Field::FirstName => "First name",
        Field::MiddleName => "Middle name",
        Field::WorkPhone => "Work phone",
        Field::PersonalPhone => "Personal phone",
        Field::DateAdded => "Added",
    }
}

/// Header and rows of the contact table, padded to a common width per column.
fn table_lines(contacts: &[Contact]) -> (String, Vec<String>) {
    let cells: Vec<Vec<String>> = contacts
        .iter()
        .map(|c| {
            Field::ALL
                .iter()
                .map(|f| truncate_to_width(&c.value(*f), MAX_COLUMN_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = Field::ALL
        .iter()
        .enumerate()
        .map(|(i, f)| {
            cells
                .iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(label(*f).width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_cells: Vec<String> = Field::ALL.iter().map(|f| label(*f).to_string()).collect();
    let header = join_row(&header_cells, &widths);
    let rows = cells.iter().map(|row| join_row(row, &widths)).collect();
    (header, rows)
}

fn join_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn page_footer(info: &PageInfo) -> String {
    let mut footer = format!(
        "Page {} of {} ({} contacts)",
        info.page_number + 1,
        info.total_pages,
        info.total_items
    );
    if info.has_previous {
        footer.push_str(&format!("  prev: --page {}", info.page_number));
    }
    if info.has_next {
        footer.push_str(&format!("  next: --page {}", info.page_number + 2));
    }
    footer
}
