//! CSV encoding of the contact collection.
//!
//! - The first record is the header, exactly the column names of [`Field::ALL`] in order.
//! - Every following record is one contact, `id` as a decimal integer and `date_added`
//!   as `YYYY-MM-DD`. Empty optional fields are empty strings.
//! - Records end with `\n` and fields are quoted only when they need to be.
//!
//! Anything else on read is reported as [`ContactsError::Malformed`] with the offending
//! line number.

use crate::error::{ContactsError, Result};
use crate::model::{Contact, DATE_FORMAT, Field};
use chrono::NaiveDate;
use csv::StringRecord;
use std::collections::HashSet;
use std::io::{Read, Write};

pub fn read_contacts<R: Read>(reader: R) -> Result<Vec<Contact>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = rdr.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(ContactsError::malformed(1, "missing header row")),
    };
    check_header(&header)?;

    let mut contacts = Vec::new();
    let mut seen = HashSet::new();
    for record in records {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let contact = parse_record(&record, line)?;
        if !seen.insert(contact.id) {
            return Err(ContactsError::malformed(
                line,
                format!("duplicate id {}", contact.id),
            ));
        }
        contacts.push(contact);
    }

    Ok(contacts)
}

pub fn write_contacts<W: Write>(writer: W, contacts: &[Contact]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(Field::names())?;
    for contact in contacts {
        wtr.write_record(Field::ALL.iter().map(|f| contact.value(*f).into_owned()))?;
    }
    wtr.flush()?;
    Ok(())
}

fn check_header(header: &StringRecord) -> Result<()> {
    let matches = header.len() == Field::ALL.len()
        && header.iter().zip(Field::ALL.iter()).all(|(h, f)| h == f.name());
    if matches {
        return Ok(());
    }
    Err(ContactsError::malformed(
        1,
        format!(
            "expected header '{}', found '{}'",
            Field::names().join(","),
            header.iter().collect::<Vec<_>>().join(",")
        ),
    ))
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Contact> {
    if record.len() != Field::ALL.len() {
        return Err(ContactsError::malformed(
            line,
            format!(
                "expected {} fields, found {}",
                Field::ALL.len(),
                record.len()
            ),
        ));
    }

    let id = record[0].parse::<u64>().map_err(|_| {
        ContactsError::malformed(line, format!("non-integer id: {:?}", &record[0]))
    })?;
    let date_added = NaiveDate::parse_from_str(&record[6], DATE_FORMAT).map_err(|_| {
        ContactsError::malformed(line, format!("unparsable date_added: {:?}", &record[6]))
    })?;

    Ok(Contact {
        id,
        last_name: record[1].to_string(),
        first_name: record[2].to_string(),
        middle_name: record[3].to_string(),
        work_phone: record[4].to_string(),
        personal_phone: record[5].to_string(),
        date_added,
    })
}
