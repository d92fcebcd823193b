use crate::book::ContactBook;
use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactFields;
use crate::store::DataStore;
use chrono::NaiveDate;

/// Add a contact. `date_added` defaults to today.
pub fn run<S: DataStore>(
    book: &mut ContactBook<S>,
    fields: ContactFields,
    date_added: Option<NaiveDate>,
) -> Result<CmdResult> {
    let contact = match date_added {
        Some(date) => book.add_on(fields, date)?,
        None => book.add(fields)?,
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added {}",
        describe(&contact)
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}
