use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Contact;
use crate::query::{search, Criteria};

pub fn run(contacts: &[Contact], criteria: &Criteria) -> Result<CmdResult> {
    let found = search(contacts, criteria).into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_contacts(found))
}
