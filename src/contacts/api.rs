//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for UI clients.
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g. `FIELD=VALUE` strings into [`Criteria`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own beyond what the store does, and returns data structures,
//! not strings.
//!
//! `ContactsApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ContactsApi<FileStore>`
//! - Testing: `ContactsApi<InMemoryStore>`

use crate::book::ContactBook;
use crate::commands;
use crate::error::Result;
use crate::model::{Contact, ContactFields, ContactPatch};
use crate::query::Criteria;
use crate::store::DataStore;
use chrono::NaiveDate;

pub struct ContactsApi<S: DataStore> {
    book: ContactBook<S>,
    paths: commands::ContactsPaths,
}

impl<S: DataStore> ContactsApi<S> {
    /// Opens the store, loading every contact.
    pub fn new(store: S, paths: commands::ContactsPaths) -> Result<Self> {
        Ok(Self {
            book: ContactBook::open(store)?,
            paths,
        })
    }

    pub fn add_contact(&mut self, fields: ContactFields) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, fields, None)
    }

    pub fn add_contact_on(
        &mut self,
        fields: ContactFields,
        date_added: NaiveDate,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, fields, Some(date_added))
    }

    pub fn edit_contact(&mut self, id: u64, patch: &ContactPatch) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.book, id, patch)
    }

    pub fn delete_contacts(&mut self, ids: &[u64]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, ids)
    }

    pub fn view_contacts(&self, ids: &[u64]) -> Result<commands::CmdResult> {
        commands::view::run(&self.book, ids)
    }

    pub fn list_contacts(&self, options: ListOptions) -> Result<commands::CmdResult> {
        commands::list::run(self.book.contacts(), options)
    }

    pub fn search_contacts(&self, criteria: &Criteria) -> Result<commands::CmdResult> {
        commands::search::run(self.book.contacts(), criteria)
    }

    /// Search with `FIELD=VALUE` terms as typed by a user.
    pub fn search_terms<I: AsRef<str>>(&self, terms: &[I]) -> Result<commands::CmdResult> {
        let criteria = Criteria::parse_terms(terms)?;
        self.search_contacts(&criteria)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.book)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        configure(&self.paths, action)
    }

    pub fn contacts(&self) -> &[Contact] {
        self.book.contacts()
    }

    pub fn book(&self) -> &ContactBook<S> {
        &self.book
    }

    pub fn paths(&self) -> &commands::ContactsPaths {
        &self.paths
    }
}

/// Config does not need the contacts file, so it is reachable without opening one.
pub fn configure(paths: &commands::ContactsPaths, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(paths, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ListOptions;
pub use commands::{CmdMessage, CmdResult, ContactsPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ContactsError, ErrorKind};
    use crate::model::Field;
    use crate::store::memory::InMemoryStore;

    fn api() -> ContactsApi<InMemoryStore> {
        ContactsApi::new(InMemoryStore::new(), ContactsPaths::new("/unused")).unwrap()
    }

    fn listed_ids(result: &CmdResult) -> Vec<u64> {
        result.listed_contacts.iter().map(|c| c.id).collect()
    }

    #[test]
    fn add_then_delete_scenario() {
        let mut api = api();

        let first = api
            .add_contact(ContactFields::new("Doe", "Jane", "555-1111"))
            .unwrap();
        assert_eq!(first.affected_contacts[0].id, 1);

        let second = api
            .add_contact(ContactFields::new("Smith", "John", "555-2222"))
            .unwrap();
        assert_eq!(second.affected_contacts[0].id, 2);

        api.delete_contacts(&[1]).unwrap();

        let found = api.search_terms(&["first_name=Jane"]).unwrap();
        assert!(found.listed_contacts.is_empty());

        let page = api
            .list_contacts(ListOptions {
                page_size: 10,
                page_number: 0,
                sort: None,
            })
            .unwrap();
        assert_eq!(listed_ids(&page), vec![2]);
        let info = page.page.unwrap();
        assert!(!info.has_next);
        assert!(!info.has_previous);
    }

    #[test]
    fn search_dispatch_parses_terms() {
        let mut api = api();
        api.add_contact(ContactFields::new("Smith", "John", "1")).unwrap();
        api.add_contact(ContactFields::new("Jones", "Mary", "2")).unwrap();

        let result = api.search_terms(&["last_name=smi"]).unwrap();
        assert_eq!(listed_ids(&result), vec![1]);

        let none: [&str; 0] = [];
        assert_eq!(listed_ids(&api.search_terms(&none).unwrap()), vec![1, 2]);

        let err = api.search_terms(&["email=x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuery);
    }

    #[test]
    fn edit_dispatch_keeps_identity() {
        let mut api = api();
        let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        api.add_contact_on(ContactFields::new("Doe", "Jane", "1"), date)
            .unwrap();

        let patch = ContactPatch::single(Field::LastName, "Roe").unwrap();
        let result = api.edit_contact(1, &patch).unwrap();
        let edited = &result.affected_contacts[0];
        assert_eq!((edited.id, edited.date_added), (1, date));
        assert_eq!(api.contacts()[0].last_name, "Roe");
    }

    #[test]
    fn view_dispatch_reports_missing_ids() {
        let mut api = api();
        api.add_contact(ContactFields::new("Doe", "Jane", "1")).unwrap();
        assert_eq!(listed_ids(&api.view_contacts(&[1]).unwrap()), vec![1]);
        assert!(matches!(
            api.view_contacts(&[4]),
            Err(ContactsError::ContactNotFound(4))
        ));
    }
}
