use super::DataStore;
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use std::path::Path;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            ..Default::default()
        }
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Make every following `save` fail, as a full disk would.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        if self.fail_saves {
            return Err(ContactsError::Store("simulated save failure".to_string()));
        }
        self.contacts = contacts.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn path(&self) -> Option<&Path> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ContactFields;
    use chrono::NaiveDate;

    pub fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(u64::from(n))
    }

    pub fn contact(id: u64, last: &str, first: &str, phone: &str) -> Contact {
        Contact::new(id, ContactFields::new(last, first, phone), day(id as u32))
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: u64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        pub fn with_contact(mut self, last: &str, first: &str, phone: &str) -> Self {
            let c = contact(self.next_id, last, first, phone);
            self.next_id += 1;
            self.store.contacts.push(c);
            self
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let last = format!("Last{}", i + 1);
                let first = format!("First{}", i + 1);
                let phone = format!("555-{:04}", i + 1);
                self = self.with_contact(&last, &first, &phone);
            }
            self
        }
    }
}
