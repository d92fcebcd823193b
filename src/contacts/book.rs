//! # Record Store
//!
//! [`ContactBook`] owns the live contact collection and is the only writer of the
//! backing store. It is responsible for:
//!
//! - **Id allocation**: the next id is one more than the highest id seen, `1` for an
//!   empty book. Ids assigned by a book are never handed out again by that book, even
//!   when the contact holding the highest id is deleted.
//! - **Mutation**: add, edit and delete, each followed by a full save.
//! - **Consistency**: a mutation builds the new collection first, saves it, and only
//!   then replaces the in-memory copy. A failed save changes nothing.
//!
//! Read-only views ([`ContactBook::contacts`]) are handed to [`crate::query`], which
//! never mutates.

use crate::error::{ContactsError, Result};
use crate::model::{Contact, ContactFields, ContactPatch};
use crate::store::DataStore;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

pub struct ContactBook<S: DataStore> {
    store: S,
    contacts: Vec<Contact>,
    // Highest id ever assigned or loaded by this book
    last_id: u64,
}

impl<S: DataStore> ContactBook<S> {
    /// Load the collection from `store`.
    pub fn open(store: S) -> Result<Self> {
        let contacts = store.load()?;
        let last_id = max_id(&contacts);
        debug!(count = contacts.len(), last_id, "opened contact book");
        Ok(Self {
            store,
            contacts,
            last_id,
        })
    }

    /// Re-read the backing store, discarding the in-memory collection.
    pub fn reload(&mut self) -> Result<()> {
        let contacts = self.store.load()?;
        self.last_id = self.last_id.max(max_id(&contacts));
        self.contacts = contacts;
        Ok(())
    }

    /// Persist the current collection as is.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.contacts)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get(&self, id: u64) -> Result<&Contact> {
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .ok_or(ContactsError::ContactNotFound(id))
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> Result<u64> {
        let highest = max_id(&self.contacts).max(self.last_id);
        let next = highest
            .checked_add(1)
            .ok_or_else(|| ContactsError::Store("contact id space exhausted".to_string()))?;
        debug_assert!(self.contacts.iter().all(|c| c.id < next));
        Ok(next)
    }

    /// Add a contact dated today (UTC).
    pub fn add(&mut self, fields: ContactFields) -> Result<Contact> {
        self.add_on(fields, Utc::now().date_naive())
    }

    /// Add a contact with an explicit `date_added`.
    pub fn add_on(&mut self, fields: ContactFields, date_added: NaiveDate) -> Result<Contact> {
        let id = self.next_id()?;
        let contact = Contact::new(id, fields, date_added);

        let mut next = self.contacts.clone();
        next.push(contact.clone());
        self.commit(next)?;
        self.last_id = id;

        info!(id, "added contact");
        Ok(contact)
    }

    /// Overwrite the mutable fields named in `patch`. `id` and `date_added` are kept.
    pub fn edit(&mut self, id: u64, patch: &ContactPatch) -> Result<Contact> {
        let pos = self.position(id)?;
        let mut next = self.contacts.clone();
        next[pos].apply(patch);
        let updated = next[pos].clone();
        self.commit(next)?;

        info!(id, "edited contact");
        Ok(updated)
    }

    /// Remove a live contact, returning it. The id is not reused.
    pub fn delete(&mut self, id: u64) -> Result<Contact> {
        let pos = self.position(id)?;
        let mut next = self.contacts.clone();
        let removed = next.remove(pos);
        self.commit(next)?;

        info!(id, "deleted contact");
        Ok(removed)
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(ContactsError::ContactNotFound(id))
    }

    fn commit(&mut self, next: Vec<Contact>) -> Result<()> {
        self.store.save(&next)?;
        self.contacts = next;
        Ok(())
    }
}

fn max_id(contacts: &[Contact]) -> u64 {
    contacts.iter().map(|c| c.id).max().unwrap_or(0)
}
