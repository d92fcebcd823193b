//! # Storage Layer
//!
//! This module defines the storage abstraction for contacts. The [`DataStore`] trait
//! lets the record store work against different backends.
//!
//! A store only knows how to read and write a whole collection. Id allocation, lookups
//! and mutation rules live one level up in [`crate::book`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production CSV storage
//!   - One file, header row plus one row per contact
//!   - Every save rewrites the file through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail saves, to exercise error paths
//!
//! ## Storage Format
//!
//! ```text
//! id,last_name,first_name,middle_name,work_phone,personal_phone,date_added
//! 1,Doe,Jane,,,555-1111,2024-03-09
//! 2,Smith,John,Q,555-0100,555-2222,2024-03-10
//! ```
//!
//! See [`table`] for the exact encoding rules.

use crate::error::Result;
use crate::model::Contact;
use std::path::Path;

pub mod fs;
pub mod memory;
pub mod table;

/// Abstract interface for contact storage.
///
/// Implementations must not hold resources between calls: each `load`/`save` acquires
/// and releases whatever it needs.
pub trait DataStore {
    /// Read the full collection. A store that has never been written is empty.
    fn load(&self) -> Result<Vec<Contact>>;

    /// Replace the stored collection with `contacts`, all or nothing.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;

    /// Backing file, for stores that have one.
    fn path(&self) -> Option<&Path>;
}
