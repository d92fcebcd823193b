//! # Query Engine
//!
//! Read-only views over a borrowed contact collection. Nothing here owns or mutates
//! contacts; every function is a pure function of its arguments, so any number of
//! queries can run over the same loaded collection.
//!
//! ## Pagination
//!
//! [`paginate`] never fails. A page number outside `[0, total_pages)` is clamped to
//! the first or last page, and an empty collection still has one (empty) page.
//!
//! ## Search
//!
//! [`search`] matches a contact when **every** criterion holds (AND across fields),
//! and a criterion holds when the field's text contains the expected value, ignoring
//! case. Values are compared against the text form used in the contacts file, so
//! `date_added=2024-03` finds everything added in March 2024 and `id=1` finds ids 1,
//! 10, 21 and so on.
//!
//! Two more rules worth knowing:
//! - An empty expected value matches every contact.
//! - Repeating a field adds another condition on it; both must hold.

use crate::error::{ContactsError, Result};
use crate::model::{Contact, Field};
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// Navigation metadata for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Zero-based, after clamping.
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub info: PageInfo,
}

/// Slice `items` into the page `page_number` of `page_size` entries.
///
/// `page_size` of 0 is treated as 1.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: i64) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);

    let requested = usize::try_from(page_number).unwrap_or(0);
    let page = if page_number < 0 {
        0
    } else {
        requested.min(total_pages - 1)
    };
    if i64::try_from(page).ok() != Some(page_number) {
        debug!(requested = page_number, clamped = page, "page request clamped");
    }

    let start = page * page_size;
    let end = (start + page_size).min(total_items);

    Page {
        items: &items[start..end],
        info: PageInfo {
            page_number: page,
            page_size,
            total_pages,
            total_items,
            has_next: page + 1 < total_pages,
            has_previous: page > 0,
        },
    }
}

/// A set of field/substring conditions, all of which must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    // Expected values are stored lowercased
    terms: Vec<(Field, String)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, expected: impl AsRef<str>) -> Self {
        self.terms.push((field, expected.as_ref().to_lowercase()));
        self
    }

    /// Build criteria from `(field name, expected substring)` pairs.
    ///
    /// Fails with [`ContactsError::InvalidQuery`] on the first unknown field name.
    pub fn parse<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs.into_iter().try_fold(Criteria::new(), |criteria, (name, value)| {
            let field = Field::from_str(name.as_ref()).map_err(ContactsError::InvalidQuery)?;
            Ok(criteria.with(field, value))
        })
    }

    /// Build criteria from `FIELD=VALUE` arguments as typed on the command line.
    /// Values go through [`clean_term`].
    pub fn parse_terms<I: AsRef<str>>(args: &[I]) -> Result<Self> {
        let pairs = args
            .iter()
            .map(|arg| {
                let arg = arg.as_ref();
                arg.split_once('=')
                    .map(|(name, value)| (name.to_string(), clean_term(value)))
                    .ok_or_else(|| {
                        ContactsError::InvalidQuery(format!(
                            "expected FIELD=VALUE, got '{}'",
                            arg
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Criteria::parse(pairs)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[(Field, String)] {
        &self.terms
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        self.terms.iter().all(|(field, expected)| {
            contact
                .value(*field)
                .to_lowercase()
                .contains(expected.as_str())
        })
    }
}

/// Contacts matching every criterion, in collection order.
pub fn search<'a>(contacts: &'a [Contact], criteria: &Criteria) -> Vec<&'a Contact> {
    let found: Vec<&Contact> = contacts.iter().filter(|c| criteria.matches(c)).collect();
    debug!(
        criteria = criteria.terms.len(),
        scanned = contacts.len(),
        found = found.len(),
        "search"
    );
    found
}

/// Contacts ordered by `field`. Ties keep collection order.
///
/// `id` sorts numerically, `date_added` chronologically, text fields ignoring case.
pub fn sort_by(contacts: &[Contact], field: Field) -> Vec<&Contact> {
    let mut sorted: Vec<&Contact> = contacts.iter().collect();
    match field {
        Field::Id => sorted.sort_by_key(|c| c.id),
        Field::DateAdded => sorted.sort_by_key(|c| c.date_added),
        _ => sorted.sort_by_cached_key(|c| c.value(field).to_lowercase()),
    }
    sorted
}

/// Normalize a typed search value: drop double quotes, trim, and collapse runs of
/// whitespace to a single space.
pub fn clean_term(raw: &str) -> String {
    raw.replace('"', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
