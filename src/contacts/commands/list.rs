use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Contact, Field};
use crate::query::{paginate, sort_by};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page_size: usize,
    /// Zero-based; out-of-range values are clamped.
    pub page_number: i64,
    /// Collection order when `None`.
    pub sort: Option<Field>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page_size: crate::config::DEFAULT_PAGE_SIZE,
            page_number: 0,
            sort: None,
        }
    }
}

pub fn run(contacts: &[Contact], options: ListOptions) -> Result<CmdResult> {
    let (listed, info) = match options.sort {
        None => {
            let page = paginate(contacts, options.page_size, options.page_number);
            (page.items.to_vec(), page.info)
        }
        Some(field) => {
            let sorted = sort_by(contacts, field);
            let page = paginate(&sorted, options.page_size, options.page_number);
            (page.items.iter().map(|c| (*c).clone()).collect(), page.info)
        }
    };

    Ok(CmdResult::default()
        .with_listed_contacts(listed)
        .with_page(info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::contact;

    fn contacts(n: u64) -> Vec<Contact> {
        (1..=n).map(|i| contact(i, &format!("L{:02}", 100 - i), "F", "P")).collect()
    }

    fn ids(result: &CmdResult) -> Vec<u64> {
        result.listed_contacts.iter().map(|c| c.id).collect()
    }

    #[test]
    fn lists_requested_page() {
        let all = contacts(12);
        let options = ListOptions {
            page_size: 5,
            page_number: 1,
            sort: None,
        };
        let result = run(&all, options).unwrap();
        assert_eq!(ids(&result), vec![6, 7, 8, 9, 10]);
        let page = result.page.unwrap();
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next && page.has_previous);
    }

    #[test]
    fn bad_page_numbers_clamp() {
        let all = contacts(12);
        let mut options = ListOptions {
            page_size: 5,
            page_number: -3,
            sort: None,
        };
        assert_eq!(run(&all, options).unwrap().page.unwrap().page_number, 0);
        options.page_number = 40;
        let result = run(&all, options).unwrap();
        assert_eq!(result.page.unwrap().page_number, 2);
        assert_eq!(ids(&result), vec![11, 12]);
    }

    #[test]
    fn sorting_applies_before_paging() {
        let all = contacts(12);
        let options = ListOptions {
            page_size: 5,
            page_number: 0,
            sort: Some(Field::LastName),
        };
        // Last names count down as ids go up
        assert_eq!(ids(&run(&all, options).unwrap()), vec![12, 11, 10, 9, 8]);
    }

    #[test]
    fn empty_book_lists_one_empty_page() {
        let result = run(&[], ListOptions::default()).unwrap();
        assert!(result.listed_contacts.is_empty());
        let page = result.page.unwrap();
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next && !page.has_previous);
    }
}
