use crate::book::ContactBook;
use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Delete every contact in `ids`. All ids are checked before anything is removed, so an
/// unknown id leaves the book untouched.
pub fn run<S: DataStore>(book: &mut ContactBook<S>, ids: &[u64]) -> Result<CmdResult> {
    let mut unique: Vec<u64> = Vec::with_capacity(ids.len());
    for id in ids {
        book.get(*id)?;
        if !unique.contains(id) {
            unique.push(*id);
        }
    }

    let mut result = CmdResult::default();
    for id in unique {
        let removed = book.delete(id)?;
        result.add_message(CmdMessage::success(format!(
            "Contact deleted {}",
            describe(&removed)
        )));
        result.affected_contacts.push(removed);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactsError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn book(n: usize) -> ContactBook<InMemoryStore> {
        ContactBook::open(StoreFixture::new().with_contacts(n).store).unwrap()
    }

    #[test]
    fn removes_contacts() {
        let mut book = book(3);
        let result = run(&mut book, &[1, 3]).unwrap();
        assert_eq!(result.affected_contacts.len(), 2);
        assert_eq!(book.contacts().len(), 1);
        assert_eq!(book.contacts()[0].id, 2);
    }

    #[test]
    fn unknown_id_aborts_before_removing_anything() {
        let mut book = book(3);
        let err = run(&mut book, &[1, 7]).unwrap_err();
        assert!(matches!(err, ContactsError::ContactNotFound(7)));
        assert_eq!(book.contacts().len(), 3);
    }

    #[test]
    fn deleting_twice_is_reported() {
        let mut book = book(2);
        run(&mut book, &[2]).unwrap();
        assert!(matches!(
            run(&mut book, &[2]),
            Err(ContactsError::ContactNotFound(2))
        ));
    }

    #[test]
    fn repeated_id_is_deleted_once() {
        let mut book = book(2);
        let result = run(&mut book, &[1, 1]).unwrap();
        assert_eq!(result.affected_contacts.len(), 1);
        assert_eq!(book.contacts().len(), 1);
    }
}
