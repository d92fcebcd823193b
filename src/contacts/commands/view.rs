use crate::book::ContactBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &ContactBook<S>, ids: &[u64]) -> Result<CmdResult> {
    let contacts = ids
        .iter()
        .map(|id| book.get(*id).cloned())
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_contacts(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactsError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_contacts_in_requested_order() {
        let book = ContactBook::open(StoreFixture::new().with_contacts(3).store).unwrap();
        let result = run(&book, &[3, 1]).unwrap();
        let ids: Vec<_> = result.listed_contacts.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let book = ContactBook::open(StoreFixture::new().with_contacts(1).store).unwrap();
        assert!(matches!(
            run(&book, &[1, 2]),
            Err(ContactsError::ContactNotFound(2))
        ));
    }
}
