use crate::book::ContactBook;
use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactPatch;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    book: &mut ContactBook<S>,
    id: u64,
    patch: &ContactPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        // Still report unknown ids
        let contact = book.get(id)?.clone();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "Nothing to update {}",
            describe(&contact)
        )));
        return Ok(result);
    }

    let contact = book.edit(id, patch)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated {}",
        describe(&contact)
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ContactsError;
    use crate::model::Field;
    use crate::store::memory::fixtures::StoreFixture;

    fn book() -> ContactBook<crate::store::memory::InMemoryStore> {
        let fixture = StoreFixture::new()
            .with_contact("Doe", "Jane", "555-1111")
            .with_contact("Smith", "John", "555-2222");
        ContactBook::open(fixture.store).unwrap()
    }

    #[test]
    fn updates_a_single_field() {
        let mut book = book();
        let patch = ContactPatch::single(Field::WorkPhone, "555-0100").unwrap();
        let result = run(&mut book, 2, &patch).unwrap();

        assert_eq!(result.affected_contacts[0].work_phone, "555-0100");
        assert_eq!(book.get(2).unwrap().work_phone, "555-0100");
        assert_eq!(book.get(2).unwrap().first_name, "John");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn empty_patch_saves_nothing() {
        let mut book = book();
        let result = run(&mut book, 1, &ContactPatch::default()).unwrap();
        assert!(result.affected_contacts.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(book.store().saves(), 0);
    }

    #[test]
    fn unknown_id_is_not_found_even_with_empty_patch() {
        let mut book = book();
        assert!(matches!(
            run(&mut book, 9, &ContactPatch::default()),
            Err(ContactsError::ContactNotFound(9))
        ));
        let patch = ContactPatch::single(Field::LastName, "X").unwrap();
        assert!(matches!(
            run(&mut book, 9, &patch),
            Err(ContactsError::ContactNotFound(9))
        ));
    }
}
