use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Write the contacts file if it does not exist yet, so the first `add` is not also the
/// first time the location is checked.
pub fn run<S: DataStore>(book: &mut ContactBook<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let location = book
        .store()
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "memory".to_string());

    let exists = book.store().path().map(|p| p.exists()).unwrap_or(false);
    if exists {
        result.add_message(CmdMessage::info(format!(
            "Contacts file already exists at {} ({} contacts)",
            location,
            book.contacts().len()
        )));
        return Ok(result);
    }

    book.save()?;
    result.add_message(CmdMessage::success(format!(
        "Initialized contacts file at {}",
        location
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_header_only_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("contacts.csv");
        let mut book = ContactBook::open(FileStore::new(&path)).unwrap();

        let result = run(&mut book).unwrap();
        assert!(result.messages[0].content.starts_with("Initialized"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "id,last_name,first_name,middle_name,work_phone,personal_phone,date_added\n"
        );
    }

    #[test]
    fn leaves_existing_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.csv");
        let mut book = ContactBook::open(FileStore::new(&path)).unwrap();
        book.add(crate::model::ContactFields::new("Doe", "Jane", "1"))
            .unwrap();
        let before = fs::read(&path).unwrap();

        let result = run(&mut book).unwrap();
        assert!(result.messages[0].content.contains("already exists"));
        assert_eq!(fs::read(&path).unwrap(), before);
    }
}
