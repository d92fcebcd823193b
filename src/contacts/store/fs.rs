use super::table::{read_contacts, write_contacts};
use super::DataStore;
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// CSV-backed store for a single contacts file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ContactsError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("contacts");
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

fn write_synced(path: &Path, contacts: &[Contact]) -> Result<()> {
    let file = File::create(path).map_err(ContactsError::Io)?;
    let mut writer = BufWriter::new(file);
    write_contacts(&mut writer, contacts)?;
    let file = writer
        .into_inner()
        .map_err(|e| ContactsError::Io(e.into_error()))?;
    file.sync_all().map_err(ContactsError::Io)?;
    Ok(())
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "contacts file missing, starting empty");
            return Ok(Vec::new());
        }
        let file = File::open(&self.path).map_err(ContactsError::Io)?;
        let contacts = read_contacts(file)?;
        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        // Atomic write: a crash leaves either the old file or the new one
        let tmp = self.tmp_path(&dir);
        if let Err(e) = write_synced(&tmp, contacts) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(ContactsError::Io(e));
        }

        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::ContactFields;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn contact(id: u64, last: &str) -> Contact {
        Contact::new(
            id,
            ContactFields::new(last, "Test", "555-0000"),
            NaiveDate::from_ymd_opt(2024, 1, id as u32).unwrap(),
        )
    }

    fn leftover_tmp_files(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("contacts.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("contacts.csv"));
        let contacts = vec![contact(1, "Doe"), contact(4, "Smith")];

        store.save(&contacts).unwrap();
        assert_eq!(store.load().unwrap(), contacts);
    }

    #[test]
    fn save_of_load_reproduces_file_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.csv");
        let mut store = FileStore::new(&path);
        store
            .save(&[contact(1, "Doe"), contact(2, "Smith, Jr")])
            .unwrap();
        let before = fs::read(&path).unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();

        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn save_creates_parent_dirs_and_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::new(nested.join("contacts.csv"));

        store.save(&[contact(1, "Doe")]).unwrap();

        assert!(nested.join("contacts.csv").exists());
        assert!(leftover_tmp_files(&nested).is_empty());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("contacts.csv"));
        store.save(&[contact(1, "Doe"), contact(2, "Smith")]).unwrap();
        store.save(&[contact(2, "Smith")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 2);
    }

    #[test]
    fn malformed_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.csv");
        fs::write(&path, "name,phone\nJane,555\n").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[test]
    fn failed_save_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.csv");
        let mut store = FileStore::new(&path);
        store.save(&[contact(1, "Doe")]).unwrap();
        let before = fs::read(&path).unwrap();

        // A directory where the file should be makes the rename fail
        let blocked = dir.path().join("blocked");
        fs::create_dir_all(blocked.join("contacts.csv")).unwrap();
        let mut blocked_store = FileStore::new(blocked.join("contacts.csv"));
        assert!(blocked_store.save(&[contact(2, "Smith")]).is_err());
        assert!(leftover_tmp_files(&blocked).is_empty());

        assert_eq!(fs::read(&path).unwrap(), before);
    }
}
