use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Format of `date_added`, both on disk and in search matching.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The columns of a contact, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    LastName,
    FirstName,
    MiddleName,
    WorkPhone,
    PersonalPhone,
    DateAdded,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::LastName,
        Field::FirstName,
        Field::MiddleName,
        Field::WorkPhone,
        Field::PersonalPhone,
        Field::DateAdded,
    ];

    /// Column name as written in the header row.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::LastName => "last_name",
            Field::FirstName => "first_name",
            Field::MiddleName => "middle_name",
            Field::WorkPhone => "work_phone",
            Field::PersonalPhone => "personal_phone",
            Field::DateAdded => "date_added",
        }
    }

    /// `id` and `date_added` are owned by the store and never edited.
    pub fn is_mutable(&self) -> bool {
        !matches!(self, Field::Id | Field::DateAdded)
    }

    pub fn names() -> Vec<&'static str> {
        Field::ALL.iter().map(Field::name).collect()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts the column name (`last_name`) or its CLI spelling (`last-name`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.name() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown field '{}' (expected one of: {})",
                    s.trim(),
                    Field::names().join(", ")
                )
            })
    }
}

/// Caller-supplied data for a new contact. Validation happens before this is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl ContactFields {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        personal_phone: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            personal_phone: personal_phone.into(),
            ..Default::default()
        }
    }

    pub fn with_middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = middle_name.into();
        self
    }

    pub fn with_work_phone(mut self, work_phone: impl Into<String>) -> Self {
        self.work_phone = work_phone.into();
        self
    }
}

/// Replacement values for the mutable fields of a contact. `None` leaves a field as is.
///
/// There is deliberately no way to express a change to `id` or `date_added`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub work_phone: Option<String>,
    pub personal_phone: Option<String>,
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        self.last_name.is_none()
            && self.first_name.is_none()
            && self.middle_name.is_none()
            && self.work_phone.is_none()
            && self.personal_phone.is_none()
    }

    /// A patch touching a single field, as the interactive "edit one field" flow produces.
    pub fn single(field: Field, value: impl Into<String>) -> Result<Self, String> {
        let value = Some(value.into());
        let mut patch = ContactPatch::default();
        match field {
            Field::LastName => patch.last_name = value,
            Field::FirstName => patch.first_name = value,
            Field::MiddleName => patch.middle_name = value,
            Field::WorkPhone => patch.work_phone = value,
            Field::PersonalPhone => patch.personal_phone = value,
            Field::Id | Field::DateAdded => {
                return Err(format!("Field '{}' cannot be edited", field));
            }
        }
        Ok(patch)
    }
}

impl From<ContactFields> for ContactPatch {
    fn from(fields: ContactFields) -> Self {
        Self {
            last_name: Some(fields.last_name),
            first_name: Some(fields.first_name),
            middle_name: Some(fields.middle_name),
            work_phone: Some(fields.work_phone),
            personal_phone: Some(fields.personal_phone),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub work_phone: String,
    pub personal_phone: String,
    pub date_added: NaiveDate,
}

impl Contact {
    pub fn new(id: u64, fields: ContactFields, date_added: NaiveDate) -> Self {
        Self {
            id,
            last_name: fields.last_name,
            first_name: fields.first_name,
            middle_name: fields.middle_name,
            work_phone: fields.work_phone,
            personal_phone: fields.personal_phone,
            date_added,
        }
    }

    /// The value of `field` as it appears in the backing file.
    pub fn value(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Id => Cow::Owned(self.id.to_string()),
            Field::LastName => Cow::Borrowed(&self.last_name),
            Field::FirstName => Cow::Borrowed(&self.first_name),
            Field::MiddleName => Cow::Borrowed(&self.middle_name),
            Field::WorkPhone => Cow::Borrowed(&self.work_phone),
            Field::PersonalPhone => Cow::Borrowed(&self.personal_phone),
            Field::DateAdded => Cow::Owned(self.date_added.format(DATE_FORMAT).to_string()),
        }
    }

    /// "Last First Middle", skipping an empty middle name.
    pub fn full_name(&self) -> String {
        [&self.last_name, &self.first_name, &self.middle_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn apply(&mut self, patch: &ContactPatch) {
        if let Some(v) = &patch.last_name {
            self.last_name = v.clone();
        }
        if let Some(v) = &patch.first_name {
            self.first_name = v.clone();
        }
        if let Some(v) = &patch.middle_name {
            self.middle_name = v.clone();
        }
        if let Some(v) = &patch.work_phone {
            self.work_phone = v.clone();
        }
        if let Some(v) = &patch.personal_phone {
            self.personal_phone = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Contact {
        Contact::new(
            7,
            ContactFields::new("Doe", "Jane", "555-1111").with_work_phone("555-2222"),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        )
    }

    #[test]
    fn field_parsing_accepts_column_and_cli_names() {
        assert_eq!(Field::from_str("last_name"), Ok(Field::LastName));
        assert_eq!(Field::from_str("last-name"), Ok(Field::LastName));
        assert_eq!(Field::from_str(" id "), Ok(Field::Id));
        assert!(Field::from_str("nickname").is_err());
        assert!(Field::from_str("LAST_NAME").is_err());
        assert!(Field::from_str("").is_err());
    }

    #[test]
    fn field_names_follow_file_order() {
        assert_eq!(
            Field::names(),
            vec![
                "id",
                "last_name",
                "first_name",
                "middle_name",
                "work_phone",
                "personal_phone",
                "date_added"
            ]
        );
    }

    #[test]
    fn value_renders_id_and_date_as_text() {
        let c = jane();
        assert_eq!(c.value(Field::Id), "7");
        assert_eq!(c.value(Field::DateAdded), "2024-03-09");
        assert_eq!(c.value(Field::WorkPhone), "555-2222");
        assert_eq!(c.value(Field::MiddleName), "");
    }

    #[test]
    fn full_name_skips_empty_middle_name() {
        let mut c = jane();
        assert_eq!(c.full_name(), "Doe Jane");
        c.middle_name = "Q".into();
        assert_eq!(c.full_name(), "Doe Jane Q");
    }

    #[test]
    fn apply_only_touches_set_fields() {
        let mut c = jane();
        let patch = ContactPatch {
            first_name: Some("Janet".into()),
            work_phone: Some(String::new()),
            ..Default::default()
        };
        c.apply(&patch);
        assert_eq!(c.first_name, "Janet");
        assert_eq!(c.work_phone, "");
        assert_eq!(c.last_name, "Doe");
        assert_eq!(c.id, 7);
    }

    #[test]
    fn single_field_patch_rejects_store_owned_fields() {
        assert!(ContactPatch::single(Field::Id, "3").is_err());
        assert!(ContactPatch::single(Field::DateAdded, "2020-01-01").is_err());
        let patch = ContactPatch::single(Field::PersonalPhone, "555-9999").unwrap();
        assert_eq!(patch.personal_phone.as_deref(), Some("555-9999"));
        assert!(patch.last_name.is_none());
    }

    #[test]
    fn full_fields_become_a_full_patch() {
        let patch: ContactPatch = ContactFields::new("A", "B", "C").into();
        assert_eq!(patch.middle_name.as_deref(), Some(""));
        assert!(!patch.is_empty());
        assert!(ContactPatch::default().is_empty());
    }
}
