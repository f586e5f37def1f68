//! Birthday records as exchanged with the birthday API.

use serde::{Deserialize, Deserializer, Serialize};

use crate::anniversary::AnniversaryDate;
use crate::category::Category;
use crate::error::{BdaysError, BdaysResult};

/// A stored birthday record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Birthday {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub birth_date: AnniversaryDate,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request body for creating or updating a birthday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdayInput {
    pub name: String,
    pub birth_date: AnniversaryDate,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BirthdayInput {
    pub fn new(name: impl Into<String>, birth_date: AnniversaryDate, category: Category) -> Self {
        BirthdayInput {
            name: name.into(),
            birth_date,
            category,
            notes: None,
        }
    }

    /// Attach notes; blank notes are dropped so they are not sent.
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn validate(&self) -> BdaysResult<()> {
        if self.name.trim().is_empty() {
            return Err(BdaysError::InvalidRecord("name must not be empty".into()));
        }
        Ok(())
    }
}

impl From<&Birthday> for BirthdayInput {
    fn from(b: &Birthday) -> Self {
        BirthdayInput {
            name: b.name.clone(),
            birth_date: b.birth_date,
            category: b.category,
            notes: b.notes.clone(),
        }
    }
}

/// Accept both `"id": 12` and `"id": "12"`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}
