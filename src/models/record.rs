//! League record model.

use serde::{Deserialize, Serialize};

use super::next_id;

/// A league record entry, e.g. "Most goals in a season".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier (creation timestamp in milliseconds)
    pub id: i64,

    /// What the record is for
    pub title: String,

    /// Who holds it
    #[serde(default)]
    pub holder: String,

    /// The figure or circumstances of the record
    #[serde(default)]
    pub detail: String,
}

impl Record {
    pub fn new(title: String) -> Self {
        Self {
            id: next_id(),
            title,
            holder: String::new(),
            detail: String::new(),
        }
    }

    /// Builder method to set the record holder.
    pub fn with_holder(mut self, holder: String) -> Self {
        self.holder = holder;
        self
    }

    /// Builder method to set the record detail.
    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = detail;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = Record::new("Most goals in a season".to_string())
            .with_holder("Ana".to_string())
            .with_detail("34 goals, 2025 season".to_string());

        assert_eq!(record.title, "Most goals in a season");
        assert_eq!(record.holder, "Ana");
        assert!(record.id > 0);
    }
}
