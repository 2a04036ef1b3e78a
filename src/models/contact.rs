use serde::{Deserialize, Serialize};

/// One phone-book entry.
///
/// Text fields are never optional: anything missing on input deserializes
/// to an empty string so the searchable key can always be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactRecord {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub tag: String,
    /// UI selection state. `None` means the state was never set.
    #[serde(default)]
    pub selected: Option<bool>,
}

impl ContactRecord {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            tag: tag.into(),
            selected: None,
        }
    }

    /// Builder-style setter for the selection flag.
    pub fn with_selected(mut self, selected: Option<bool>) -> Self {
        self.selected = selected;
        self
    }

    /// Given Middle Family, skipping empty parts
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [
            self.first_name.as_str(),
            self.middle_name.as_str(),
            self.last_name.as_str(),
        ]
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

        if parts.is_empty() {
            "(unnamed)".to_string()
        } else {
            parts.join(" ")
        }
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected == Some(true)
    }
}
