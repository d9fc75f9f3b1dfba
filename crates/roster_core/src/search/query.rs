//! Search query model and raw input parsing.

use crate::model::student::StudentField;

/// What a search strategy looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Case-insensitive substring of `name`, or exact `id`.
    Text(String),
    /// Case-insensitive substring of one field's display text.
    Field { field: StudentField, value: String },
}

impl SearchQuery {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn field(field: StudentField, value: impl Into<String>) -> Self {
        Self::Field {
            field,
            value: value.into(),
        }
    }

    /// Parses search box input.
    ///
    /// `field:value` (for a known field name, case-insensitive) yields a
    /// field-qualified query; anything else is a bare text query. Both parts
    /// are trimmed.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some((name, value)) = raw.split_once(':') {
            if let Ok(field) = name.parse::<StudentField>() {
                return Self::field(field, value.trim());
            }
        }
        Self::text(raw)
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for SearchQuery {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
