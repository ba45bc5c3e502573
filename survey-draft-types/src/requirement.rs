use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Requirement types offered as starting rows on the requirements step.
pub const DEFAULT_REQUIREMENT_TYPES: [&str; 3] = ["Age", "Location", "Education level"];

/// Stable identity of a requirement row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementId(Uuid);

impl RequirementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequirementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequirementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An eligibility condition voters must meet, e.g. `Age = 18–35`.
///
/// A row whose type is blank is an unused slot and is dropped on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: RequirementId,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl Requirement {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: RequirementId::new(),
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// A row with neither type nor value.
    pub fn empty() -> Self {
        Self::new("", "")
    }

    /// Whether the row is an unused slot (blank type).
    pub fn is_unused(&self) -> bool {
        self.kind.trim().is_empty()
    }

    /// The row with type and value trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id,
            kind: self.kind.trim().to_string(),
            value: self.value.trim().to_string(),
        }
    }

    /// Example value shown in an empty value field, picked from the type.
    pub fn value_hint(&self) -> &'static str {
        value_hint(&self.kind)
    }
}

/// Example value for a requirement type (case-insensitive substring match).
pub fn value_hint(kind: &str) -> &'static str {
    let kind = kind.to_lowercase();
    if kind.contains("age") {
        "18–35"
    } else if kind.contains("location") {
        "United States"
    } else if kind.contains("education") {
        "College+"
    } else {
        "Enter value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_type() {
        assert_eq!(value_hint("Age"), "18–35");
        assert_eq!(value_hint("current LOCATION"), "United States");
        assert_eq!(value_hint("Education level"), "College+");
        assert_eq!(value_hint("Pets"), "Enter value");
    }

    #[test]
    fn blank_type_is_unused() {
        assert!(Requirement::new("   ", "anything").is_unused());
        assert!(!Requirement::new("Age", "").is_unused());
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(Requirement::new("Age", "18+")).unwrap();
        assert_eq!(json["type"], "Age");
        assert_eq!(json["value"], "18+");
    }
}
