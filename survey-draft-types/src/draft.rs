use serde::{Deserialize, Serialize};

use crate::{Question, Requirement, Schedule};

/// The survey under construction.
///
/// One instance lives per creation session. Each wizard step owns one slice
/// of it (details, questions, requirements, budget) and only ever replaces
/// that slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDraft {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub schedule: Schedule,
    pub tags: Vec<String>,
    pub category: String,
    pub questions: Vec<Question>,
    pub requirements: Vec<Requirement>,
    pub reward_per_voter: Option<f64>,
    pub voter_cap: Option<u64>,
    pub anonymous: bool,
}

impl SurveyDraft {
    /// An empty draft, as created when a creation session starts.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            schedule: Schedule::new(),
            tags: Vec::new(),
            category: String::new(),
            questions: Vec::new(),
            requirements: Vec::new(),
            reward_per_voter: None,
            voter_cap: None,
            anonymous: true,
        }
    }

    /// Whether the draft still equals the empty default.
    pub fn is_empty(&self) -> bool {
        self == &Self::empty()
    }
}

impl Default for SurveyDraft {
    fn default() -> Self {
        Self::empty()
    }
}

/// Toggle membership of `tag` in an insertion-ordered tag set.
///
/// Returns `true` if the tag is selected afterwards.
pub fn toggle_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    if let Some(pos) = tags.iter().position(|t| t == tag) {
        tags.remove(pos);
        false
    } else {
        tags.push(tag.to_string());
        true
    }
}
