//! Records shown by the browsing and history screens.
//!
//! These are display data only. They never touch the draft store.

use serde::{Deserialize, Serialize};

/// A published survey as listed on the explore screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedSurvey {
    pub id: String,
    pub name: String,
    /// Reward paid per voter.
    pub reward: f64,
    pub description: String,
    pub tags: Vec<String>,
    /// Estimated time to complete, in minutes.
    pub minutes: u32,
    pub participants: u32,
    pub participants_limit: u32,
    /// Whether the current user meets the survey's requirements.
    pub qualifies: bool,
}

/// A survey the user has voted in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipatedSurvey {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    /// Paid reward; absent or zero when the paid cap was already reached.
    pub reward: Option<f64>,
}

/// Lifecycle of a survey the user created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatedStatus {
    /// Published and collecting votes.
    Active,
    /// Saved but not published.
    Draft,
    /// Closed; results are available.
    Results,
}

/// A survey the user created, as summarised on the "My Surveys" screen.
///
/// Numeric fields are optional; absent or non-finite values display as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSurvey {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: CreatedStatus,
    #[serde(default)]
    pub reward_per_voter: Option<f64>,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub responses_current: Option<f64>,
    #[serde(default)]
    pub responses_target: Option<f64>,
    #[serde(default)]
    pub spent: Option<f64>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub total_spent: Option<f64>,
}

impl CreatedSurvey {
    /// A created survey with only the identifying fields set.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        status: CreatedStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            status,
            reward_per_voter: None,
            ends_at: None,
            responses_current: None,
            responses_target: None,
            spent: None,
            budget: None,
            total_spent: None,
        }
    }
}
