//! The four screens of the survey-creation wizard.
//!
//! Every step is constructed with a [`DraftStore`](crate::DraftStore)
//! handle, seeds its local state from the current draft, validates that
//! state locally, and on a successful submit merges its slice back.

use std::fmt;

use survey_draft_types::DraftError;

use crate::FlowStage;

mod budget;
mod details;
mod questions;
mod requirements;

pub use budget::{
    BudgetError, BudgetField, BudgetStep, Estimate, PLATFORM_FEE_RATE, Parsed, format_money,
    parse_cap, parse_reward,
};
pub use details::{DetailsError, DetailsField, DetailsStep, SUGGESTED_TAGS};
pub use questions::{QuestionError, QuestionsStep, question_error};
pub use requirements::{RequirementError, RequirementsStep, requirement_error};

/// Total number of wizard steps.
pub const STEP_COUNT: usize = 4;

/// Position in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Details,
    Questions,
    Requirements,
    Budget,
}

impl StepKind {
    pub const ALL: [StepKind; STEP_COUNT] = [
        Self::Details,
        Self::Questions,
        Self::Requirements,
        Self::Budget,
    ];

    /// One-based position.
    pub fn number(self) -> usize {
        match self {
            Self::Details => 1,
            Self::Questions => 2,
            Self::Requirements => 3,
            Self::Budget => 4,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(2).map(|i| Self::ALL[i])
    }

    /// Fraction of the wizard completed once this step is shown.
    pub fn progress(self) -> f32 {
        self.number() as f32 / STEP_COUNT as f32
    }

    /// Caption of the forward button, e.g. `Next (1/4)`.
    pub fn next_label(self) -> String {
        match self {
            Self::Budget => "Publish".to_string(),
            _ => format!("Next ({}/{STEP_COUNT})", self.number()),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Details => "Survey Details",
            Self::Questions => "Questions",
            Self::Requirements => "Requirements",
            Self::Budget => "Budget",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error type for step submissions.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Local validation failed; nothing was merged.
    #[error("{step} has {count} invalid field(s)")]
    Invalid { step: StepKind, count: usize },

    /// The step was submitted while the flow sits on another step.
    #[error("cannot submit {submitted} while the wizard is on {current}")]
    OutOfOrder {
        submitted: StepKind,
        current: FlowStage,
    },

    /// The draft store is no longer available.
    #[error(transparent)]
    Draft(#[from] DraftError),
}

impl SubmitError {
    /// Check if this error is a validation failure (as opposed to a fault).
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

/// Behavior shared by all wizard steps.
pub trait WizardStep {
    /// Which step this is.
    const KIND: StepKind;

    /// Validate and, if valid, merge this step's slice into the draft.
    ///
    /// Marks a submission attempt first, so all errors become visible even
    /// when the submission is rejected.
    fn submit(&mut self) -> Result<(), SubmitError>;

    /// Merge whatever is entered so far, without validation.
    fn save_draft(&self) -> Result<(), DraftError>;

    /// Whether the local state currently passes validation.
    fn is_valid(&self) -> bool;
}
