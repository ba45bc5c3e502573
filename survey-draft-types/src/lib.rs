//! Core types for the survey-draft crate.
//!
//! This crate provides the foundational types of survey creation and browsing:
//! - `SurveyDraft` - The survey document assembled across the wizard steps
//! - `Question`, `Requirement` and `Schedule` - The slices of a draft
//! - `FieldErrorKind`, `FieldError` and `ErrorGate` - Validation vocabulary
//! - `ListedSurvey`, `ParticipatedSurvey`, `CreatedSurvey` - Listing records

mod question;
pub use question::{MIN_CHOICE_OPTIONS, Question, QuestionId, QuestionKind};

mod requirement;
pub use requirement::{DEFAULT_REQUIREMENT_TYPES, Requirement, RequirementId, value_hint};

mod schedule;
pub use schedule::Schedule;

mod draft;
pub use draft::{SurveyDraft, toggle_tag};

mod error;
pub use error::{DraftError, FieldError, FieldErrorKind};

mod gate;
pub use gate::ErrorGate;

mod listing;
pub use listing::{CreatedStatus, CreatedSurvey, ListedSurvey, ParticipatedSurvey};
