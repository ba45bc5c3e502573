//! # survey-draft
//!
//! State, validation and navigation for creating and browsing surveys.
//! Presentation-agnostic: front-ends drive these types and render them.
//!
//! ## Creating a survey
//!
//! A [`CreationFlow`] owns one [`DraftSession`]. Each of the four wizard
//! steps is opened through the flow, edits its own local state, and merges
//! its slice of the [`SurveyDraft`] back when submitted.
//!
//! ```rust
//! use survey_draft::{CreationFlow, FlowStage, Platform, StepKind};
//!
//! let mut flow = CreationFlow::start(Platform::Web);
//!
//! let mut details = flow.details_step().unwrap();
//! details.set_name("Commute habits");
//! details.set_description("How do you get to work?");
//! flow.submit(&mut details).unwrap();
//!
//! assert_eq!(flow.stage(), FlowStage::Step(StepKind::Questions));
//! assert_eq!(flow.draft().name, "Commute habits");
//! ```
//!
//! ## Other screens
//!
//! - [`ExploreQuery`] - search, sort and category filter over listed surveys
//! - [`ParticipationSummary`], [`CreatedSections`], [`CreatedCard`] - history screens
//! - [`route`] - deep-link routing
//! - [`AuthCallbackScreen`] - the wallet's return trip
//! - [`WalletLauncher`] - the wallet hand-off, behind the [`UrlOpener`] capability
//!
//! ## Configuration
//!
//! [`AppConfig::from_env`] reads `SURVEY_PLATFORM`, `SURVEY_CALLBACK_URL`,
//! `SURVEY_PROCESSING_DELAY_MS` and `SURVEY_REDIRECT_DELAY_MS`.

// Re-export all types from survey-draft-types
pub use survey_draft_types::*;

mod store;
pub use store::{DraftSession, DraftStore};

mod config;
pub use config::{
    AppConfig, CallbackDelays, ConfigError, DEFAULT_CALLBACK_URL, DEFAULT_PROCESSING_DELAY_MS,
    DEFAULT_REDIRECT_DELAY_MS, Platform,
};

pub mod steps;
pub use steps::{
    BudgetStep, DetailsStep, QuestionsStep, RequirementsStep, StepKind, SubmitError, WizardStep,
};

mod flow;
pub use flow::{CreationFlow, FlowStage};

mod explore;
pub use explore::{
    ALL_CATEGORIES, CATEGORIES, CategorySelection, ExploreQuery, SortKey, results_label,
};

mod history;
pub use history::{
    COMPLETED_HEADER, CardAction, CreatedCard, CreatedSections, Metric, ParticipationSummary,
    StatusPill, payout_label,
};

mod deeplink;
pub use deeplink::{Route, route};

mod auth_callback;
pub use auth_callback::{
    AuthCallbackScreen, CallbackParams, CallbackPhase, Credential, ReceivedCredential,
};

mod wallet;
pub use wallet::{
    CredentialRequester, LaunchFailure, REQUESTED_CREDENTIAL, UrlOpener, WalletLauncher,
    reads_as_not_installed, wallet_request_url,
};

// Test opener for exercising the wallet hand-off without a platform
mod test_opener;
pub use test_opener::{TestOpener, TestOpenerError};
