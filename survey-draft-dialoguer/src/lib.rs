//! # survey-draft-dialoguer
//!
//! Dialoguer front-end for survey-draft.
//!
//! This crate drives the survey creation wizard, the explore listing, the
//! history screens and the wallet hand-off from the command line using the
//! `dialoguer` library. Screens are presented one at a time in a classic
//! CLI wizard style.
//!
//! ## Example
//!
//! ```rust,no_run
//! use survey_draft::Platform;
//! use survey_draft_dialoguer::DialoguerWizard;
//!
//! fn main() -> anyhow::Result<()> {
//!     let wizard = DialoguerWizard::new();
//!     let draft = wizard.create_survey(Platform::Native)?;
//!     println!("Published {:?}", draft.name);
//!     Ok(())
//! }
//! ```

mod backend;
mod creation;
mod opener;
mod screens;

pub use backend::{DialoguerWizard, WizardError};
pub use opener::{OpenerError, SystemOpener};
