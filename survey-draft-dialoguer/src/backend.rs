//! Dialoguer prompt primitives shared by the wizard screens.

use chrono::{DateTime, NaiveDate, Utc};
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use survey_draft::{DraftError, SubmitError};
use thiserror::Error;

/// Error type for the Dialoguer front-end.
#[derive(Debug, Error)]
pub enum WizardError {
    /// User cancelled (e.g., pressed Ctrl+C or Escape).
    #[error("Wizard cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The draft session ended underneath a step.
    #[error(transparent)]
    Draft(#[from] DraftError),

    /// A step submission failed for a reason other than validation.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn lift<T>(result: dialoguer::Result<T>) -> Result<T, WizardError> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if is_cancelled(&e) => Err(WizardError::Cancelled),
        Err(e) => Err(WizardError::Dialoguer(e)),
    }
}

/// Interactive CLI front-end for creating and browsing surveys.
///
/// Screens are presented one at a time with `dialoguer` prompts.
#[derive(Debug, Default, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerWizard {
    /// Create a new wizard with the default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with plain (no color) prompts.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Free text. `initial` pre-fills the input.
    pub fn text(&self, prompt: &str, initial: &str) -> Result<String, WizardError> {
        let theme = ColorfulTheme::default();
        let mut builder: Input<String> = if self.colorful {
            Input::with_theme(&theme)
        } else {
            Input::new()
        };
        builder = builder.with_prompt(prompt).allow_empty(true);
        if !initial.is_empty() {
            builder = builder.with_initial_text(initial);
        }
        lift(builder.interact_text())
    }

    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool, WizardError> {
        let theme = ColorfulTheme::default();
        let builder = if self.colorful {
            Confirm::with_theme(&theme)
        } else {
            Confirm::new()
        };
        lift(builder.with_prompt(prompt).default(default).interact())
    }

    /// Pick one of `items`; returns its index.
    pub fn select<T: ToString>(
        &self,
        prompt: &str,
        items: &[T],
        default: usize,
    ) -> Result<usize, WizardError> {
        let theme = ColorfulTheme::default();
        let builder = if self.colorful {
            Select::with_theme(&theme)
        } else {
            Select::new()
        };
        lift(
            builder
                .with_prompt(prompt)
                .items(items)
                .default(default.min(items.len().saturating_sub(1)))
                .interact(),
        )
    }

    /// Toggle any of `items`; `checked` marks the pre-selected ones.
    pub fn multi_select(
        &self,
        prompt: &str,
        items: &[&str],
        checked: &[bool],
    ) -> Result<Vec<usize>, WizardError> {
        let theme = ColorfulTheme::default();
        let builder = if self.colorful {
            MultiSelect::with_theme(&theme)
        } else {
            MultiSelect::new()
        };
        lift(
            builder
                .with_prompt(prompt)
                .items(items)
                .defaults(checked)
                .interact(),
        )
    }

    /// A calendar date as `YYYY-MM-DD`, taken as midnight UTC.
    pub fn date(&self, prompt: &str) -> Result<DateTime<Utc>, WizardError> {
        loop {
            let raw = self.text(&format!("{prompt} (YYYY-MM-DD)"), "")?;
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(date) => return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc()),
                Err(e) => println!("Error: {e}"),
            }
        }
    }
}
