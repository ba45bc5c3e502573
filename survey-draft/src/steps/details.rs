use std::fmt;

use chrono::{DateTime, Utc};
use survey_draft_types::{
    DraftError, ErrorGate, FieldError, FieldErrorKind, Schedule, SurveyDraft, toggle_tag,
};

use super::{StepKind, SubmitError, WizardStep};
use crate::{DraftStore, Platform};

/// Tag chips offered below the category input.
pub const SUGGESTED_TAGS: [&str; 6] = [
    "Politics",
    "Finance",
    "Health",
    "Education",
    "Community",
    "Technology",
];

/// Validated fields of the details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailsField {
    Name,
    Description,
    /// The start/end date pair.
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsError {
    NameRequired,
    DescriptionRequired,
    ScheduleRequired,
}

impl DetailsError {
    /// The field this error belongs to.
    pub fn field(self) -> DetailsField {
        match self {
            Self::NameRequired => DetailsField::Name,
            Self::DescriptionRequired => DetailsField::Description,
            Self::ScheduleRequired => DetailsField::Duration,
        }
    }
}

impl fmt::Display for DetailsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired | Self::DescriptionRequired => f.write_str("Required"),
            Self::ScheduleRequired => f.write_str("Select start and end dates"),
        }
    }
}

impl FieldError for DetailsError {
    fn kind(&self) -> FieldErrorKind {
        FieldErrorKind::RequiredMissing
    }
}

/// Step 1: name, description, voting window, category and tags.
#[derive(Debug)]
pub struct DetailsStep {
    store: DraftStore,
    platform: Platform,
    name: String,
    description: String,
    schedule: Schedule,
    category: String,
    tags: Vec<String>,
    gate: ErrorGate<DetailsField>,
}

impl DetailsStep {
    /// Open the step, seeded from the current draft.
    pub fn new(store: DraftStore, platform: Platform) -> Result<Self, DraftError> {
        let draft = store.read()?;
        Ok(Self {
            store,
            platform,
            name: draft.name,
            description: draft.description,
            schedule: draft.schedule,
            category: draft.category,
            tags: draft.tags,
            gate: ErrorGate::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Toggle a tag chip. Returns `true` if the tag is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        toggle_tag(&mut self.tags, tag)
    }

    /// Choose the start date; the end is pulled forward if it would precede it.
    pub fn pick_start(&mut self, start: DateTime<Utc>) {
        self.gate.touch(DetailsField::Duration);
        self.schedule.pick_start(start);
    }

    /// Choose the end date; an end before the start snaps to the start.
    pub fn pick_end(&mut self, end: DateTime<Utc>) {
        self.gate.touch(DetailsField::Duration);
        self.schedule.pick_end(end);
    }

    /// Mark a field as interacted with (e.g. the input lost focus).
    pub fn touch(&mut self, field: DetailsField) {
        self.gate.touch(field);
    }

    /// All current validation failures, whether visible or not.
    pub fn validation(&self) -> Vec<DetailsError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(DetailsError::NameRequired);
        }
        if self.description.trim().is_empty() {
            errors.push(DetailsError::DescriptionRequired);
        }
        if self.platform.requires_schedule() && !self.schedule.is_complete() {
            errors.push(DetailsError::ScheduleRequired);
        }
        errors
    }

    /// The error to show on `field`, if any.
    pub fn error(&self, field: DetailsField) -> Option<DetailsError> {
        let error = self.validation().into_iter().find(|e| e.field() == field);
        self.gate.reveal(&field, error)
    }

    /// Errors the user should currently see.
    pub fn visible_errors(&self) -> Vec<DetailsError> {
        self.validation()
            .into_iter()
            .filter(|e| self.gate.shows(&e.field()))
            .collect()
    }

    fn write_into(&self, draft: SurveyDraft, trim: bool) -> SurveyDraft {
        let text = |s: &str| if trim { s.trim().to_string() } else { s.to_string() };
        SurveyDraft {
            name: text(&self.name),
            description: text(&self.description),
            schedule: self.schedule,
            category: text(&self.category),
            tags: self.tags.clone(),
            ..draft
        }
    }
}

impl WizardStep for DetailsStep {
    const KIND: StepKind = StepKind::Details;

    fn submit(&mut self) -> Result<(), SubmitError> {
        self.gate.attempt_submit();
        self.gate
            .touch_all([DetailsField::Name, DetailsField::Description]);
        if self.platform.requires_schedule() {
            self.gate.touch(DetailsField::Duration);
        }

        let errors = self.validation();
        if !errors.is_empty() {
            tracing::warn!(?errors, "details step rejected");
            return Err(SubmitError::Invalid {
                step: Self::KIND,
                count: errors.len(),
            });
        }

        self.store.merge(|draft| self.write_into(draft, true))?;
        Ok(())
    }

    fn save_draft(&self) -> Result<(), DraftError> {
        self.store.merge(|draft| self.write_into(draft, false))
    }

    fn is_valid(&self) -> bool {
        self.validation().is_empty()
    }
}
