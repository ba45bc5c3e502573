use std::fmt;

use survey_draft_types::{
    DEFAULT_REQUIREMENT_TYPES, DraftError, ErrorGate, FieldError, FieldErrorKind, Requirement,
    RequirementId, SurveyDraft,
};

use super::{StepKind, SubmitError, WizardStep};
use crate::DraftStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementError {
    ValueMissing,
}

impl fmt::Display for RequirementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueMissing => f.write_str("Value is required for this requirement."),
        }
    }
}

impl FieldError for RequirementError {
    fn kind(&self) -> FieldErrorKind {
        FieldErrorKind::RequiredMissing
    }
}

/// Validate one row. Rows with a blank type are unused slots and always pass.
pub fn requirement_error(requirement: &Requirement) -> Option<RequirementError> {
    if requirement.is_unused() {
        return None;
    }
    requirement
        .value
        .trim()
        .is_empty()
        .then_some(RequirementError::ValueMissing)
}

/// Step 3: voter eligibility conditions.
#[derive(Debug)]
pub struct RequirementsStep {
    store: DraftStore,
    rows: Vec<Requirement>,
    gate: ErrorGate<RequirementId>,
}

impl RequirementsStep {
    /// Open the step with the draft's rows, or the three default rows.
    pub fn new(store: DraftStore) -> Result<Self, DraftError> {
        let mut rows = store.read()?.requirements;
        if rows.is_empty() {
            rows = DEFAULT_REQUIREMENT_TYPES
                .iter()
                .map(|kind| Requirement::new(*kind, ""))
                .collect();
        }
        Ok(Self {
            store,
            rows,
            gate: ErrorGate::new(),
        })
    }

    pub fn rows(&self) -> &[Requirement] {
        &self.rows
    }

    /// Append an empty row.
    pub fn add(&mut self) -> RequirementId {
        let row = Requirement::empty();
        let id = row.id;
        self.rows.push(row);
        id
    }

    pub fn remove(&mut self, id: RequirementId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        self.rows.len() != before
    }

    pub fn set_type(&mut self, id: RequirementId, kind: impl Into<String>) -> bool {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.kind = kind.into();
                true
            }
            None => false,
        }
    }

    pub fn set_value(&mut self, id: RequirementId, value: impl Into<String>) -> bool {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.value = value.into();
                true
            }
            None => false,
        }
    }

    /// The error to show under a row (only after a submit attempt).
    pub fn error(&self, id: RequirementId) -> Option<RequirementError> {
        let error = self
            .rows
            .iter()
            .find(|r| r.id == id)
            .and_then(requirement_error);
        self.gate.reveal(&id, error)
    }

    /// Rows ready to be stored: blank-type rows dropped, the rest trimmed.
    fn cleaned(&self) -> Vec<Requirement> {
        self.rows
            .iter()
            .map(Requirement::trimmed)
            .filter(|r| !r.kind.is_empty())
            .collect()
    }
}

impl WizardStep for RequirementsStep {
    const KIND: StepKind = StepKind::Requirements;

    fn submit(&mut self) -> Result<(), SubmitError> {
        self.gate.attempt_submit();
        let count = self
            .rows
            .iter()
            .filter(|r| requirement_error(r).is_some())
            .count();
        if count > 0 {
            tracing::warn!(count, "requirements step rejected");
            return Err(SubmitError::Invalid {
                step: Self::KIND,
                count,
            });
        }

        let requirements = self.cleaned();
        self.store
            .merge(|draft| SurveyDraft { requirements, ..draft })?;
        Ok(())
    }

    fn save_draft(&self) -> Result<(), DraftError> {
        let requirements = self.rows.clone();
        self.store
            .merge(|draft| SurveyDraft { requirements, ..draft })
    }

    fn is_valid(&self) -> bool {
        self.rows.iter().all(|r| requirement_error(r).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DraftSession;

    #[test]
    fn seeds_default_rows() {
        let session = DraftSession::open();
        let step = RequirementsStep::new(session.store()).unwrap();
        let kinds: Vec<_> = step.rows().iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, ["Age", "Location", "Education level"]);
    }

    #[test]
    fn blank_type_is_always_valid() {
        for value in ["", "   ", "18+"] {
            let row = Requirement::new(" ", value);
            assert_eq!(requirement_error(&row), None);
        }
        assert_eq!(
            requirement_error(&Requirement::new("Age", " ")),
            Some(RequirementError::ValueMissing)
        );
    }

    #[test]
    fn default_rows_need_values() {
        let session = DraftSession::open();
        let mut step = RequirementsStep::new(session.store()).unwrap();
        let err = step.submit().unwrap_err();
        assert!(matches!(err, SubmitError::Invalid { count: 3, .. }));

        let age = step.rows()[0].id;
        assert_eq!(step.error(age), Some(RequirementError::ValueMissing));
    }

    #[test]
    fn submit_drops_unused_rows_and_trims() {
        let session = DraftSession::open();
        let mut step = RequirementsStep::new(session.store()).unwrap();
        let ids: Vec<_> = step.rows().iter().map(|r| r.id).collect();
        step.set_value(ids[0], " 18–35 ");
        step.set_type(ids[1], "");
        step.remove(ids[2]);
        let extra = step.add();
        step.set_value(extra, "ignored");

        step.submit().unwrap();

        let stored = session.snapshot().requirements;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].kind, "Age");
        assert_eq!(stored[0].value, "18–35");
    }

    #[test]
    fn errors_hidden_before_submit() {
        let session = DraftSession::open();
        let step = RequirementsStep::new(session.store()).unwrap();
        assert_eq!(step.error(step.rows()[0].id), None);
    }
}
