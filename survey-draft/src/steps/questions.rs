use std::fmt;

use survey_draft_types::{
    DraftError, ErrorGate, FieldError, FieldErrorKind, MIN_CHOICE_OPTIONS, Question, QuestionId,
    QuestionKind, SurveyDraft,
};

use super::{StepKind, SubmitError, WizardStep};
use crate::DraftStore;

/// Why a single question fails validation. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionError {
    TitleMissing,
    TooFewOptions,
    EmptyOption,
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TitleMissing => f.write_str("Question title is required."),
            Self::TooFewOptions => f.write_str("Add at least 2 options."),
            Self::EmptyOption => f.write_str("Fill all options (no empty options)."),
        }
    }
}

impl FieldError for QuestionError {
    fn kind(&self) -> FieldErrorKind {
        match self {
            Self::TitleMissing | Self::EmptyOption => FieldErrorKind::RequiredMissing,
            Self::TooFewOptions => FieldErrorKind::CountInvalid,
        }
    }
}

/// Validate one question. Paragraph questions skip the option checks.
pub fn question_error(question: &Question) -> Option<QuestionError> {
    if question.title().trim().is_empty() {
        return Some(QuestionError::TitleMissing);
    }
    if question.kind() == QuestionKind::Paragraph {
        return None;
    }
    if question.options().len() < MIN_CHOICE_OPTIONS {
        return Some(QuestionError::TooFewOptions);
    }
    if question.options().iter().any(|o| o.trim().is_empty()) {
        return Some(QuestionError::EmptyOption);
    }
    None
}

const INCOMPLETE_BANNER: &str =
    "Fill all questions. For multiple choice, the question and all options must be filled.";

/// Step 2: the ordered question list.
#[derive(Debug)]
pub struct QuestionsStep {
    store: DraftStore,
    questions: Vec<Question>,
    gate: ErrorGate<QuestionId>,
}

impl QuestionsStep {
    /// Open the step with the draft's questions, or two starter questions.
    pub fn new(store: DraftStore) -> Result<Self, DraftError> {
        let mut questions = store.read()?.questions;
        if questions.is_empty() {
            questions = vec![Question::choice(), Question::paragraph()];
        }
        Ok(Self {
            store,
            questions,
            gate: ErrorGate::new(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    fn get_mut(&mut self, id: QuestionId) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id() == id)
    }

    /// Append a default choice question.
    pub fn add(&mut self) -> QuestionId {
        let question = Question::choice();
        let id = question.id();
        self.questions.push(question);
        id
    }

    /// Insert a copy of `id` right after it. Returns the copy's id.
    pub fn duplicate(&mut self, id: QuestionId) -> Option<QuestionId> {
        let index = self.questions.iter().position(|q| q.id() == id)?;
        let copy = self.questions[index].duplicate();
        let copy_id = copy.id();
        self.questions.insert(index + 1, copy);
        Some(copy_id)
    }

    pub fn remove(&mut self, id: QuestionId) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id() != id);
        self.questions.len() != before
    }

    pub fn set_kind(&mut self, id: QuestionId, kind: QuestionKind) -> bool {
        self.edit(id, |q| q.set_kind(kind))
    }

    /// Switch to the next kind in picker order.
    pub fn cycle_kind(&mut self, id: QuestionId) -> bool {
        self.edit(id, |q| q.set_kind(q.kind().next()))
    }

    pub fn set_title(&mut self, id: QuestionId, title: impl Into<String>) -> bool {
        let title = title.into();
        self.edit(id, |q| q.set_title(title))
    }

    pub fn set_required(&mut self, id: QuestionId, required: bool) -> bool {
        self.edit(id, |q| q.set_required(required))
    }

    pub fn set_option(&mut self, id: QuestionId, index: usize, value: impl Into<String>) -> bool {
        let value = value.into();
        self.get_mut(id).is_some_and(|q| q.set_option(index, value))
    }

    pub fn add_option(&mut self, id: QuestionId) -> bool {
        self.get_mut(id).is_some_and(Question::add_option)
    }

    /// Remove an option; a no-op once only two remain.
    pub fn remove_option(&mut self, id: QuestionId, index: usize) -> bool {
        self.get_mut(id).is_some_and(|q| q.remove_option(index))
    }

    fn edit(&mut self, id: QuestionId, f: impl FnOnce(&mut Question)) -> bool {
        match self.get_mut(id) {
            Some(q) => {
                f(q);
                true
            }
            None => false,
        }
    }

    /// The error to show on a question card (only after a submit attempt).
    pub fn error(&self, id: QuestionId) -> Option<QuestionError> {
        let error = self.get(id).and_then(question_error);
        self.gate.reveal(&id, error)
    }

    /// Summary shown under the list after a failed submit.
    pub fn banner(&self) -> Option<&'static str> {
        (self.gate.submit_attempted() && !self.is_valid()).then_some(INCOMPLETE_BANNER)
    }

    fn cleaned(&self) -> Vec<Question> {
        self.questions.iter().map(Question::trimmed).collect()
    }
}

impl WizardStep for QuestionsStep {
    const KIND: StepKind = StepKind::Questions;

    fn submit(&mut self) -> Result<(), SubmitError> {
        self.gate.attempt_submit();
        if !self.is_valid() {
            let count = self
                .questions
                .iter()
                .filter(|q| question_error(q).is_some())
                .count()
                .max(1);
            tracing::warn!(count, "questions step rejected");
            return Err(SubmitError::Invalid {
                step: Self::KIND,
                count,
            });
        }

        let questions = self.cleaned();
        self.store.merge(|draft| SurveyDraft { questions, ..draft })?;
        Ok(())
    }

    fn save_draft(&self) -> Result<(), DraftError> {
        let questions = self.questions.clone();
        self.store.merge(|draft| SurveyDraft { questions, ..draft })
    }

    /// Every question validates and there is at least one.
    fn is_valid(&self) -> bool {
        !self.questions.is_empty() && self.questions.iter().all(|q| question_error(q).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DraftSession;

    fn open() -> (DraftSession, QuestionsStep) {
        let session = DraftSession::open();
        let step = QuestionsStep::new(session.store()).unwrap();
        (session, step)
    }

    #[test]
    fn seeds_two_defaults() {
        let (_session, step) = open();
        let kinds: Vec<_> = step.questions().iter().map(Question::kind).collect();
        assert_eq!(kinds, [QuestionKind::Choice, QuestionKind::Paragraph]);
        assert!(step.questions()[0].is_required());
        assert!(!step.questions()[1].is_required());
    }

    #[test]
    fn duplicate_inserts_after_source() {
        let (_session, mut step) = open();
        let first = step.questions()[0].id();
        let second = step.questions()[1].id();
        step.set_title(first, "Q1");

        let copy = step.duplicate(first).unwrap();

        let ids: Vec<_> = step.questions().iter().map(Question::id).collect();
        assert_eq!(ids, [first, copy, second]);
        assert_ne!(copy, first);
        assert_eq!(step.get(copy).unwrap().title(), "Q1");
    }

    #[test]
    fn duplicate_unknown_is_none() {
        let (_session, mut step) = open();
        assert!(step.duplicate(QuestionId::new()).is_none());
        assert_eq!(step.questions().len(), 2);
    }

    #[test]
    fn error_precedence() {
        let q = Question::choice();
        assert_eq!(question_error(&q), Some(QuestionError::TitleMissing));

        let q = Question::choice().with_title("T").with_options(["only"]);
        assert_eq!(question_error(&q), Some(QuestionError::TooFewOptions));

        let q = Question::choice().with_title("T").with_options(["a", "  "]);
        assert_eq!(question_error(&q), Some(QuestionError::EmptyOption));

        let q = Question::paragraph().with_title("Why?");
        assert_eq!(question_error(&q), None);
    }

    #[test]
    fn errors_surface_after_submit_only() {
        let (_session, mut step) = open();
        let first = step.questions()[0].id();
        assert_eq!(step.error(first), None);
        assert!(step.banner().is_none());

        assert!(step.submit().unwrap_err().is_invalid());
        assert_eq!(step.error(first), Some(QuestionError::TitleMissing));
        assert!(step.banner().is_some());
    }

    #[test]
    fn empty_list_is_invalid() {
        let (_session, mut step) = open();
        let ids: Vec<_> = step.questions().iter().map(Question::id).collect();
        for id in ids {
            step.remove(id);
        }
        assert!(!step.is_valid());
        assert!(matches!(
            step.submit(),
            Err(SubmitError::Invalid { count: 1, .. })
        ));
    }

    #[test]
    fn valid_submit_trims_and_merges() {
        let (session, mut step) = open();
        let choice = step.questions()[0].id();
        let paragraph = step.questions()[1].id();
        step.set_title(choice, "  Pick one ");
        step.set_option(choice, 0, " red ");
        step.set_option(choice, 1, "blue");
        step.set_option(choice, 2, "green ");
        step.set_title(paragraph, "Anything else?");

        step.submit().unwrap();

        let stored = session.snapshot().questions;
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].title(), "Pick one");
        assert_eq!(stored[0].options(), ["red", "blue", "green"]);
        assert!(stored[1].options().is_empty());
    }

    #[test]
    fn cycle_kind_round_trip_seeds_options() {
        let (_session, mut step) = open();
        let id = step.questions()[0].id();
        step.cycle_kind(id);
        assert_eq!(step.get(id).unwrap().kind(), QuestionKind::Paragraph);
        step.cycle_kind(id);
        assert_eq!(step.get(id).unwrap().options(), ["", ""]);
    }

    #[test]
    fn remove_option_floor_through_step() {
        let (_session, mut step) = open();
        let id = step.questions()[0].id();
        assert!(step.remove_option(id, 0));
        assert!(!step.remove_option(id, 0));
        assert_eq!(step.get(id).unwrap().options().len(), 2);
    }
}
