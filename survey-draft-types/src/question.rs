use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum number of options a choice question must carry.
pub const MIN_CHOICE_OPTIONS: usize = 2;

/// Number of empty option slots a freshly added choice question starts with.
const DEFAULT_CHOICE_SLOTS: usize = 3;

/// Stable identity of a question inside a draft.
///
/// Every new or duplicated question gets a fresh random id, so ids never
/// collide within one creation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(Uuid);

impl QuestionId {
    /// Mint a new random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The two supported question kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Fixed-option select.
    #[default]
    Choice,

    /// Free-text answer, no predefined options.
    Paragraph,
}

impl QuestionKind {
    /// All kinds in picker order.
    pub const ALL: [QuestionKind; 2] = [Self::Choice, Self::Paragraph];

    /// The kind that follows this one in the picker (wraps around).
    pub fn next(self) -> Self {
        match self {
            Self::Choice => Self::Paragraph,
            Self::Paragraph => Self::Choice,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Choice => "Multiple choice",
            Self::Paragraph => "Paragraph",
        }
    }

    /// Whether questions of this kind carry an option list.
    pub fn has_options(self) -> bool {
        matches!(self, Self::Choice)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single question of the survey being built.
///
/// A paragraph question never holds options; the mutators below keep that
/// invariant no matter in which order they are called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawQuestion")]
pub struct Question {
    id: QuestionId,
    title: String,
    kind: QuestionKind,
    required: bool,
    options: Vec<String>,
}

/// Wire shape of a [`Question`], before the kind invariant is applied.
#[derive(Deserialize)]
struct RawQuestion {
    id: QuestionId,
    title: String,
    kind: QuestionKind,
    required: bool,
    #[serde(default)]
    options: Vec<String>,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let options = if raw.kind.has_options() {
            raw.options
        } else {
            Vec::new()
        };
        Self {
            id: raw.id,
            title: raw.title,
            kind: raw.kind,
            required: raw.required,
            options,
        }
    }
}

impl Question {
    /// A required choice question with three empty option slots.
    pub fn choice() -> Self {
        Self {
            id: QuestionId::new(),
            title: String::new(),
            kind: QuestionKind::Choice,
            required: true,
            options: vec![String::new(); DEFAULT_CHOICE_SLOTS],
        }
    }

    /// An optional paragraph question.
    pub fn paragraph() -> Self {
        Self {
            id: QuestionId::new(),
            title: String::new(),
            kind: QuestionKind::Paragraph,
            required: false,
            options: Vec::new(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set whether an answer is mandatory.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Replace the option list. Ignored for paragraph questions.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.kind.has_options() {
            self.options = options.into_iter().map(Into::into).collect();
        }
        self
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Change the kind.
    ///
    /// Switching to paragraph drops all options. Switching to choice keeps
    /// existing options, or seeds [`MIN_CHOICE_OPTIONS`] empty ones.
    pub fn set_kind(&mut self, kind: QuestionKind) {
        self.kind = kind;
        match kind {
            QuestionKind::Paragraph => self.options.clear(),
            QuestionKind::Choice => {
                if self.options.is_empty() {
                    self.options = vec![String::new(); MIN_CHOICE_OPTIONS];
                }
            }
        }
    }

    /// Overwrite the option at `index`. Returns `false` if there is no such option.
    pub fn set_option(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.options.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Append an empty option. Returns `false` for paragraph questions.
    pub fn add_option(&mut self) -> bool {
        if !self.kind.has_options() {
            return false;
        }
        self.options.push(String::new());
        true
    }

    /// Remove the option at `index`.
    ///
    /// No-op (returning `false`) when the list is already at the
    /// [`MIN_CHOICE_OPTIONS`] floor or the index is out of range.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if self.options.len() <= MIN_CHOICE_OPTIONS || index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        true
    }

    /// A copy of this question under a new identity.
    pub fn duplicate(&self) -> Self {
        Self {
            id: QuestionId::new(),
            ..self.clone()
        }
    }

    /// The question with all text fields trimmed, ready to be stored.
    pub fn trimmed(&self) -> Self {
        let options = if self.kind.has_options() {
            self.options.iter().map(|o| o.trim().to_string()).collect()
        } else {
            Vec::new()
        };
        Self {
            id: self.id,
            title: self.title.trim().to_string(),
            kind: self.kind,
            required: self.required,
            options,
        }
    }
}

impl Default for Question {
    fn default() -> Self {
        Self::choice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialized_paragraph_drops_options() {
        let id = QuestionId::new();
        let json = format!(
            r#"{{"id":"{}","title":"Why?","kind":"paragraph","required":false,"options":["a","b"]}}"#,
            id.0
        );
        let q: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(q.kind(), QuestionKind::Paragraph);
        assert!(q.options().is_empty());
        assert_eq!(q.id(), id);

        let choice = Question::choice().with_title("Pick").with_options(["x", "y"]);
        let back: Question =
            serde_json::from_str(&serde_json::to_string(&choice).unwrap()).unwrap();
        assert_eq!(back, choice);
    }

    #[test]
    fn choice_paragraph_choice_leaves_two_empty_slots() {
        let mut q = Question::choice().with_options(["Yes", "No"]);
        q.set_kind(QuestionKind::Paragraph);
        assert!(q.options().is_empty());

        q.set_kind(QuestionKind::Choice);
        assert_eq!(q.options(), ["", ""]);
    }

    #[test]
    fn switching_to_choice_keeps_existing_options() {
        let mut q = Question::choice().with_options(["a", "b", "c"]);
        q.set_kind(QuestionKind::Choice);
        assert_eq!(q.options().len(), 3);
    }

    #[test]
    fn remove_option_respects_floor() {
        let mut q = Question::choice().with_options(["a", "b"]);
        assert!(!q.remove_option(0));
        assert_eq!(q.options(), ["a", "b"]);

        q.add_option();
        assert!(q.remove_option(0));
        assert_eq!(q.options(), ["b", ""]);
    }

    #[test]
    fn paragraph_rejects_options() {
        let mut q = Question::paragraph().with_options(["ignored"]);
        assert!(q.options().is_empty());
        assert!(!q.add_option());
        assert!(!q.set_option(0, "x"));
    }

    #[test]
    fn duplicate_has_new_identity() {
        let q = Question::choice().with_title("Favourite colour?");
        let copy = q.duplicate();
        assert_ne!(q.id(), copy.id());
        assert_eq!(q.title(), copy.title());
        assert_eq!(q.options(), copy.options());
    }

    #[test]
    fn trimmed_cleans_text() {
        let q = Question::choice()
            .with_title("  Age?  ")
            .with_options([" 18-25 ", "26+ "]);
        let t = q.trimmed();
        assert_eq!(t.title(), "Age?");
        assert_eq!(t.options(), ["18-25", "26+"]);
        assert_eq!(t.id(), q.id());
    }

    #[test]
    fn kind_cycles() {
        assert_eq!(QuestionKind::Choice.next(), QuestionKind::Paragraph);
        assert_eq!(QuestionKind::Paragraph.next(), QuestionKind::Choice);
        assert_eq!(QuestionKind::Choice.to_string(), "Multiple choice");
    }
}
