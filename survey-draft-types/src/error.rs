use std::fmt;

/// Classification shared by the field and row errors of every wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// A mandatory value is empty.
    RequiredMissing,

    /// A value is empty although a related field makes it mandatory.
    CrossFieldMissing,

    /// A value is present but cannot be parsed or is out of range.
    FormatInvalid,

    /// A list holds too few entries.
    CountInvalid,
}

/// A validation error produced by a wizard step.
///
/// The `Display` impl yields the message shown next to the offending field.
pub trait FieldError: fmt::Display {
    fn kind(&self) -> FieldErrorKind;
}

/// Error type for draft store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The store handle outlived its creation session.
    #[error("Draft store used outside of an open creation session")]
    SessionClosed,
}

impl DraftError {
    /// Check if this error means the session scope has already ended.
    pub fn is_session_closed(&self) -> bool {
        matches!(self, Self::SessionClosed)
    }
}
