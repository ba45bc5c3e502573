use std::collections::HashSet;
use std::hash::Hash;

/// Decides when a validation error becomes visible.
///
/// Errors are always computed, but only surfaced for fields the user has
/// interacted with, or for every field once a submission was attempted.
#[derive(Debug, Clone)]
pub struct ErrorGate<F> {
    touched: HashSet<F>,
    submit_attempted: bool,
}

impl<F: Eq + Hash> ErrorGate<F> {
    pub fn new() -> Self {
        Self {
            touched: HashSet::new(),
            submit_attempted: false,
        }
    }

    /// Mark a field as interacted with.
    pub fn touch(&mut self, field: F) {
        self.touched.insert(field);
    }

    /// Mark several fields at once.
    pub fn touch_all(&mut self, fields: impl IntoIterator<Item = F>) {
        self.touched.extend(fields);
    }

    pub fn is_touched(&self, field: &F) -> bool {
        self.touched.contains(field)
    }

    /// Record a submission attempt; from now on every error is shown.
    pub fn attempt_submit(&mut self) {
        self.submit_attempted = true;
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Whether errors on `field` should be shown.
    pub fn shows(&self, field: &F) -> bool {
        self.submit_attempted || self.touched.contains(field)
    }

    /// Pass `error` through only if the field's errors are visible.
    pub fn reveal<E>(&self, field: &F, error: Option<E>) -> Option<E> {
        error.filter(|_| self.shows(field))
    }
}

impl<F: Eq + Hash> Default for ErrorGate<F> {
    fn default() -> Self {
        Self::new()
    }
}
