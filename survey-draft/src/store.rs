//! The draft store: one mutable `SurveyDraft` per creation session.
//!
//! A [`DraftSession`] owns the document. Steps receive a cloneable
//! [`DraftStore`] handle in their constructors; once the session is closed
//! or dropped every handle fails with [`DraftError::SessionClosed`].
//!
//! Access is strictly single-threaded (one user, one session), so the
//! handle is built on `Rc`/`RefCell` and is neither `Send` nor `Sync`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use survey_draft_types::{DraftError, SurveyDraft};

/// Scope of one survey-creation session.
#[derive(Debug)]
pub struct DraftSession {
    draft: Rc<RefCell<SurveyDraft>>,
}

impl DraftSession {
    /// Open a session holding an empty draft.
    pub fn open() -> Self {
        tracing::debug!("draft session opened");
        Self {
            draft: Rc::new(RefCell::new(SurveyDraft::empty())),
        }
    }

    /// A handle to this session's draft.
    pub fn store(&self) -> DraftStore {
        DraftStore {
            draft: Rc::downgrade(&self.draft),
        }
    }

    /// Copy of the current draft.
    pub fn snapshot(&self) -> SurveyDraft {
        self.draft.borrow().clone()
    }

    /// End the session. Outstanding handles stop working.
    pub fn close(self) -> SurveyDraft {
        tracing::debug!("draft session closed");
        self.draft.take()
    }
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::open()
    }
}

/// Handle to the draft of an open [`DraftSession`].
#[derive(Debug, Clone)]
pub struct DraftStore {
    draft: Weak<RefCell<SurveyDraft>>,
}

impl DraftStore {
    fn cell(&self) -> Result<Rc<RefCell<SurveyDraft>>, DraftError> {
        self.draft.upgrade().ok_or(DraftError::SessionClosed)
    }

    /// The current draft.
    pub fn read(&self) -> Result<SurveyDraft, DraftError> {
        Ok(self.cell()?.borrow().clone())
    }

    /// Replace the draft with `updater(current)`. Last write wins.
    ///
    /// No borrow is held while `updater` runs, so it may read the store.
    pub fn merge<F>(&self, updater: F) -> Result<(), DraftError>
    where
        F: FnOnce(SurveyDraft) -> SurveyDraft,
    {
        let cell = self.cell()?;
        let current = cell.borrow().clone();
        let next = updater(current);
        tracing::debug!(name = %next.name, questions = next.questions.len(), "draft merged");
        cell.replace(next);
        Ok(())
    }

    /// Restore the empty default draft.
    pub fn reset(&self) -> Result<(), DraftError> {
        self.cell()?.replace(SurveyDraft::empty());
        tracing::debug!("draft reset");
        Ok(())
    }

    /// Whether the owning session is still open.
    pub fn is_open(&self) -> bool {
        self.draft.strong_count() > 0
    }
}
