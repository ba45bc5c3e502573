//! URL opener for exercising the wallet hand-off without a platform.
//!
//! `TestOpener` records every URL it is asked to open and can be scripted
//! to fail with a given platform message.
//!
//! # Example
//!
//! ```rust
//! use survey_draft::{CredentialRequester, LaunchFailure, TestOpener, WalletLauncher};
//!
//! let launcher = WalletLauncher::new(TestOpener::new().failing_with("No Activity found"));
//! let err = launcher.request_credential("zkdappsurveyfrontend://auth").unwrap_err();
//! assert!(matches!(err, LaunchFailure::WalletNotInstalled));
//! assert_eq!(launcher.opener().opened().len(), 1);
//! ```

use std::cell::RefCell;

use crate::{UrlOpener, reads_as_not_installed};

/// A [`UrlOpener`] that records URLs instead of opening them.
#[derive(Debug, Clone, Default)]
pub struct TestOpener {
    opened: RefCell<Vec<String>>,
    failure: Option<String>,
}

/// Error type for TestOpener.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TestOpenerError(pub String);

impl TestOpener {
    /// Create an opener that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `open` fail with `message`.
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// URLs passed to `open` so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for TestOpener {
    type Error = TestOpenerError;

    fn open(&self, url: &str) -> Result<(), Self::Error> {
        self.opened.borrow_mut().push(url.to_string());
        match &self.failure {
            Some(message) => Err(TestOpenerError(message.clone())),
            None => Ok(()),
        }
    }

    fn is_not_installed(&self, error: &Self::Error) -> bool {
        reads_as_not_installed(&error.0)
    }
}
