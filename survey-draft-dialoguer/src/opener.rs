//! Opening URLs with the desktop's default handler.

use std::io;
use std::process::Command;

use survey_draft::UrlOpener;
use thiserror::Error;

/// Error type for [`SystemOpener`].
#[derive(Debug, Error)]
pub enum OpenerError {
    #[error("could not run `{program}`: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    /// The handler ran but could not open the URL.
    #[error("`{program}` could not open {url} (exit status {code:?})")]
    Unhandled {
        program: &'static str,
        url: String,
        code: Option<i32>,
    },
}

/// [`UrlOpener`] that delegates to `xdg-open` (or `open` on macOS).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn program() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }

    /// Exit status the handler uses when no application owns the scheme.
    ///
    /// `xdg-open` exits 4 when the opening action fails; `open` has a single
    /// failure status.
    fn no_handler_code() -> i32 {
        if cfg!(target_os = "macos") { 1 } else { 4 }
    }
}

impl UrlOpener for SystemOpener {
    type Error = OpenerError;

    fn open(&self, url: &str) -> Result<(), Self::Error> {
        let program = Self::program();
        let status = Command::new(program)
            .arg(url)
            .status()
            .map_err(|source| OpenerError::Spawn { program, source })?;
        if status.success() {
            Ok(())
        } else {
            Err(OpenerError::Unhandled {
                program,
                url: url.to_string(),
                code: status.code(),
            })
        }
    }

    fn is_not_installed(&self, error: &Self::Error) -> bool {
        matches!(
            error,
            OpenerError::Unhandled { code: Some(code), .. } if *code == Self::no_handler_code()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unhandled(code: Option<i32>) -> OpenerError {
        OpenerError::Unhandled {
            program: SystemOpener::program(),
            url: "asitplus-wallet://share".into(),
            code,
        }
    }

    #[test]
    fn only_the_no_handler_status_means_not_installed() {
        let opener = SystemOpener;
        assert!(opener.is_not_installed(&unhandled(Some(SystemOpener::no_handler_code()))));
        assert!(!opener.is_not_installed(&unhandled(None)));
        if !cfg!(target_os = "macos") {
            // bad arguments, missing tool
            assert!(!opener.is_not_installed(&unhandled(Some(1))));
            assert!(!opener.is_not_installed(&unhandled(Some(3))));
        }
    }

    #[test]
    fn spawn_failures_are_platform_errors() {
        let err = OpenerError::Spawn {
            program: "xdg-open",
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(!SystemOpener.is_not_installed(&err));
        assert!(err.to_string().starts_with("could not run `xdg-open`"));
    }

    #[test]
    fn launcher_reports_missing_tool_as_error() {
        use survey_draft::{CredentialRequester, LaunchFailure, WalletLauncher};

        struct Exits(i32);
        impl UrlOpener for Exits {
            type Error = OpenerError;

            fn open(&self, url: &str) -> Result<(), Self::Error> {
                Err(OpenerError::Unhandled {
                    program: SystemOpener::program(),
                    url: url.to_string(),
                    code: Some(self.0),
                })
            }

            fn is_not_installed(&self, error: &Self::Error) -> bool {
                SystemOpener.is_not_installed(error)
            }
        }

        let missing = WalletLauncher::new(Exits(SystemOpener::no_handler_code()))
            .request_credential("zkdappsurveyfrontend://auth")
            .unwrap_err();
        assert!(matches!(missing, LaunchFailure::WalletNotInstalled));

        let other = WalletLauncher::new(Exits(99))
            .request_credential("zkdappsurveyfrontend://auth")
            .unwrap_err();
        assert!(matches!(other, LaunchFailure::Platform(_)));
    }
}
