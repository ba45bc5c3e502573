//! Handing off to the wallet app to request an age credential.

use url::form_urlencoded;

/// Credential type requested from the wallet.
pub const REQUESTED_CREDENTIAL: &str = "AgeVerification";

/// Android's message when no app handles the wallet scheme.
const NOT_INSTALLED_MARKER: &str = "No Activity found";

/// Whether a platform error message says nothing handles the URL's scheme.
pub fn reads_as_not_installed(message: &str) -> bool {
    message.contains(NOT_INSTALLED_MARKER)
}

/// Opens a URL with the platform.
///
/// This is the only platform capability the wallet hand-off needs, so tests
/// and front-ends can swap it out.
pub trait UrlOpener {
    /// The error type for this opener.
    type Error: Into<anyhow::Error>;

    fn open(&self, url: &str) -> Result<(), Self::Error>;

    /// Whether `error` means no installed app handles the URL's scheme.
    fn is_not_installed(&self, error: &Self::Error) -> bool {
        let _ = error;
        false
    }
}

/// Asks the user's wallet to share a credential.
pub trait CredentialRequester {
    /// Start the hand-off. The wallet later returns to `callback` with the result.
    fn request_credential(&self, callback: &str) -> Result<(), LaunchFailure>;
}

/// Why the wallet could not be opened.
#[derive(Debug, thiserror::Error)]
pub enum LaunchFailure {
    #[error("the wallet app is not installed")]
    WalletNotInstalled,

    #[error("failed to open the wallet: {0:#}")]
    Platform(anyhow::Error),
}

impl LaunchFailure {
    /// Title and message of the blocking dialog shown to the user.
    pub fn dialog(&self) -> (String, String) {
        match self {
            Self::WalletNotInstalled => (
                "Valera Not Found".to_string(),
                "The Valera wallet app is not installed on the emulator. \
                 Please install and run Valera first."
                    .to_string(),
            ),
            Self::Platform(error) => (
                "Error".to_string(),
                format!("Failed to open Valera wallet: {error:#}"),
            ),
        }
    }
}

/// The share request URL for a given callback.
pub fn wallet_request_url(callback: &str) -> String {
    let callback: String = form_urlencoded::byte_serialize(callback.as_bytes()).collect();
    format!("asitplus-wallet://share?action=share&callback={callback}&type={REQUESTED_CREDENTIAL}")
}

/// [`CredentialRequester`] that opens the wallet through a [`UrlOpener`].
#[derive(Debug, Clone, Default)]
pub struct WalletLauncher<O> {
    opener: O,
}

impl<O: UrlOpener> WalletLauncher<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }
}

impl<O: UrlOpener> CredentialRequester for WalletLauncher<O> {
    fn request_credential(&self, callback: &str) -> Result<(), LaunchFailure> {
        let url = wallet_request_url(callback);
        tracing::info!(%url, "opening wallet");

        self.opener.open(&url).map_err(|error| {
            let not_installed = self.opener.is_not_installed(&error);
            let error: anyhow::Error = error.into();
            let message = format!("{error:#}");
            tracing::warn!(error = %message, not_installed, "wallet launch failed");
            if not_installed {
                LaunchFailure::WalletNotInstalled
            } else {
                LaunchFailure::Platform(error)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_CALLBACK_URL, TestOpener};

    #[test]
    fn request_url_encodes_callback() {
        assert_eq!(
            wallet_request_url(DEFAULT_CALLBACK_URL),
            "asitplus-wallet://share?action=share\
             &callback=zkdappsurveyfrontend%3A%2F%2Fauth&type=AgeVerification"
        );
    }

    #[test]
    fn opens_wallet_url() {
        let launcher = WalletLauncher::new(TestOpener::new());
        launcher.request_credential(DEFAULT_CALLBACK_URL).unwrap();
        assert_eq!(
            launcher.opener().opened(),
            [wallet_request_url(DEFAULT_CALLBACK_URL)]
        );
    }

    #[test]
    fn missing_activity_means_not_installed() {
        let opener = TestOpener::new().failing_with(
            "No Activity found to handle Intent { act=android.intent.action.VIEW }",
        );
        let err = WalletLauncher::new(opener)
            .request_credential(DEFAULT_CALLBACK_URL)
            .unwrap_err();
        assert!(matches!(err, LaunchFailure::WalletNotInstalled));
        assert_eq!(err.dialog().0, "Valera Not Found");
    }

    #[test]
    fn openers_decide_what_not_installed_means() {
        #[derive(Debug, thiserror::Error)]
        #[error("No Activity found, exit {0}")]
        struct ExitCode(i32);

        struct ExitOpener(i32);

        impl UrlOpener for ExitOpener {
            type Error = ExitCode;

            fn open(&self, _url: &str) -> Result<(), Self::Error> {
                Err(ExitCode(self.0))
            }

            fn is_not_installed(&self, error: &Self::Error) -> bool {
                error.0 == 4
            }
        }

        let err = WalletLauncher::new(ExitOpener(4))
            .request_credential(DEFAULT_CALLBACK_URL)
            .unwrap_err();
        assert!(matches!(err, LaunchFailure::WalletNotInstalled));

        // The message alone no longer decides.
        let err = WalletLauncher::new(ExitOpener(3))
            .request_credential(DEFAULT_CALLBACK_URL)
            .unwrap_err();
        assert!(matches!(err, LaunchFailure::Platform(_)));
    }

    #[test]
    fn other_failures_keep_the_message() {
        let opener = TestOpener::new().failing_with("permission denied");
        let err = WalletLauncher::new(opener)
            .request_credential(DEFAULT_CALLBACK_URL)
            .unwrap_err();
        let (title, message) = err.dialog();
        assert_eq!(title, "Error");
        assert_eq!(message, "Failed to open Valera wallet: permission denied");
    }
}
