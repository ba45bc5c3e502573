//! The screen the wallet returns to after sharing a credential.
//!
//! Everything in the callback query is untrusted display data. Nothing is
//! verified here.

use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use serde_json::Value;
use url::form_urlencoded;

use crate::CallbackDelays;

/// Raw parameters of an auth callback link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallbackParams {
    pub credential: Option<String>,
    pub did: Option<String>,
    /// Epoch milliseconds, as sent by the wallet.
    pub timestamp: Option<String>,
}

impl CallbackParams {
    /// Read the parameters from an `application/x-www-form-urlencoded` query.
    /// Empty values count as absent.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                "credential" => &mut params.credential,
                "did" => &mut params.did,
                "timestamp" => &mut params.timestamp,
                _ => continue,
            };
            *slot = Some(value.into_owned());
        }
        params
    }
}

/// A shared credential: parsed JSON when possible, the raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Credential {
    Json(Value),
    Raw(String),
}

impl Credential {
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw)
            .map(Self::Json)
            .unwrap_or_else(|_| Self::Raw(raw.to_string()))
    }

    fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Json(Value::Object(map)) => map.get(name).filter(|v| is_truthy(v)),
            _ => None,
        }
    }

    /// Whether the credential parsed to a JSON object or array. Arrays get the
    /// summary block too, with every field shown as missing.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Json(Value::Object(_) | Value::Array(_)))
    }

    /// The `type` field, or "Unknown".
    pub fn kind(&self) -> String {
        self.field("type")
            .map(display_value)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn name(&self) -> Option<String> {
        self.field("name").map(display_value)
    }

    pub fn birth_year(&self) -> Option<i64> {
        self.field("birthYear").and_then(as_integer)
    }

    /// `MM/DD/YYYY`, if a birth year is present.
    pub fn birth_date(&self) -> Option<String> {
        let year = self.field("birthYear").map(display_value)?;
        let part = |name| {
            self.field(name)
                .map(|v| format!("{:0>2}", display_value(v)))
                .unwrap_or_else(|| "--".to_string())
        };
        Some(format!("{}/{}/{year}", part("birthMonth"), part("birthDay")))
    }

    /// Whole years between the birth year and `reference_year`. `None` when
    /// the difference does not fit an `i64`.
    pub fn age_in(&self, reference_year: i32) -> Option<i64> {
        self.birth_year()
            .and_then(|year| i64::from(reference_year).checked_sub(year))
    }

    /// The credential as shown in the raw box: pretty JSON, or the text as received.
    pub fn pretty(&self) -> String {
        match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Raw(raw) => raw.clone(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Whole-valued floats such as `1990.0` count; fractional years do not.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// What the wallet sent, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedCredential {
    pub credential: Option<Credential>,
    pub did: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub received_at: DateTime<Utc>,
}

impl ReceivedCredential {
    pub fn new(params: &CallbackParams, received_at: DateTime<Utc>) -> Self {
        let timestamp = params
            .timestamp
            .as_deref()
            .and_then(|ts| ts.trim().parse::<i64>().ok())
            .and_then(DateTime::from_timestamp_millis);
        Self {
            credential: params.credential.as_deref().map(Credential::parse),
            did: params.did.clone(),
            timestamp,
            received_at,
        }
    }

    pub fn did_label(&self) -> &str {
        self.did.as_deref().unwrap_or("N/A")
    }

    pub fn timestamp_label(&self) -> String {
        self.timestamp
            .map(format_instant)
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn received_at_label(&self) -> String {
        format_instant(self.received_at)
    }

    /// Age relative to the year the credential arrived.
    pub fn age(&self) -> Option<i64> {
        self.credential
            .as_ref()
            .and_then(|c| c.age_in(self.received_at.year()))
    }
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// What the callback screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackPhase {
    /// Spinner: "Processing authentication...".
    Processing,
    /// "Credential Received!" with the received data.
    Succeeded,
    /// Time to navigate to the home screen.
    RedirectHome,
}

/// State of the auth callback screen.
///
/// The callback is processed exactly once per screen, no matter how often
/// [`AuthCallbackScreen::mount`] runs. Phases are a pure function of the
/// time elapsed since then.
#[derive(Debug, Clone)]
pub struct AuthCallbackScreen {
    delays: CallbackDelays,
    received: Option<ReceivedCredential>,
}

impl AuthCallbackScreen {
    pub fn new(delays: CallbackDelays) -> Self {
        Self {
            delays,
            received: None,
        }
    }

    /// Process the callback. Returns `false` if it was already processed.
    pub fn mount(&mut self, params: &CallbackParams, now: DateTime<Utc>) -> bool {
        if self.received.is_some() {
            return false;
        }
        let received = ReceivedCredential::new(params, now);
        let kind = received.credential.as_ref().map(Credential::kind);
        tracing::info!(did = received.did_label(), credential_type = ?kind, "credential received");
        self.received = Some(received);
        true
    }

    pub fn received(&self) -> Option<&ReceivedCredential> {
        self.received.as_ref()
    }

    pub fn phase(&self, now: DateTime<Utc>) -> CallbackPhase {
        let Some(received) = &self.received else {
            return CallbackPhase::Processing;
        };
        let elapsed = (now - received.received_at)
            .to_std()
            .unwrap_or(Duration::ZERO);
        if elapsed < self.delays.processing {
            CallbackPhase::Processing
        } else if elapsed < self.delays.processing + self.delays.redirect {
            CallbackPhase::Succeeded
        } else {
            CallbackPhase::RedirectHome
        }
    }
}

impl Default for AuthCallbackScreen {
    fn default() -> Self {
        Self::new(CallbackDelays::default())
    }
}
