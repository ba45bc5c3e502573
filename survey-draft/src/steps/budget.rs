use std::fmt;

use survey_draft_types::{DraftError, ErrorGate, FieldError, FieldErrorKind, SurveyDraft};

use super::{StepKind, SubmitError, WizardStep};
use crate::DraftStore;

/// Share of the reward pool charged by the platform.
pub const PLATFORM_FEE_RATE: f64 = 0.05;

/// Outcome of parsing one numeric text input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<T> {
    /// The input is blank.
    Absent,
    Valid(T),
    /// Non-numeric, negative, or (for the cap) fractional.
    Invalid,
}

impl<T: Copy> Parsed<T> {
    pub fn is_provided(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub fn value(&self) -> Option<T> {
        match self {
            Self::Valid(v) => Some(*v),
            _ => None,
        }
    }
}

/// Parse a reward amount. Accepts a decimal comma.
pub fn parse_reward(text: &str) -> Parsed<f64> {
    let text = text.trim().replacen(',', ".", 1);
    if text.is_empty() {
        return Parsed::Absent;
    }
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Parsed::Valid(n),
        _ => Parsed::Invalid,
    }
}

/// Parse a voter cap: a non-negative whole number.
pub fn parse_cap(text: &str) -> Parsed<u64> {
    let text = text.trim();
    if text.is_empty() {
        return Parsed::Absent;
    }
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 => {
            Parsed::Valid(n as u64)
        }
        _ => Parsed::Invalid,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetField {
    Reward,
    Cap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetError {
    /// Cap given, reward blank.
    RewardMissing,
    RewardInvalid,
    /// Reward given, cap blank.
    CapMissing,
    CapInvalid,
}

impl BudgetError {
    pub fn field(self) -> BudgetField {
        match self {
            Self::RewardMissing | Self::RewardInvalid => BudgetField::Reward,
            Self::CapMissing | Self::CapInvalid => BudgetField::Cap,
        }
    }
}

impl fmt::Display for BudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::RewardMissing => "Reward per Voter is required when Voter Cap is set.",
            Self::RewardInvalid => "Reward per Voter must be a valid non-negative number.",
            Self::CapMissing => "Voter Cap is required when Reward per Voter is set.",
            Self::CapInvalid => "Voter Cap must be a whole number (0, 1, 2, ...).",
        };
        f.write_str(msg)
    }
}

impl FieldError for BudgetError {
    fn kind(&self) -> FieldErrorKind {
        match self {
            Self::RewardMissing | Self::CapMissing => FieldErrorKind::CrossFieldMissing,
            Self::RewardInvalid | Self::CapInvalid => FieldErrorKind::FormatInvalid,
        }
    }
}

/// Cost breakdown shown under the inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub reward_pool: f64,
    pub platform_fee: f64,
    pub total: f64,
}

impl Estimate {
    pub fn compute(reward_per_voter: f64, voter_cap: u64) -> Self {
        let reward_pool = reward_per_voter * voter_cap as f64;
        let platform_fee = reward_pool * PLATFORM_FEE_RATE;
        Self {
            reward_pool,
            platform_fee,
            total: reward_pool + platform_fee,
        }
    }
}

/// Render an amount as `1,050.00`.
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

/// Step 4: reward per voter, voter cap and the anonymity switch.
#[derive(Debug)]
pub struct BudgetStep {
    store: DraftStore,
    reward_text: String,
    cap_text: String,
    anonymous: bool,
    gate: ErrorGate<BudgetField>,
}

impl BudgetStep {
    /// Open the step; inputs are pre-filled from the draft.
    pub fn new(store: DraftStore) -> Result<Self, DraftError> {
        let draft = store.read()?;
        Ok(Self {
            store,
            reward_text: draft
                .reward_per_voter
                .map(|r| r.to_string())
                .unwrap_or_default(),
            cap_text: draft.voter_cap.map(|c| c.to_string()).unwrap_or_default(),
            anonymous: draft.anonymous,
            gate: ErrorGate::new(),
        })
    }

    pub fn reward_text(&self) -> &str {
        &self.reward_text
    }

    pub fn cap_text(&self) -> &str {
        &self.cap_text
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn set_reward_text(&mut self, text: impl Into<String>) {
        self.reward_text = text.into();
    }

    pub fn set_cap_text(&mut self, text: impl Into<String>) {
        self.cap_text = text.into();
    }

    pub fn set_anonymous(&mut self, anonymous: bool) {
        self.anonymous = anonymous;
    }

    pub fn reward(&self) -> Parsed<f64> {
        parse_reward(&self.reward_text)
    }

    pub fn cap(&self) -> Parsed<u64> {
        parse_cap(&self.cap_text)
    }

    /// Raw error on the reward input. Missing wins over invalid.
    pub fn reward_error(&self) -> Option<BudgetError> {
        let reward = self.reward();
        if self.cap().is_provided() && !reward.is_provided() {
            Some(BudgetError::RewardMissing)
        } else if reward == Parsed::Invalid {
            Some(BudgetError::RewardInvalid)
        } else {
            None
        }
    }

    /// Raw error on the cap input. Missing wins over invalid.
    pub fn cap_error(&self) -> Option<BudgetError> {
        let cap = self.cap();
        if self.reward().is_provided() && !cap.is_provided() {
            Some(BudgetError::CapMissing)
        } else if cap == Parsed::Invalid {
            Some(BudgetError::CapInvalid)
        } else {
            None
        }
    }

    /// The error to show on `field`, once a publish was attempted.
    pub fn error(&self, field: BudgetField) -> Option<BudgetError> {
        let error = match field {
            BudgetField::Reward => self.reward_error(),
            BudgetField::Cap => self.cap_error(),
        };
        self.gate.reveal(&field, error)
    }

    /// Live estimate; blank or invalid inputs count as zero.
    pub fn estimate(&self) -> Estimate {
        Estimate::compute(
            self.reward().value().unwrap_or(0.0),
            self.cap().value().unwrap_or(0),
        )
    }

    /// Validate and store the budget. Same as [`WizardStep::submit`].
    pub fn publish(&mut self) -> Result<(), SubmitError> {
        self.submit()
    }
}

impl WizardStep for BudgetStep {
    const KIND: StepKind = StepKind::Budget;

    fn submit(&mut self) -> Result<(), SubmitError> {
        self.gate.attempt_submit();
        let errors: Vec<_> = [self.reward_error(), self.cap_error()]
            .into_iter()
            .flatten()
            .collect();
        if !errors.is_empty() {
            tracing::warn!(?errors, "budget step rejected");
            return Err(SubmitError::Invalid {
                step: Self::KIND,
                count: errors.len(),
            });
        }

        let reward_per_voter = self.reward().value();
        let voter_cap = self.cap().value();
        let anonymous = self.anonymous;
        self.store.merge(|draft| SurveyDraft {
            reward_per_voter,
            voter_cap,
            anonymous,
            ..draft
        })?;
        tracing::info!(?reward_per_voter, ?voter_cap, "survey budget published");
        Ok(())
    }

    /// Stores whatever parses; the both-or-neither rule is not enforced here.
    fn save_draft(&self) -> Result<(), DraftError> {
        let reward_per_voter = self.reward().value();
        let voter_cap = self.cap().value();
        let anonymous = self.anonymous;
        self.store.merge(|draft| SurveyDraft {
            reward_per_voter,
            voter_cap,
            anonymous,
            ..draft
        })
    }

    fn is_valid(&self) -> bool {
        self.reward_error().is_none() && self.cap_error().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DraftSession;

    fn open() -> (DraftSession, BudgetStep) {
        let session = DraftSession::open();
        let step = BudgetStep::new(session.store()).unwrap();
        (session, step)
    }

    #[test]
    fn reward_parsing() {
        assert_eq!(parse_reward(""), Parsed::Absent);
        assert_eq!(parse_reward("  "), Parsed::Absent);
        assert_eq!(parse_reward("2,5"), Parsed::Valid(2.5));
        assert_eq!(parse_reward(" 0.75 "), Parsed::Valid(0.75));
        assert_eq!(parse_reward("-1"), Parsed::Invalid);
        assert_eq!(parse_reward("abc"), Parsed::Invalid);
        assert_eq!(parse_reward("inf"), Parsed::Invalid);
    }

    #[test]
    fn cap_parsing() {
        assert_eq!(parse_cap("100"), Parsed::Valid(100));
        assert_eq!(parse_cap("3.0"), Parsed::Valid(3));
        assert_eq!(parse_cap("2.5"), Parsed::Invalid);
        assert_eq!(parse_cap("-4"), Parsed::Invalid);
        assert_eq!(parse_cap("ten"), Parsed::Invalid);
        assert_eq!(parse_cap(""), Parsed::Absent);
    }

    #[test]
    fn estimate_for_two_by_hundred() {
        let e = Estimate::compute(2.0, 100);
        assert_eq!(e.reward_pool, 200.0);
        assert_eq!(e.platform_fee, 10.0);
        assert_eq!(e.total, 210.0);
    }

    #[test]
    fn one_input_requires_the_other() {
        let (_session, mut step) = open();
        step.set_reward_text("2");
        assert!(!step.is_valid());
        assert_eq!(step.cap_error(), Some(BudgetError::CapMissing));
        assert_eq!(step.reward_error(), None);

        step.set_reward_text("");
        step.set_cap_text("50");
        assert_eq!(step.reward_error(), Some(BudgetError::RewardMissing));
        assert_eq!(step.cap_error(), None);
    }

    #[test]
    fn missing_takes_precedence_over_invalid() {
        let (_session, mut step) = open();
        step.set_cap_text("1.5");
        assert_eq!(step.reward_error(), Some(BudgetError::RewardMissing));
        assert_eq!(step.cap_error(), Some(BudgetError::CapInvalid));
        assert_eq!(
            BudgetError::CapInvalid.kind(),
            FieldErrorKind::FormatInvalid
        );
        assert_eq!(
            BudgetError::RewardMissing.kind(),
            FieldErrorKind::CrossFieldMissing
        );
    }

    #[test]
    fn neither_input_is_valid_with_zero_total() {
        let (session, mut step) = open();
        assert!(step.is_valid());
        assert_eq!(step.estimate().total, 0.0);

        step.publish().unwrap();
        let draft = session.snapshot();
        assert_eq!(draft.reward_per_voter, None);
        assert_eq!(draft.voter_cap, None);
    }

    #[test]
    fn errors_visible_only_after_publish() {
        let (_session, mut step) = open();
        step.set_reward_text("1");
        assert_eq!(step.error(BudgetField::Cap), None);

        assert!(step.publish().unwrap_err().is_invalid());
        assert_eq!(step.error(BudgetField::Cap), Some(BudgetError::CapMissing));
    }

    #[test]
    fn publish_stores_parsed_values() {
        let (session, mut step) = open();
        step.set_reward_text("1,25");
        step.set_cap_text("40");
        step.set_anonymous(false);
        step.publish().unwrap();

        let draft = session.snapshot();
        assert_eq!(draft.reward_per_voter, Some(1.25));
        assert_eq!(draft.voter_cap, Some(40));
        assert!(!draft.anonymous);

        let reopened = BudgetStep::new(session.store()).unwrap();
        assert_eq!(reopened.reward_text(), "1.25");
        assert_eq!(reopened.cap_text(), "40");
    }

    #[test]
    fn estimate_ignores_invalid_inputs() {
        let (_session, mut step) = open();
        step.set_reward_text("abc");
        step.set_cap_text("10");
        assert_eq!(step.estimate().total, 0.0);
    }

    #[test]
    fn save_draft_skips_cross_field_rule() {
        let (session, mut step) = open();
        step.set_reward_text("3");
        step.save_draft().unwrap();
        let draft = session.snapshot();
        assert_eq!(draft.reward_per_voter, Some(3.0));
        assert_eq!(draft.voter_cap, None);
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(1050.0), "1,050.00");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(210.0), "210.00");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(-12.5), "-12.50");
    }
}
