//! Summaries for the "My Surveys" screens: surveys voted in, surveys created.

use survey_draft_types::{CreatedStatus, CreatedSurvey, ParticipatedSurvey};

/// Header shown above the finished surveys.
pub const COMPLETED_HEADER: &str = "Completed";

fn dollars(amount: f64) -> String {
    format!("${amount:.2}")
}

fn whole_dollars(amount: f64) -> String {
    format!("${amount:.0}")
}

/// Absent and non-finite numbers display as zero.
fn number(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn is_paid(survey: &ParticipatedSurvey) -> bool {
    survey.reward.is_some_and(|r| r > 0.0)
}

/// Stat cards above the participation history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParticipationSummary {
    /// Sum of all paid rewards.
    pub total_earned: f64,
    pub voted: usize,
    /// Votes that were not paid because the reward cap was reached.
    pub unpaid: usize,
}

impl ParticipationSummary {
    pub fn earned_label(&self) -> String {
        dollars(self.total_earned)
    }
}

impl From<&[ParticipatedSurvey]> for ParticipationSummary {
    fn from(surveys: &[ParticipatedSurvey]) -> Self {
        let mut summary = Self {
            voted: surveys.len(),
            ..Self::default()
        };
        for survey in surveys {
            match survey.reward {
                Some(reward) if reward > 0.0 => summary.total_earned += reward,
                _ => summary.unpaid += 1,
            }
        }
        summary
    }
}

/// Badge text of one participation card.
pub fn payout_label(survey: &ParticipatedSurvey) -> String {
    match survey.reward {
        Some(reward) if is_paid(survey) => format!("Reward paid  +{}", dollars(reward)),
        _ => "Paid cap reached - not paid".to_string(),
    }
}

/// Created surveys grouped for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreatedSections<'a> {
    /// Live and draft surveys, in input order.
    pub open: Vec<&'a CreatedSurvey>,
    /// Surveys with results, listed under [`COMPLETED_HEADER`].
    pub completed: Vec<&'a CreatedSurvey>,
}

impl<'a> CreatedSections<'a> {
    pub fn split(surveys: &'a [CreatedSurvey]) -> Self {
        let (completed, open): (Vec<_>, Vec<_>) = surveys
            .iter()
            .partition(|s| s.status == CreatedStatus::Results);
        Self { open, completed }
    }

    /// The completed header, only when there is something under it.
    pub fn completed_header(&self) -> Option<&'static str> {
        (!self.completed.is_empty()).then_some(COMPLETED_HEADER)
    }
}

/// Status badge of a created-survey card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPill {
    Live,
    Draft,
    Ended,
}

impl StatusPill {
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Draft => "Draft",
            Self::Ended => "Ended",
        }
    }

    /// Only live surveys get the pulsing dot.
    pub fn has_dot(self) -> bool {
        matches!(self, Self::Live)
    }
}

impl From<CreatedStatus> for StatusPill {
    fn from(status: CreatedStatus) -> Self {
        match status {
            CreatedStatus::Active => Self::Live,
            CreatedStatus::Draft => Self::Draft,
            CreatedStatus::Results => Self::Ended,
        }
    }
}

/// Primary button of a created-survey card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Manage,
    Edit,
    Results,
}

impl CardAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Manage => "Manage",
            Self::Edit => "Edit",
            Self::Results => "Results",
        }
    }
}

/// Headline number of a card, e.g. `$120` over "Spent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// Display values derived from one [`CreatedSurvey`].
#[derive(Debug, Clone, Copy)]
pub struct CreatedCard<'a> {
    survey: &'a CreatedSurvey,
}

impl<'a> CreatedCard<'a> {
    pub fn new(survey: &'a CreatedSurvey) -> Self {
        Self { survey }
    }

    pub fn survey(&self) -> &'a CreatedSurvey {
        self.survey
    }

    pub fn status(&self) -> StatusPill {
        self.survey.status.into()
    }

    pub fn subtitle(&self) -> String {
        let ends_at = self.survey.ends_at.as_deref().unwrap_or("-");
        match self.survey.status {
            CreatedStatus::Active => format!("Closes on {ends_at}"),
            CreatedStatus::Draft => "Not published".to_string(),
            CreatedStatus::Results => format!("Ended on {ends_at}"),
        }
    }

    /// e.g. `$0.50/voter`.
    pub fn reward_label(&self) -> String {
        format!("{}/voter", dollars(number(self.survey.reward_per_voter)))
    }

    pub fn progress_label(&self) -> &'static str {
        match self.survey.status {
            CreatedStatus::Results => "Final responses",
            _ => "Responses",
        }
    }

    /// Responses over target, clamped to `0.0..=1.0`. A target below one counts as one.
    pub fn progress(&self) -> f64 {
        let current = number(self.survey.responses_current);
        let target = number(self.survey.responses_target).max(1.0);
        (current / target).clamp(0.0, 1.0)
    }

    /// e.g. `88 / 200`.
    pub fn responses_label(&self) -> String {
        format!(
            "{} / {}",
            number(self.survey.responses_current),
            number(self.survey.responses_target)
        )
    }

    pub fn metric(&self) -> Metric {
        let (label, amount) = match self.survey.status {
            CreatedStatus::Results => ("Total spent", self.survey.total_spent),
            CreatedStatus::Draft => ("Budget", self.survey.budget),
            CreatedStatus::Active => ("Spent", self.survey.spent),
        };
        Metric {
            label,
            value: whole_dollars(number(amount)),
        }
    }

    pub fn action(&self) -> CardAction {
        match self.survey.status {
            CreatedStatus::Active => CardAction::Manage,
            CreatedStatus::Draft => CardAction::Edit,
            CreatedStatus::Results => CardAction::Results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voted(reward: Option<f64>) -> ParticipatedSurvey {
        ParticipatedSurvey {
            id: "p".into(),
            title: "Coffee".into(),
            category: "Lifestyle".into(),
            date: "Jan 3, 2026".into(),
            reward,
        }
    }

    #[test]
    fn participation_summary() {
        let surveys = [voted(Some(1.5)), voted(None), voted(Some(0.0)), voted(Some(2.25))];
        let summary = ParticipationSummary::from(&surveys[..]);
        assert_eq!(summary.total_earned, 3.75);
        assert_eq!(summary.voted, 4);
        assert_eq!(summary.unpaid, 2);
        assert_eq!(summary.earned_label(), "$3.75");
    }

    #[test]
    fn payout_labels() {
        assert_eq!(payout_label(&voted(Some(2.0))), "Reward paid  +$2.00");
        assert_eq!(payout_label(&voted(Some(0.0))), "Paid cap reached - not paid");
        assert_eq!(payout_label(&voted(None)), "Paid cap reached - not paid");
    }

    #[test]
    fn sections_keep_order() {
        let surveys = [
            CreatedSurvey::new("1", "A", "x", CreatedStatus::Results),
            CreatedSurvey::new("2", "B", "x", CreatedStatus::Active),
            CreatedSurvey::new("3", "C", "x", CreatedStatus::Draft),
        ];
        let sections = CreatedSections::split(&surveys);
        let open: Vec<_> = sections.open.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(open, ["2", "3"]);
        assert_eq!(sections.completed.len(), 1);
        assert_eq!(sections.completed_header(), Some("Completed"));

        let sections = CreatedSections::split(&surveys[1..]);
        assert_eq!(sections.completed_header(), None);
    }

    #[test]
    fn active_card() {
        let mut survey = CreatedSurvey::new("1", "Parks", "Community", CreatedStatus::Active);
        survey.ends_at = Some("Jun 1".into());
        survey.responses_current = Some(300.0);
        survey.responses_target = Some(200.0);
        survey.spent = Some(149.6);
        survey.reward_per_voter = Some(0.5);

        let card = CreatedCard::new(&survey);
        assert_eq!(card.status(), StatusPill::Live);
        assert!(card.status().has_dot());
        assert_eq!(card.subtitle(), "Closes on Jun 1");
        assert_eq!(card.progress(), 1.0);
        assert_eq!(card.reward_label(), "$0.50/voter");
        assert_eq!(
            card.metric(),
            Metric {
                label: "Spent",
                value: "$150".into()
            }
        );
        assert_eq!(card.action().label(), "Manage");
    }

    #[test]
    fn draft_and_results_cards() {
        let mut draft = CreatedSurvey::new("2", "Idea", "Tech", CreatedStatus::Draft);
        draft.budget = Some(f64::NAN);
        let card = CreatedCard::new(&draft);
        assert_eq!(card.subtitle(), "Not published");
        assert_eq!(card.progress(), 0.0);
        assert_eq!(card.metric().value, "$0");
        assert_eq!(card.action(), CardAction::Edit);
        assert!(!card.status().has_dot());

        let mut done = CreatedSurvey::new("3", "Done", "Tech", CreatedStatus::Results);
        done.responses_current = Some(5.0);
        done.responses_target = Some(0.0);
        done.total_spent = Some(42.0);
        let card = CreatedCard::new(&done);
        assert_eq!(card.subtitle(), "Ended on -");
        assert_eq!(card.progress_label(), "Final responses");
        assert_eq!(card.progress(), 1.0);
        assert_eq!(card.metric().label, "Total spent");
        assert_eq!(card.metric().value, "$42");
        assert_eq!(card.status().label(), "Ended");
    }
}
