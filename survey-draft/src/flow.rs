//! The creation flow: which wizard step is showing, and the session behind it.

use std::fmt;

use survey_draft_types::{DraftError, SurveyDraft};

use crate::steps::{
    BudgetStep, DetailsStep, QuestionsStep, RequirementsStep, StepKind, SubmitError, WizardStep,
};
use crate::{DraftSession, DraftStore, Platform};

/// Where the creation flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowStage {
    Step(StepKind),
    /// The budget step was published; the draft is final.
    Published,
}

impl FlowStage {
    pub fn step(self) -> Option<StepKind> {
        match self {
            Self::Step(kind) => Some(kind),
            Self::Published => None,
        }
    }
}

impl fmt::Display for FlowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(kind) => write!(f, "{kind}"),
            Self::Published => f.write_str("Published"),
        }
    }
}

/// One survey-creation session, walked Details → Questions → Requirements → Budget.
///
/// The flow owns the [`DraftSession`]. Steps are opened through it so they
/// all share the same store, and submitting a step through
/// [`CreationFlow::submit`] advances the flow.
#[derive(Debug)]
pub struct CreationFlow {
    session: DraftSession,
    platform: Platform,
    stage: FlowStage,
}

impl CreationFlow {
    /// Open a new session on the details step.
    pub fn start(platform: Platform) -> Self {
        tracing::debug!(?platform, "creation flow started");
        Self {
            session: DraftSession::open(),
            platform,
            stage: FlowStage::Step(StepKind::Details),
        }
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn is_published(&self) -> bool {
        self.stage == FlowStage::Published
    }

    pub fn store(&self) -> DraftStore {
        self.session.store()
    }

    /// Copy of the draft as it stands.
    pub fn draft(&self) -> SurveyDraft {
        self.session.snapshot()
    }

    pub fn details_step(&self) -> Result<DetailsStep, DraftError> {
        DetailsStep::new(self.store(), self.platform)
    }

    pub fn questions_step(&self) -> Result<QuestionsStep, DraftError> {
        QuestionsStep::new(self.store())
    }

    pub fn requirements_step(&self) -> Result<RequirementsStep, DraftError> {
        RequirementsStep::new(self.store())
    }

    pub fn budget_step(&self) -> Result<BudgetStep, DraftError> {
        BudgetStep::new(self.store())
    }

    /// Submit `step` and, if it merged, move to the next stage.
    ///
    /// Only the step currently showing may be submitted.
    pub fn submit<S: WizardStep>(&mut self, step: &mut S) -> Result<FlowStage, SubmitError> {
        if self.stage != FlowStage::Step(S::KIND) {
            return Err(SubmitError::OutOfOrder {
                submitted: S::KIND,
                current: self.stage,
            });
        }
        step.submit()?;

        let from = S::KIND;
        self.stage = match from.next() {
            Some(next) => FlowStage::Step(next),
            None => FlowStage::Published,
        };
        tracing::debug!(%from, to = %self.stage, "flow advanced");
        Ok(self.stage)
    }

    /// Go to the previous step, keeping the draft. Returns `false` on the
    /// first step or after publishing.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.stage.step().and_then(StepKind::previous) else {
            return false;
        };
        tracing::debug!(from = %self.stage, to = %previous, "flow went back");
        self.stage = FlowStage::Step(previous);
        true
    }

    /// Discard the draft and return to the first step.
    pub fn restart(&mut self) -> Result<(), DraftError> {
        self.session.store().reset()?;
        self.stage = FlowStage::Step(StepKind::Details);
        tracing::debug!("creation flow restarted");
        Ok(())
    }

    /// Progress bar fill: a quarter per step.
    pub fn progress(&self) -> f32 {
        self.stage.step().map_or(1.0, StepKind::progress)
    }

    /// Caption of the forward button, `None` once published.
    pub fn next_label(&self) -> Option<String> {
        self.stage.step().map(StepKind::next_label)
    }

    /// Close the session and hand back the final draft.
    pub fn finish(self) -> SurveyDraft {
        self.session.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_details() {
        let flow = CreationFlow::start(Platform::Web);
        assert_eq!(flow.stage(), FlowStage::Step(StepKind::Details));
        assert_eq!(flow.progress(), 0.25);
        assert_eq!(flow.next_label().as_deref(), Some("Next (1/4)"));
        assert!(!flow.is_published());
    }

    #[test]
    fn out_of_order_submit_is_rejected() {
        let mut flow = CreationFlow::start(Platform::Web);
        let mut budget = flow.budget_step().unwrap();
        let err = flow.submit(&mut budget).unwrap_err();
        assert!(matches!(
            err,
            SubmitError::OutOfOrder {
                submitted: StepKind::Budget,
                current: FlowStage::Step(StepKind::Details),
            }
        ));
        assert_eq!(flow.stage(), FlowStage::Step(StepKind::Details));
    }

    #[test]
    fn rejected_submit_stays_put() {
        let mut flow = CreationFlow::start(Platform::Native);
        let mut details = flow.details_step().unwrap();
        assert!(flow.submit(&mut details).unwrap_err().is_invalid());
        assert_eq!(flow.stage(), FlowStage::Step(StepKind::Details));
    }

    #[test]
    fn back_keeps_draft() {
        let mut flow = CreationFlow::start(Platform::Web);
        let mut details = flow.details_step().unwrap();
        details.set_name("Kept");
        details.set_description("Across navigation");
        flow.submit(&mut details).unwrap();
        assert_eq!(flow.stage(), FlowStage::Step(StepKind::Questions));

        assert!(flow.back());
        assert!(!flow.back());
        assert_eq!(flow.details_step().unwrap().name(), "Kept");
    }

    #[test]
    fn restart_clears_draft() {
        let mut flow = CreationFlow::start(Platform::Web);
        let mut details = flow.details_step().unwrap();
        details.set_name("Gone");
        details.set_description("Soon");
        flow.submit(&mut details).unwrap();

        flow.restart().unwrap();
        assert_eq!(flow.stage(), FlowStage::Step(StepKind::Details));
        assert!(flow.draft().is_empty());
    }

    #[test]
    fn stage_display() {
        assert_eq!(FlowStage::Step(StepKind::Budget).to_string(), "Budget");
        assert_eq!(FlowStage::Published.to_string(), "Published");
    }
}
