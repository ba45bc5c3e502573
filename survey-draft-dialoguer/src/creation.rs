//! The four-step survey creation wizard.

use survey_draft::steps::{
    BudgetField, DetailsField, SUGGESTED_TAGS, format_money, question_error,
};
use survey_draft::{
    BudgetStep, CreationFlow, DetailsStep, FieldError, FlowStage, Platform, QuestionId,
    QuestionKind, QuestionsStep, RequirementsStep, StepKind, SubmitError, SurveyDraft, WizardStep,
    value_hint,
};

use crate::{DialoguerWizard, WizardError};

/// What the user chose at the end of a step screen.
enum Outcome {
    Submitted,
    Back,
}

/// Print a rejected submission; other failures are passed on.
fn report(result: Result<FlowStage, SubmitError>) -> Result<bool, WizardError> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if e.is_invalid() => {
            println!("Error: {e}");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn banner(kind: StepKind) {
    println!();
    println!("== {} ({}/4) ==", kind.title(), kind.number());
}

impl DialoguerWizard {
    /// Walk the creation flow until the survey is published.
    pub fn create_survey(&self, platform: Platform) -> Result<SurveyDraft, WizardError> {
        let mut flow = CreationFlow::start(platform);

        while let FlowStage::Step(kind) = flow.stage() {
            banner(kind);
            let outcome = match kind {
                StepKind::Details => {
                    let mut step = flow.details_step()?;
                    self.details(&mut flow, &mut step)?
                }
                StepKind::Questions => {
                    let mut step = flow.questions_step()?;
                    self.questions(&mut flow, &mut step)?
                }
                StepKind::Requirements => {
                    let mut step = flow.requirements_step()?;
                    self.requirements(&mut flow, &mut step)?
                }
                StepKind::Budget => {
                    let mut step = flow.budget_step()?;
                    self.budget(&mut flow, &mut step)?
                }
            };
            if let Outcome::Back = outcome {
                flow.back();
            }
        }

        Ok(flow.finish())
    }

    /// Offer "Back" on every step but the first. Saves the step first.
    fn back_requested<S: WizardStep>(&self, step: &S) -> Result<bool, WizardError> {
        if S::KIND.previous().is_none() || !self.confirm("Go back to the previous step?", false)? {
            return Ok(false);
        }
        step.save_draft()?;
        Ok(true)
    }

    fn details(
        &self,
        flow: &mut CreationFlow,
        step: &mut DetailsStep,
    ) -> Result<Outcome, WizardError> {
        loop {
            let name = self.text("Survey name", step.name())?;
            step.set_name(name);
            step.touch(DetailsField::Name);

            let description = self.text("Description", step.description())?;
            step.set_description(description);
            step.touch(DetailsField::Description);

            if flow.platform().requires_schedule()
                || self.confirm("Set a voting window?", false)?
            {
                let start = self.date("Start date")?;
                step.pick_start(start);
                let end = self.date("End date")?;
                step.pick_end(end);
            }

            let category = self.text("Category", step.category())?;
            step.set_category(category);

            let checked: Vec<bool> = SUGGESTED_TAGS
                .iter()
                .map(|tag| step.tags().iter().any(|t| t == tag))
                .collect();
            let picked = self.multi_select("Tags", &SUGGESTED_TAGS, &checked)?;
            for (i, tag) in SUGGESTED_TAGS.iter().enumerate() {
                if picked.contains(&i) != checked[i] {
                    step.toggle_tag(tag);
                }
            }

            for error in step.visible_errors() {
                println!("Error: {:?}: {error}", error.field());
            }
            if report(flow.submit(step))? {
                return Ok(Outcome::Submitted);
            }
        }
    }

    fn questions(
        &self,
        flow: &mut CreationFlow,
        step: &mut QuestionsStep,
    ) -> Result<Outcome, WizardError> {
        const ACTIONS: [&str; 5] = ["Edit a question", "Add question", "Duplicate", "Remove", "Continue"];

        loop {
            for (i, q) in step.questions().iter().enumerate() {
                let marker = if q.is_required() { "*" } else { " " };
                println!("{marker}{}. [{}] {}", i + 1, q.kind(), q.title());
                if let Some(error) = step.error(q.id()) {
                    println!("     Error: {error}");
                }
            }
            if let Some(text) = step.banner() {
                println!("{text}");
            }

            match self.select("Questions", &ACTIONS, 0)? {
                0 => {
                    if let Some(id) = self.pick_question(step)? {
                        self.edit_question(step, id)?;
                    }
                }
                1 => {
                    let id = step.add();
                    self.edit_question(step, id)?;
                }
                2 => {
                    if let Some(id) = self.pick_question(step)? {
                        step.duplicate(id);
                    }
                }
                3 => {
                    if let Some(id) = self.pick_question(step)? {
                        step.remove(id);
                    }
                }
                _ => {
                    if self.back_requested(step)? {
                        return Ok(Outcome::Back);
                    }
                    if report(flow.submit(step))? {
                        return Ok(Outcome::Submitted);
                    }
                }
            }
        }
    }

    fn pick_question(&self, step: &QuestionsStep) -> Result<Option<QuestionId>, WizardError> {
        if step.questions().is_empty() {
            println!("No questions yet.");
            return Ok(None);
        }
        let titles: Vec<String> = step
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{}. {}", i + 1, q.title()))
            .collect();
        let index = self.select("Which question?", &titles, 0)?;
        Ok(step.questions().get(index).map(|q| q.id()))
    }

    fn edit_question(&self, step: &mut QuestionsStep, id: QuestionId) -> Result<(), WizardError> {
        let Some(question) = step.get(id) else {
            return Ok(());
        };
        let title = self.text("Question", question.title())?;
        step.set_title(id, title);

        let current = QuestionKind::ALL
            .iter()
            .position(|k| Some(*k) == step.get(id).map(|q| q.kind()))
            .unwrap_or(0);
        let labels: Vec<&str> = QuestionKind::ALL.iter().map(|k| k.label()).collect();
        let kind = QuestionKind::ALL[self.select("Type", &labels, current)?];
        step.set_kind(id, kind);

        let required = step.get(id).is_some_and(|q| q.is_required());
        let required = self.confirm("Required?", required)?;
        step.set_required(id, required);

        if kind.has_options() {
            let options: Vec<String> = step.get(id).map(|q| q.options().to_vec()).unwrap_or_default();
            for (i, option) in options.iter().enumerate() {
                let value = self.text(&format!("Option {}", i + 1), option)?;
                step.set_option(id, i, value);
            }
            while self.confirm("Add another option?", false)? {
                step.add_option(id);
                let last = step.get(id).map_or(0, |q| q.options().len().saturating_sub(1));
                let value = self.text(&format!("Option {}", last + 1), "")?;
                step.set_option(id, last, value);
            }
        }

        if let Some(error) = step.get(id).and_then(question_error) {
            println!("Note: {error} ({:?})", error.kind());
        }
        Ok(())
    }

    fn requirements(
        &self,
        flow: &mut CreationFlow,
        step: &mut RequirementsStep,
    ) -> Result<Outcome, WizardError> {
        loop {
            let rows: Vec<_> = step.rows().to_vec();
            for row in rows {
                let kind = self.text("Requirement type (blank to skip)", &row.kind)?;
                step.set_type(row.id, kind.clone());
                if kind.trim().is_empty() {
                    continue;
                }
                let prompt = format!("{} (e.g. {})", kind.trim(), value_hint(&kind));
                let value = self.text(&prompt, &row.value)?;
                step.set_value(row.id, value);
            }

            while self.confirm("Add another requirement?", false)? {
                let id = step.add();
                let kind = self.text("Requirement type", "")?;
                let value = self.text(&format!("Value (e.g. {})", value_hint(&kind)), "")?;
                step.set_type(id, kind);
                step.set_value(id, value);
            }

            if self.back_requested(step)? {
                return Ok(Outcome::Back);
            }
            if report(flow.submit(step))? {
                return Ok(Outcome::Submitted);
            }
            for row in step.rows() {
                if let Some(error) = step.error(row.id) {
                    println!("Error: {}: {error}", row.kind);
                }
            }
        }
    }

    fn budget(&self, flow: &mut CreationFlow, step: &mut BudgetStep) -> Result<Outcome, WizardError> {
        loop {
            let reward = self.text("Reward per voter ($, blank for none)", step.reward_text())?;
            step.set_reward_text(reward);
            let cap = self.text("Voter cap (blank for none)", step.cap_text())?;
            step.set_cap_text(cap);
            let anonymous = self.confirm("Anonymous voting?", step.is_anonymous())?;
            step.set_anonymous(anonymous);

            let estimate = step.estimate();
            println!("Reward pool:   ${}", format_money(estimate.reward_pool));
            println!("Platform fee:  ${}", format_money(estimate.platform_fee));
            println!("Total:         ${}", format_money(estimate.total));

            if self.back_requested(step)? {
                return Ok(Outcome::Back);
            }
            if !self.confirm("Publish?", true)? {
                continue;
            }
            if report(flow.submit(step))? {
                return Ok(Outcome::Submitted);
            }
            for field in [BudgetField::Reward, BudgetField::Cap] {
                if let Some(error) = step.error(field) {
                    println!("Error: {error}");
                }
            }
        }
    }
}
