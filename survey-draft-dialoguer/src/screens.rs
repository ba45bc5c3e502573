//! Browsing, history and wallet screens.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use survey_draft::{
    AppConfig, AuthCallbackScreen, CATEGORIES, CallbackParams, CallbackPhase, CreatedCard,
    CreatedSections, CreatedSurvey, CredentialRequester, ExploreQuery, ListedSurvey,
    ParticipatedSurvey, ParticipationSummary, Route, payout_label, results_label,
};

use crate::{DialoguerWizard, WizardError};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn print_listing(query: &ExploreQuery, catalog: &[ListedSurvey]) {
    let shown = query.apply(catalog);
    println!();
    println!("{}    Sort: {}", results_label(shown.len()), query.sort());
    for survey in shown {
        let eligibility = if survey.qualifies {
            "you qualify"
        } else {
            "not eligible"
        };
        println!(
            "  ${:.2}  {}  [{}]  {} min  {}/{}  ({eligibility})",
            survey.reward,
            survey.name,
            survey.tags.join(", "),
            survey.minutes,
            survey.participants,
            survey.participants_limit,
        );
    }
}

fn print_created(survey: &CreatedSurvey) {
    let card = CreatedCard::new(survey);
    let dot = if card.status().has_dot() { "● " } else { "" };
    let metric = card.metric();
    println!(
        "  {} [{dot}{}] {} | {}",
        survey.title,
        card.status().label(),
        survey.category,
        card.subtitle(),
    );
    println!(
        "     {}  {}: {} ({:.0}%)  {} {}  -> {}",
        card.reward_label(),
        card.progress_label(),
        card.responses_label(),
        card.progress() * 100.0,
        metric.value,
        metric.label,
        card.action().label(),
    );
}

impl DialoguerWizard {
    /// Search, sort and filter the listed surveys until the user is done.
    ///
    /// `focus` pre-fills the search with the survey a deep link pointed at.
    pub fn explore(&self, catalog: &[ListedSurvey], focus: Option<&str>) -> Result<(), WizardError> {
        const ACTIONS: [&str; 4] = ["Search", "Toggle category", "Next sort order", "Done"];

        let mut query = ExploreQuery::new();
        if let Some(name) = focus.and_then(|id| catalog.iter().find(|s| s.id == id)).map(|s| &s.name) {
            query.set_search(name.clone());
        }

        loop {
            print_listing(&query, catalog);
            match self.select("Explore", &ACTIONS, 0)? {
                0 => {
                    let search = self.text("Search", query.search())?;
                    query.set_search(search);
                }
                1 => {
                    let labels: Vec<String> = CATEGORIES
                        .iter()
                        .map(|c| {
                            let mark = if query.categories().is_selected(c) { "x" } else { " " };
                            format!("[{mark}] {c}")
                        })
                        .collect();
                    let index = self.select("Category", &labels, 0)?;
                    query.select_category(CATEGORIES[index]);
                }
                2 => {
                    query.next_sort();
                }
                _ => return Ok(()),
            }
        }
    }

    /// Print the participation and created-survey histories.
    pub fn history(&self, participated: &[ParticipatedSurvey], created: &[CreatedSurvey]) {
        let summary = ParticipationSummary::from(participated);
        println!();
        println!(
            "Earned {}  |  Voted {}  |  Unpaid {}",
            summary.earned_label(),
            summary.voted,
            summary.unpaid
        );
        for survey in participated {
            println!(
                "  {} ({} | {})  {}",
                survey.title,
                survey.category,
                survey.date,
                payout_label(survey)
            );
        }

        let sections = CreatedSections::split(created);
        println!();
        println!("My surveys");
        for survey in &sections.open {
            print_created(survey);
        }
        if let Some(header) = sections.completed_header() {
            println!("{header}");
            for survey in &sections.completed {
                print_created(survey);
            }
        }
    }

    /// Hand off to the wallet, showing a dialog when that fails.
    pub fn request_credential(
        &self,
        requester: &impl CredentialRequester,
        config: &AppConfig,
    ) -> Result<bool, WizardError> {
        match requester.request_credential(&config.callback_url) {
            Ok(()) => {
                println!("Waiting for the wallet to return to {}", config.callback_url);
                Ok(true)
            }
            Err(failure) => {
                let (title, message) = failure.dialog();
                println!();
                println!("{title}");
                println!("{message}");
                self.confirm("OK", true)?;
                Ok(false)
            }
        }
    }

    /// Show the auth callback screen until it redirects home.
    pub fn auth_callback(&self, query: &str, config: &AppConfig) {
        let mut screen = AuthCallbackScreen::new(config.delays);
        screen.mount(&CallbackParams::from_query(query), Utc::now());

        println!("Processing authentication...");
        println!("Receiving data from Valera wallet");
        while screen.phase(Utc::now()) == CallbackPhase::Processing {
            thread::sleep(POLL_INTERVAL);
        }

        println!("✓ Credential Received!");
        if let Some(received) = screen.received() {
            println!("  DID:          {}", received.did_label());
            println!("  Timestamp:    {}", received.timestamp_label());
            println!("  Received At:  {}", received.received_at_label());
            if let Some(credential) = &received.credential {
                if credential.is_structured() {
                    println!("  Type:         {}", credential.kind());
                    println!("  Name:         {}", credential.name().as_deref().unwrap_or("N/A"));
                    println!(
                        "  Birth Date:   {}",
                        credential.birth_date().as_deref().unwrap_or("N/A")
                    );
                    let age = received
                        .age()
                        .map_or_else(|| "N/A".to_string(), |a| format!("{a} years"));
                    println!("  Age:          {age}");
                }
                println!("{}", credential.pretty());
            }
        }

        println!("Redirecting to home...");
        while screen.phase(Utc::now()) != CallbackPhase::RedirectHome {
            thread::sleep(POLL_INTERVAL);
        }
    }

    /// Follow a deep link to its screen.
    pub fn open_link(
        &self,
        route: &Route,
        catalog: &[ListedSurvey],
        config: &AppConfig,
    ) -> Result<(), WizardError> {
        match route {
            Route::AuthCallback { query } => {
                self.auth_callback(query, config);
                Ok(())
            }
            Route::Explore { survey_id } => self.explore(catalog, Some(survey_id.as_str())),
        }
    }
}
