use anyhow::Context;
use survey_draft::{AppConfig, WalletLauncher, route};
use survey_draft_dialoguer::{DialoguerWizard, SystemOpener, WizardError};

const MENU: [&str; 6] = [
    "Create a survey",
    "Explore surveys",
    "My surveys",
    "Verify age with wallet",
    "Open a deep link",
    "Quit",
];

fn run(wizard: &DialoguerWizard, config: &AppConfig) -> Result<(), WizardError> {
    let catalog = sample_surveys::explore_catalog();
    let launcher = WalletLauncher::new(SystemOpener);

    loop {
        match wizard.select("survey-wizard", &MENU, 0)? {
            0 => {
                let draft = wizard.create_survey(config.platform)?;
                tracing::info!(name = %draft.name, "survey published");
                match serde_json::to_string_pretty(&draft) {
                    Ok(json) => println!("{json}"),
                    Err(e) => tracing::warn!(error = %e, "could not render draft"),
                }
            }
            1 => wizard.explore(&catalog, None)?,
            2 => wizard.history(&sample_surveys::participated(), &sample_surveys::created()),
            3 => {
                wizard.request_credential(&launcher, config)?;
            }
            4 => {
                let url = wizard.text("Deep link", "")?;
                match route(url.trim()) {
                    Some(target) => wizard.open_link(&target, &catalog, config)?,
                    None => println!("Nothing to open for that link."),
                }
            }
            _ => return Ok(()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().context("reading configuration")?;
    tracing::info!(platform = ?config.platform, "starting survey wizard");

    match run(&DialoguerWizard::new(), &config) {
        Err(WizardError::Cancelled) => {
            println!("Cancelled.");
            Ok(())
        }
        other => other.map_err(Into::into),
    }
}
