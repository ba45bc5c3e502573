use survey_draft_types::ListedSurvey;

#[allow(clippy::too_many_arguments)]
fn listed(
    id: &str,
    name: &str,
    reward: f64,
    description: &str,
    tags: &[&str],
    minutes: u32,
    (participants, participants_limit): (u32, u32),
    qualifies: bool,
) -> ListedSurvey {
    ListedSurvey {
        id: id.to_string(),
        name: name.to_string(),
        reward,
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        minutes,
        participants,
        participants_limit,
        qualifies,
    }
}

/// The published surveys shown on the explore screen.
pub fn explore_catalog() -> Vec<ListedSurvey> {
    vec![
        listed(
            "1",
            "Fitness App Usage Habits",
            2.0,
            "How often do you use fitness apps and what features matter most? 10-question study.",
            &["Health", "Lifestyle"],
            5,
            (88, 200),
            true,
        ),
        listed(
            "2",
            "Prescription Drug Affordability",
            3.5,
            "Share your experience with prescription costs and insurance coverage. Anonymous and secure.",
            &["Health", "Finance"],
            8,
            (203, 400),
            false,
        ),
        listed(
            "3",
            "Remote Work Tool Preferences",
            1.25,
            "Help us compare productivity tools used by distributed teams across different industries.",
            &["Tech", "Productivity"],
            6,
            (52, 180),
            true,
        ),
        listed(
            "4",
            "Personal Banking Mobile UX",
            2.75,
            "Tell us what works and what does not in your banking app experience over the last 3 months.",
            &["Finance", "Tech"],
            7,
            (119, 250),
            true,
        ),
    ]
}
