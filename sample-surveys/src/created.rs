use survey_draft_types::{CreatedStatus, CreatedSurvey};

/// Surveys the sample user created: one live, one draft, one finished.
pub fn created() -> Vec<CreatedSurvey> {
    let mut live = CreatedSurvey::new(
        "c1",
        "Neighbourhood Park Usage",
        "Community",
        CreatedStatus::Active,
    );
    live.reward_per_voter = Some(0.5);
    live.ends_at = Some("Mar 31, 2026".to_string());
    live.responses_current = Some(88.0);
    live.responses_target = Some(200.0);
    live.spent = Some(44.0);

    let mut draft = CreatedSurvey::new("c2", "Four-Day Work Week", "Productivity", CreatedStatus::Draft);
    draft.reward_per_voter = Some(1.0);
    draft.responses_target = Some(150.0);
    draft.budget = Some(157.5);

    let mut finished = CreatedSurvey::new(
        "c3",
        "Campus Food Options",
        "Lifestyle",
        CreatedStatus::Results,
    );
    finished.reward_per_voter = Some(0.25);
    finished.ends_at = Some("Dec 15, 2025".to_string());
    finished.responses_current = Some(120.0);
    finished.responses_target = Some(120.0);
    finished.total_spent = Some(31.5);

    vec![live, draft, finished]
}
