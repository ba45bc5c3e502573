use survey_draft_types::ParticipatedSurvey;

fn voted(id: &str, title: &str, category: &str, date: &str, reward: Option<f64>) -> ParticipatedSurvey {
    ParticipatedSurvey {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        reward,
    }
}

/// Surveys the sample user has voted in. Two were past their paid cap.
pub fn participated() -> Vec<ParticipatedSurvey> {
    vec![
        voted("p1", "Fitness App Usage Habits", "Health", "Feb 2, 2026", Some(2.0)),
        voted("p2", "City Cycling Infrastructure", "Community", "Jan 28, 2026", None),
        voted("p3", "Personal Banking Mobile UX", "Finance", "Jan 19, 2026", Some(2.75)),
        voted("p4", "Local Election Priorities", "Politics", "Jan 7, 2026", Some(0.0)),
    ]
}
