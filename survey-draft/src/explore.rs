//! Searching, sorting and filtering the explore listing.

use std::cmp::Ordering;
use std::fmt;

use survey_draft_types::ListedSurvey;

/// The "show everything" category chip.
pub const ALL_CATEGORIES: &str = "All";

/// Category chips, in display order.
pub const CATEGORIES: [&str; 7] = [
    ALL_CATEGORIES,
    "Health",
    "Finance",
    "Tech",
    "Politics",
    "Lifestyle",
    "Productivity",
];

/// Listing order. Tapping the sort control cycles through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    RewardDesc,
    RewardAsc,
    NameAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [Self::RewardDesc, Self::RewardAsc, Self::NameAsc];

    pub fn next(self) -> Self {
        match self {
            Self::RewardDesc => Self::RewardAsc,
            Self::RewardAsc => Self::NameAsc,
            Self::NameAsc => Self::RewardDesc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RewardDesc => "Reward ↓",
            Self::RewardAsc => "Reward ↑",
            Self::NameAsc => "Name A-Z",
        }
    }

    fn compare(self, a: &ListedSurvey, b: &ListedSurvey) -> Ordering {
        match self {
            Self::RewardDesc => b.reward.total_cmp(&a.reward),
            Self::RewardAsc => a.reward.total_cmp(&b.reward),
            Self::NameAsc => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The selected category chips.
///
/// Starts empty, which shows everything, as does any selection containing
/// [`ALL_CATEGORIES`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySelection {
    selected: Vec<String>,
}

impl CategorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.iter().any(|c| c == category)
    }

    /// Tap a chip.
    ///
    /// "All" replaces the selection. Any other chip drops "All" and toggles;
    /// deselecting the last chip falls back to "All".
    pub fn select(&mut self, category: &str) {
        if category == ALL_CATEGORIES {
            self.selected = vec![ALL_CATEGORIES.to_string()];
            return;
        }

        if self.is_selected(category) {
            self.selected.retain(|c| c != category);
            if self.selected.is_empty() {
                self.selected.push(ALL_CATEGORIES.to_string());
            }
        } else {
            self.selected.retain(|c| c != ALL_CATEGORIES);
            self.selected.push(category.to_string());
        }
    }

    pub fn shows_all(&self) -> bool {
        self.selected.is_empty() || self.is_selected(ALL_CATEGORIES)
    }

    /// Whether a survey with `tags` passes the filter.
    pub fn matches(&self, tags: &[String]) -> bool {
        self.shows_all() || tags.iter().any(|tag| self.is_selected(tag))
    }
}

/// Search text, sort order and category filter of the explore screen.
#[derive(Debug, Clone, Default)]
pub struct ExploreQuery {
    search: String,
    sort: SortKey,
    categories: CategorySelection,
}

impl ExploreQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Advance to the next sort order and return it.
    pub fn next_sort(&mut self) -> SortKey {
        self.sort = self.sort.next();
        self.sort
    }

    pub fn categories(&self) -> &CategorySelection {
        &self.categories
    }

    pub fn select_category(&mut self, category: &str) {
        self.categories.select(category);
    }

    /// Surveys to show, in display order.
    pub fn apply<'a>(&self, surveys: &'a [ListedSurvey]) -> Vec<&'a ListedSurvey> {
        let needle = self.search.trim().to_lowercase();
        let mut shown: Vec<_> = surveys
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .collect();
        shown.sort_by(|a, b| self.sort.compare(a, b));
        shown.retain(|s| self.categories.matches(&s.tags));
        shown
    }
}

/// "1 survey found", "3 surveys found".
pub fn results_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} survey{plural} found")
}
