use chrono::{DateTime, Utc};

/// An entry in the recent-search log: the URL that was fetched and the
/// title it produced. Held in memory only; not persisted across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub url: String,
    pub title: String,
    pub searched_at: DateTime<Utc>,
}

impl SearchEntry {
    pub fn new(url: String, title: String) -> Self {
        Self {
            url,
            title,
            searched_at: Utc::now(),
        }
    }
}
