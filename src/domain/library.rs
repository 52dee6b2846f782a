use crate::domain::{Page, SearchEntry};

/// Owner of all mutable reading state: the page collection, the
/// recent-search log, and the new-pages counter used for badge display.
///
/// All mutation goes through this type so callers can guard it with a
/// single lock; see [`AppContext`](crate::app::AppContext).
#[derive(Debug, Default)]
pub struct Library {
    pages: Vec<Page>,
    recent: Vec<SearchEntry>,
    new_pages: usize,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a library from a previously persisted page collection.
    /// The recent-search log and counter start empty.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self {
            pages,
            recent: Vec::new(),
            new_pages: 0,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn recent(&self) -> &[SearchEntry] {
        &self.recent
    }

    pub fn new_page_count(&self) -> usize {
        self.new_pages
    }

    pub fn reset_new_page_count(&mut self) {
        self.new_pages = 0;
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.pages.iter().any(|p| p.title == title)
    }

    /// Insert a freshly extracted page.
    ///
    /// Identity is the title: if a page with the same title is already
    /// stored, nothing changes and `false` is returned, even when `url`
    /// differs from the one that produced the stored page. On success the
    /// page is appended, the counter is incremented, and a search entry
    /// is prepended to the recent log.
    pub fn insert(&mut self, page: Page, url: &str) -> bool {
        if self.contains_title(&page.title) {
            return false;
        }
        self.recent
            .insert(0, SearchEntry::new(url.to_string(), page.title.clone()));
        self.pages.push(page);
        self.new_pages += 1;
        true
    }

    /// Remove the page at `index` along with the first recent-search
    /// entry bearing the same title. Returns `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Page> {
        if index >= self.pages.len() {
            return None;
        }
        let page = self.pages.remove(index);
        if let Some(pos) = self.recent.iter().position(|e| e.title == page.title) {
            self.recent.remove(pos);
        }
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str) -> Page {
        Page::new(title.into(), vec!["body".into()])
    }

    #[test]
    fn test_insert_appends_and_records_search() {
        let mut lib = Library::new();
        assert!(lib.insert(page("A"), "https://example.com/a"));
        assert!(lib.insert(page("B"), "https://example.com/b"));

        assert_eq!(lib.pages().len(), 2);
        assert_eq!(lib.pages()[0].title, "A");
        // Most recent first.
        assert_eq!(lib.recent()[0].title, "B");
        assert_eq!(lib.recent()[1].url, "https://example.com/a");
        assert_eq!(lib.new_page_count(), 2);
    }

    #[test]
    fn test_insert_dedups_by_title() {
        let mut lib = Library::new();
        assert!(lib.insert(page("A"), "https://example.com/a"));
        assert!(!lib.insert(page("A"), "https://other.com/same-title"));

        assert_eq!(lib.pages().len(), 1);
        assert_eq!(lib.recent().len(), 1);
        assert_eq!(lib.new_page_count(), 1);
    }

    #[test]
    fn test_remove_drops_matching_search_entry() {
        let mut lib = Library::new();
        lib.insert(page("A"), "https://example.com/a");
        lib.insert(page("B"), "https://example.com/b");

        let removed = lib.remove(0).unwrap();
        assert_eq!(removed.title, "A");
        assert_eq!(lib.pages().len(), 1);
        assert_eq!(lib.pages()[0].title, "B");
        assert!(lib.recent().iter().all(|e| e.title != "A"));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut lib = Library::new();
        lib.insert(page("A"), "https://example.com/a");
        assert!(lib.remove(5).is_none());
        assert_eq!(lib.pages().len(), 1);
    }

    #[test]
    fn test_reset_counter() {
        let mut lib = Library::new();
        lib.insert(page("A"), "https://example.com/a");
        lib.reset_new_page_count();
        assert_eq!(lib.new_page_count(), 0);
    }

    #[test]
    fn test_from_pages_keeps_order_and_empty_log() {
        let lib = Library::from_pages(vec![page("A"), page("B")]);
        assert_eq!(lib.pages().len(), 2);
        assert!(lib.recent().is_empty());
        assert_eq!(lib.new_page_count(), 0);
    }
}
