use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::app::error::{LecternError, Result};
use crate::config::Config;
use crate::domain::Library;
use crate::extractor::Extractor;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::store::{JsonStore, Store};

/// Wires together the store, fetcher, extractor, and the single
/// lock-guarded [`Library`] that owns all mutable reading state.
pub struct AppContext {
    pub config: Config,
    pub store: Arc<JsonStore>,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub extractor: Extractor,
    library: Mutex<Library>,
}

impl AppContext {
    pub fn new(data_path: Option<PathBuf>) -> Result<Self> {
        let config = Config::load().map_err(|e| LecternError::Config(e.to_string()))?;
        Self::with_config(config, data_path, Arc::new(HttpFetcher::new()))
    }

    pub fn with_config(
        config: Config,
        data_path: Option<PathBuf>,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
    ) -> Result<Self> {
        let data_path = match data_path {
            Some(p) => p,
            None => Self::default_data_path()?,
        };

        let store = Arc::new(JsonStore::new(&data_path)?);
        let library = Mutex::new(Library::from_pages(store.load()?));
        let extractor = Extractor::new()?;

        Ok(Self {
            config,
            store,
            fetcher,
            extractor,
            library,
        })
    }

    /// Lock the library. Concurrent fetch chains serialize their
    /// read-modify-write of the page collection here.
    pub fn library(&self) -> Result<MutexGuard<'_, Library>> {
        self.library
            .lock()
            .map_err(|_| LecternError::Other("library lock poisoned".into()))
    }

    fn default_data_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| LecternError::Config("Could not find data directory".into()))?;
        Ok(data_dir.join("lectern").join("pages.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Page;

    fn test_context(path: PathBuf) -> AppContext {
        AppContext::with_config(Config::default(), Some(path), Arc::new(HttpFetcher::new()))
            .unwrap()
    }

    #[test]
    fn test_fresh_context_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path().join("pages.json"));
        assert!(ctx.library().unwrap().pages().is_empty());
    }

    #[test]
    fn test_context_loads_persisted_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.json");

        let store = JsonStore::new(&path).unwrap();
        store
            .save(&[Page::new("A".into(), vec!["x".into()])])
            .unwrap();

        let ctx = test_context(path);
        let library = ctx.library().unwrap();
        assert_eq!(library.pages().len(), 1);
        assert_eq!(library.pages()[0].title, "A");
        // Persisted pages are not "new" and have no search history.
        assert_eq!(library.new_page_count(), 0);
        assert!(library.recent().is_empty());
    }
}
