use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::app::Result;
use crate::domain::Page;
use crate::store::Store;

/// Flat-file JSON store: one file, overwritten wholesale on every save.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Store for JsonStore {
    /// Serialize to a sibling temp file, then rename over the target, so
    /// an interrupted save never leaves a half-written collection behind.
    fn save(&self, pages: &[Page]) -> Result<()> {
        let data = serde_json::to_vec_pretty(pages)?;
        let tmp = self.temp_path();
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// An absent file means a fresh install; an undecodable one is logged
    /// and treated the same way rather than surfaced to the user.
    fn load(&self) -> Result<Vec<Page>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&data) {
            Ok(pages) => Ok(pages),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding undecodable page store");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, paragraphs: &[&str]) -> Page {
        Page::new(
            title.into(),
            paragraphs.iter().map(|p| p.to_string()).collect(),
        )
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("pages.json")).unwrap();

        let pages = vec![page("A", &["x", "y"]), page("B", &[])];
        store.save(&pages).unwrap();

        assert_eq!(store.load().unwrap(), pages);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("pages.json")).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(&path, b"not json at all {{{").unwrap();

        let store = JsonStore::new(&path).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("pages.json")).unwrap();

        store.save(&[page("A", &["x"]), page("B", &["y"])]).unwrap();
        store.save(&[page("B", &["y"])]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "B");
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("pages.json")).unwrap();
        store.save(&[page("A", &["x"])]).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["pages.json"]);
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nested/deeper/pages.json")).unwrap();
        store.save(&[page("A", &[])]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
