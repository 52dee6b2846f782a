pub mod json;

use crate::app::Result;
use crate::domain::Page;

pub use json::JsonStore;

/// Persistence for the page collection. The collection is small and is
/// written wholesale on every mutation; there is no incremental path.
pub trait Store {
    fn save(&self, pages: &[Page]) -> Result<()>;
    fn load(&self) -> Result<Vec<Page>>;
}
