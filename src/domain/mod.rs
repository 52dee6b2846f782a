pub mod library;
pub mod page;
pub mod search;

pub use library::Library;
pub use page::Page;
pub use search::SearchEntry;
