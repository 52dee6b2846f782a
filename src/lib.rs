//! # Lectern
//!
//! A paginated reading client: fetch a page, keep its title and body
//! paragraphs, follow "next page" links, and read the result back later.
//!
//! ## Architecture
//!
//! Lectern follows a linear pipeline:
//!
//! ```text
//! Fetcher → Extractor → Library → Store
//! ```
//!
//! - [`fetcher`]: HTTP client returning UTF-8 page bodies
//! - [`extractor`]: CSS-selector extraction of title, paragraphs, and the
//!   pagination link
//! - [`pipeline`]: the fetch-and-paginate walk with cycle and depth guards
//! - [`store`]: flat-file JSON persistence with atomic overwrite
//!
//! ## Quick Start
//!
//! ```bash
//! # Fetch a page (and its pagination chain)
//! lectern fetch https://example.com/story/part-1
//!
//! # List stored pages
//! lectern list
//!
//! # Read one back
//! lectern show 0
//!
//! # Pipe a page into a text-to-speech tool
//! lectern share 0 | say
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires together store, fetcher,
/// extractor, config, and the lock-guarded [`Library`](domain::Library).
pub mod app;

/// Command-line interface using clap.
///
/// Subcommands: `fetch <url>`, `list [--recent]`, `show <index>`,
/// `share <index>`, `delete <index>`.
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/lectern/config.toml`: dark mode, speech rate,
/// and the pagination depth cutoff.
pub mod config;

/// Core domain models.
///
/// - [`Page`](domain::Page): a stored unit of extracted content
/// - [`SearchEntry`](domain::SearchEntry): one recent-search record
/// - [`Library`](domain::Library): owner of all mutable reading state
pub mod domain;

/// HTML extraction.
///
/// [`Extractor`](extractor::Extractor) pulls the document title, every
/// paragraph in document order, and the `div.nav-next > a.next_page`
/// pagination link.
pub mod extractor;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for page fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// The fetch-and-paginate orchestrator.
///
/// [`pipeline::extract`] walks a pagination chain sequentially, dedups
/// by title, persists after every insert, and terminates cycles via a
/// visited-URL set and a depth cutoff.
pub mod pipeline;

/// Flat-file persistence.
///
/// - [`Store`](store::Store): trait defining save/load of the collection
/// - [`JsonStore`](store::JsonStore): single-file JSON implementation
pub mod store;
