use std::collections::HashSet;

use tracing::{debug, warn};
use url::Url;

use crate::app::{AppContext, Result};
use crate::domain::Page;
use crate::extractor::Extraction;
use crate::store::Store;

/// Outcome of one fetch-and-paginate walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Pages fetched and parsed, whether or not they were stored.
    pub pages_visited: usize,
    /// Pages that survived the dedup check and were persisted.
    pub pages_added: usize,
    /// True when the walk hit the depth cutoff or a next-link cycle
    /// instead of running off the end of the chain.
    pub limit_reached: bool,
}

/// Fetch `url`, store what it yields, and keep following "next page"
/// links until the chain ends.
///
/// Each step strictly follows completion of the previous fetch+parse;
/// there is no parallelism within a walk. The walk keeps a visited-URL
/// set and honors `config.max_depth`, so a chain that links back to an
/// earlier page terminates with `limit_reached` set instead of looping.
///
/// A failure on the first page surfaces as an error; failures further
/// down the chain are logged and end the walk, returning what was
/// gathered so far.
pub async fn extract(ctx: &AppContext, url: &str) -> Result<WalkSummary> {
    let mut current = Url::parse(url)?;
    let mut visited: HashSet<Url> = HashSet::new();
    let mut summary = WalkSummary::default();

    loop {
        if summary.pages_visited >= ctx.config.max_depth {
            warn!(url = %current, depth = ctx.config.max_depth, "Pagination depth limit reached");
            summary.limit_reached = true;
            break;
        }
        if !visited.insert(current.clone()) {
            warn!(url = %current, "Next link points back to a visited page");
            summary.limit_reached = true;
            break;
        }

        let extraction = match step(ctx, &current).await {
            Ok(extraction) => extraction,
            Err(e) if summary.pages_visited == 0 => return Err(e),
            Err(e) => {
                warn!(url = %current, error = %e, "Abandoning pagination chain");
                break;
            }
        };
        summary.pages_visited += 1;

        let Extraction {
            title,
            paragraphs,
            next_link,
        } = extraction;

        // Dedup, append, and persist under one lock so concurrent walks
        // cannot interleave their read-modify-write of the collection.
        {
            let mut library = ctx.library()?;
            if library.insert(Page::new(title, paragraphs), current.as_str()) {
                if let Err(e) = ctx.store.save(library.pages()) {
                    warn!(error = %e, "Failed to persist page collection");
                    break;
                }
                summary.pages_added += 1;
            } else {
                debug!(url = %current, "Title already stored, skipping");
            }
        }

        let Some(href) = next_link else {
            break;
        };
        match current.join(&href) {
            Ok(next) => {
                debug!(from = %current, to = %next, "Following next link");
                current = next;
            }
            Err(e) => {
                warn!(href = %href, error = %e, "Ignoring malformed next link");
                break;
            }
        }
    }

    Ok(summary)
}

async fn step(ctx: &AppContext, url: &Url) -> Result<Extraction> {
    let body = ctx.fetcher.fetch(url).await?;
    ctx.extractor.extract(&body)
}
