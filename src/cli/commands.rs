use tracing::info;

use crate::app::{AppContext, LecternError, Result};
use crate::pipeline;
use crate::store::Store;

pub async fn fetch(ctx: &AppContext, url: &str) -> Result<()> {
    let summary = pipeline::extract(ctx, url).await?;

    println!(
        "Visited {} page(s), stored {} new",
        summary.pages_visited, summary.pages_added
    );
    if summary.limit_reached {
        println!("Stopped at the pagination limit; the chain may continue beyond it.");
    }

    let library = ctx.library()?;
    for entry in library.recent().iter().take(summary.pages_added) {
        println!("  + {}", entry.title);
    }

    Ok(())
}

pub fn list_pages(ctx: &AppContext) -> Result<()> {
    let mut library = ctx.library()?;

    if library.pages().is_empty() {
        println!("No stored pages");
        return Ok(());
    }

    for (index, page) in library.pages().iter().enumerate() {
        println!(
            "{:>3}  {} ({} paragraphs)",
            index,
            page.display_title(),
            page.paragraphs.len()
        );
    }

    // Viewing the list clears the new-pages badge.
    library.reset_new_page_count();
    Ok(())
}

pub fn list_recent(ctx: &AppContext) -> Result<()> {
    let library = ctx.library()?;

    if library.recent().is_empty() {
        println!("No recent searches");
        return Ok(());
    }

    for entry in library.recent() {
        println!(
            "{}  {}  {}",
            entry.searched_at.format("%Y-%m-%d %H:%M:%S"),
            entry.title,
            entry.url
        );
    }

    Ok(())
}

pub fn show(ctx: &AppContext, index: usize) -> Result<()> {
    let library = ctx.library()?;
    let page = library
        .pages()
        .get(index)
        .ok_or(LecternError::PageNotFound(index))?;

    println!("{}", page.display_title());
    for paragraph in &page.paragraphs {
        println!();
        println!("{}", paragraph);
    }

    Ok(())
}

/// Print the share/speech payload to stdout so it can be piped into a
/// share target or a text-to-speech service. Playback itself is the
/// collaborator's business; we only hand over the text and the
/// configured rate.
pub fn share(ctx: &AppContext, index: usize) -> Result<()> {
    let library = ctx.library()?;
    let page = library
        .pages()
        .get(index)
        .ok_or(LecternError::PageNotFound(index))?;

    info!(speech_rate = ctx.config.speech_rate, "Emitting share payload");
    println!("{}", page.share_text());

    Ok(())
}

pub fn delete(ctx: &AppContext, index: usize) -> Result<()> {
    let mut library = ctx.library()?;
    let page = library
        .remove(index)
        .ok_or(LecternError::PageNotFound(index))?;
    ctx.store.save(library.pages())?;

    println!("Deleted: {}", page.display_title());
    Ok(())
}
