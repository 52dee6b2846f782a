use scraper::{ElementRef, Html, Selector};

use crate::app::{LecternError, Result};

/// The result of running the extractor over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Text of the `<title>` element; empty when the document has none.
    pub title: String,
    /// Text of every `<p>` element, in document order.
    pub paragraphs: Vec<String>,
    /// `href` of the "next page" anchor, verbatim. Resolution against the
    /// page URL is the caller's job.
    pub next_link: Option<String>,
}

/// CSS-selector based extractor for title, body paragraphs, and the
/// pagination link.
pub struct Extractor {
    title: Selector,
    paragraph: Selector,
    next_link: Selector,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            title: compile("title")?,
            paragraph: compile("p")?,
            next_link: compile("div.nav-next > a.next_page")?,
        })
    }

    pub fn extract(&self, html: &str) -> Result<Extraction> {
        let doc = Html::parse_document(html);

        let title = doc
            .select(&self.title)
            .next()
            .map(collapsed_text)
            .unwrap_or_default();

        let paragraphs: Vec<String> = doc.select(&self.paragraph).map(collapsed_text).collect();

        let next_link = doc
            .select(&self.next_link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string)
            .filter(|href| !href.is_empty());

        Ok(Extraction {
            title,
            paragraphs,
            next_link,
        })
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| LecternError::Parse(e.to_string()))
}

/// Flatten an element's text nodes and collapse runs of whitespace,
/// the way a browser renders inline text.
fn collapsed_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
