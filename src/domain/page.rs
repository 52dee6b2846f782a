use serde::{Deserialize, Serialize};

/// A stored unit of extracted content. Immutable once created.
///
/// A page keeps no record of the URL it came from; the title is its
/// identity (see [`Library::insert`](crate::domain::Library::insert)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Page {
    pub fn new(title: String, paragraphs: Vec<String>) -> Self {
        Self { title, paragraphs }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }

    /// Plain-text payload handed to share and speech collaborators:
    /// the title followed by the paragraphs, separated by blank lines.
    pub fn share_text(&self) -> String {
        let mut out = String::with_capacity(
            self.title.len() + self.paragraphs.iter().map(|p| p.len() + 2).sum::<usize>(),
        );
        out.push_str(&self.title);
        for paragraph in &self.paragraphs {
            out.push_str("\n\n");
            out.push_str(paragraph);
        }
        out
    }
}
