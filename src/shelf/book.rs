//! # Books
//!
//! The shelf's item type. A book's identity is its `id`: two `Book` values
//! with the same id are equal no matter what else differs, which is what lets
//! a drag payload captured before a move still find the live copy after it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ListId;

pub const READING_LIST: &str = "reading";
pub const FINISHED_LIST: &str = "finished";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Reading,
    Finished,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Reading, BookStatus::Finished];

    /// Maps a target list id to a status. Anything that isn't the reading
    /// list counts as finished.
    pub fn from_list_id(list: &ListId) -> Self {
        if list.as_str() == READING_LIST {
            BookStatus::Reading
        } else {
            BookStatus::Finished
        }
    }

    pub fn list_id(self) -> ListId {
        match self {
            BookStatus::Reading => ListId::new(READING_LIST),
            BookStatus::Finished => ListId::new(FINISHED_LIST),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookStatus::Reading => "Reading now",
            BookStatus::Finished => "Finished",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub status: BookStatus,
    /// Display position within its status list, reassigned after every move.
    pub sort_index: i64,
    #[serde(default)]
    pub pages_read: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl Book {
    pub fn new(title: impl Into<String>, status: BookStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: None,
            status,
            sort_index: 0,
            pages_read: 0,
            total_pages: 0,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_pages(mut self, pages_read: u32, total_pages: u32) -> Self {
        self.pages_read = pages_read.min(total_pages);
        self.total_pages = total_pages;
        self
    }

    /// Reading progress as a whole percentage, e.g. `"42%"`.
    pub fn progress_string(&self) -> String {
        if self.total_pages == 0 {
            return "0%".to_string();
        }
        let percent = (u64::from(self.pages_read) * 100 / u64::from(self.total_pages)).min(100);
        format!("{percent}%")
    }

    /// Title, or a placeholder for books saved without one.
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() { "Untitled" } else { title }
    }
}
