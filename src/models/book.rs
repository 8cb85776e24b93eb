//! Book (catalog entry) model.
//!
//! One record is one physical copy; there is no multi-copy inventory. The
//! serde field names are the catalog file's wire names and must not change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Opaque identifier assigned by the operator, never generated.
    #[serde(rename = "book_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    /// True while the copy is on the shelf.
    #[serde(rename = "is_available")]
    pub available: bool,
    /// Cumulative borrow count, never reset by returns.
    pub times_borrowed: u32,
}

impl Book {
    /// Create a new book, on the shelf and never borrowed.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            available: true,
            times_borrowed: 0,
        }
    }

    /// Shelf status label used in listings
    pub fn status(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Borrowed"
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ID: {}] '{}' by {} ({})",
            self.id,
            self.title,
            self.author,
            self.status()
        )
    }
}
