//! Member model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Opaque identifier assigned by the operator, never generated.
    #[serde(rename = "member_id")]
    pub id: String,
    pub name: String,
    /// Ids of the books this member currently holds, in borrow order.
    pub borrowed_books: Vec<String>,
}

impl Member {
    /// Register a new member with no loans
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            borrowed_books: Vec::new(),
        }
    }

    /// Whether this member currently holds the given book
    pub fn holds(&self, book_id: &str) -> bool {
        self.borrowed_books.iter().any(|id| id == book_id)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ID: {}] {} - Books borrowed: {}",
            self.id,
            self.name,
            self.borrowed_books.len()
        )
    }
}
