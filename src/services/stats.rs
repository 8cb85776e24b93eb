//! Catalog statistics

use std::fmt;

use crate::models::Book;
use crate::services::Library;

/// Result of the most-borrowed query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MostBorrowedReport {
    /// The catalog has no books at all
    EmptyCatalog,
    /// Books exist but none has ever been borrowed
    NeverBorrowed,
    /// The most-borrowed book, first-inserted among ties
    Popular { title: String, times_borrowed: u32 },
}

impl fmt::Display for MostBorrowedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MostBorrowedReport::EmptyCatalog => write!(f, "No books in library."),
            MostBorrowedReport::NeverBorrowed => write!(f, "No books have been borrowed yet."),
            MostBorrowedReport::Popular {
                title,
                times_borrowed,
            } => write!(f, "Most Popular: '{}' (Borrowed {} times)", title, times_borrowed),
        }
    }
}

impl Library {
    /// The book with the highest cumulative borrow count.
    ///
    /// Returns come out of the count, never off it, so this is a historical
    /// popularity measure rather than a current-loans one.
    pub fn most_borrowed(&self) -> MostBorrowedReport {
        let mut top: Option<&Book> = None;
        for book in self.books() {
            // Strictly greater, so the earliest entry wins ties.
            if top.is_none_or(|t| book.times_borrowed > t.times_borrowed) {
                top = Some(book);
            }
        }

        match top {
            None => MostBorrowedReport::EmptyCatalog,
            Some(book) if book.times_borrowed == 0 => MostBorrowedReport::NeverBorrowed,
            Some(book) => MostBorrowedReport::Popular {
                title: book.title.clone(),
                times_borrowed: book.times_borrowed,
            },
        }
    }
}
