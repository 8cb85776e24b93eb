//! Catalog store: book and member management.
//!
//! `Library` owns every record. All lookups are first-match linear scans in
//! insertion order, and every mutating operation writes the full catalog
//! back to the repository before returning.

use crate::error::{AppError, AppResult};
use crate::models::{Book, Member};
use crate::repository::CatalogRepository;

/// The catalog store
pub struct Library {
    repository: CatalogRepository,
    books: Vec<Book>,
    members: Vec<Member>,
}

impl Library {
    /// Open the catalog, hydrating from the data file when one exists
    pub fn open(repository: CatalogRepository) -> Self {
        let data = repository.load();
        Self {
            repository,
            books: data.books,
            members: data.members,
        }
    }

    /// Add a new book to the catalog.
    ///
    /// Ids must be unique: re-adding an existing id is rejected, since a
    /// second record behind a first-match lookup could never be reached.
    pub fn add_book(&mut self, id: &str, title: &str, author: &str) -> AppResult<()> {
        if self.find_book(id).is_some() {
            return Err(AppError::Conflict(format!(
                "a book with id {} already exists",
                id
            )));
        }
        self.books.push(Book::new(id, title, author));
        self.persist()?;
        tracing::info!("Added book {} ('{}')", id, title);
        Ok(())
    }

    /// Register a new member
    pub fn register_member(&mut self, id: &str, name: &str) -> AppResult<()> {
        if self.find_member(id).is_some() {
            return Err(AppError::Conflict(format!(
                "a member with id {} already exists",
                id
            )));
        }
        self.members.push(Member::new(id, name));
        self.persist()?;
        tracing::info!("Registered member {} ('{}')", id, name);
        Ok(())
    }

    /// First book with the given id, if any
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// First member with the given id, if any
    pub fn find_member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Human-readable summaries of every book, in insertion order
    pub fn list_books(&self) -> Vec<String> {
        self.books.iter().map(Book::to_string).collect()
    }

    /// Human-readable summaries of every member, in insertion order
    pub fn list_members(&self) -> Vec<String> {
        self.members.iter().map(Member::to_string).collect()
    }

    /// All books, in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All members, in insertion order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub(crate) fn book_index(&self, id: &str) -> AppResult<usize> {
        self.books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound(format!("no book with id {}", id)))
    }

    pub(crate) fn member_index(&self, id: &str) -> AppResult<usize> {
        self.members
            .iter()
            .position(|member| member.id == id)
            .ok_or_else(|| AppError::NotFound(format!("no member with id {}", id)))
    }

    pub(crate) fn book_mut(&mut self, index: usize) -> &mut Book {
        &mut self.books[index]
    }

    pub(crate) fn member_mut(&mut self, index: usize) -> &mut Member {
        &mut self.members[index]
    }

    /// Write the full catalog to the repository
    pub(crate) fn persist(&self) -> AppResult<()> {
        self.repository.save(&self.books, &self.members)
    }
}
