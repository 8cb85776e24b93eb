//! Catalog file repository.
//!
//! The whole catalog is one pretty-printed JSON document at a configured
//! path. Saves overwrite the file in full; there is no atomic rename, so a
//! crash mid-write can truncate it. Loads distinguish a missing file
//! (expected on first run, silent) from a present-but-unreadable one
//! (warn and start empty; the file is left alone until the next save).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{Book, Member};

/// The persisted catalog document.
///
/// Both keys are required; a document missing either fails to load as a
/// whole, as does a record missing one of its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogData {
    pub books: Vec<Book>,
    pub members: Vec<Member>,
}

/// Borrowing view of the same document, so saves don't clone the catalog.
#[derive(Serialize)]
struct CatalogDataRef<'a> {
    books: &'a [Book],
    members: &'a [Member],
}

/// Repository for the JSON catalog file
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    data_file: PathBuf,
}

impl CatalogRepository {
    /// Create a repository backed by the given file path
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Path of the backing file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Load the catalog document.
    ///
    /// Never fails: a missing file yields an empty catalog silently, and an
    /// unreadable or unparseable one yields an empty catalog with a warning.
    pub fn load(&self) -> CatalogData {
        let raw = match fs::read_to_string(&self.data_file) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    "No catalog file at {}, starting with an empty catalog",
                    self.data_file.display()
                );
                return CatalogData::default();
            }
            Err(e) => {
                tracing::warn!(
                    "Could not read catalog file {}: {}; starting with an empty catalog",
                    self.data_file.display(),
                    e
                );
                return CatalogData::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    "Catalog file {} is not a valid catalog document: {}; starting with an empty catalog",
                    self.data_file.display(),
                    e
                );
                CatalogData::default()
            }
        }
    }

    /// Write the full catalog document, replacing the previous file.
    ///
    /// Unlike reads, write failures propagate: losing the only durable copy
    /// of the catalog is fatal for the session.
    pub fn save(&self, books: &[Book], members: &[Member]) -> AppResult<()> {
        let document = serde_json::to_string_pretty(&CatalogDataRef { books, members })?;
        fs::write(&self.data_file, document)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repository_in(dir: &TempDir) -> CatalogRepository {
        CatalogRepository::new(dir.path().join("library_data.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = repository_in(&dir);

        let data = repo.load();
        assert!(data.books.is_empty());
        assert!(data.members.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let repo = repository_in(&dir);

        let mut book = Book::new("B1", "Dune", "Herbert");
        book.available = false;
        book.times_borrowed = 3;
        let mut member = Member::new("M1", "Alice");
        member.borrowed_books.push("B1".to_string());

        repo.save(&[book.clone()], &[member.clone()]).unwrap();

        let data = repo.load();
        assert_eq!(data.books, vec![book]);
        assert_eq!(data.members, vec![member]);
    }

    #[test]
    fn test_load_corrupt_file_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let repo = repository_in(&dir);

        fs::write(repo.data_file(), "{ not json").unwrap();
        assert_eq!(repo.load(), CatalogData::default());

        // The file itself is untouched until the next save.
        assert_eq!(fs::read_to_string(repo.data_file()).unwrap(), "{ not json");
    }

    #[test]
    fn test_load_missing_required_key_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let repo = repository_in(&dir);

        fs::write(repo.data_file(), r#"{"books": []}"#).unwrap();
        assert_eq!(repo.load(), CatalogData::default());
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let dir = TempDir::new().unwrap();
        let repo = repository_in(&dir);

        repo.save(&[Book::new("B1", "Dune", "Herbert")], &[]).unwrap();
        repo.save(&[], &[]).unwrap();

        let data = repo.load();
        assert!(data.books.is_empty());
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let dir = TempDir::new().unwrap();
        let repo = CatalogRepository::new(dir.path().join("missing").join("library_data.json"));

        assert!(repo.save(&[], &[]).is_err());
    }
}
