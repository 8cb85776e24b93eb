//! Borrow and return transactions.
//!
//! Both operations resolve member and book before touching any state, so a
//! failed transaction leaves the catalog exactly as it was.

use crate::error::{AppError, AppResult};
use crate::models::{LoanReceipt, ReturnReceipt};
use crate::services::Library;

impl Library {
    /// Borrow a book for a member.
    ///
    /// The book must be on the shelf; a book already out is rejected without
    /// state change. On success the copy is marked out, its borrow counter
    /// is incremented and the loan is recorded on the member.
    pub fn borrow_book(&mut self, member_id: &str, book_id: &str) -> AppResult<LoanReceipt> {
        let member_index = self.member_index(member_id)?;
        let book_index = self.book_index(book_id)?;

        let book = self.book_mut(book_index);
        if !book.available {
            return Err(AppError::Unavailable(format!(
                "'{}' is currently borrowed",
                book.title
            )));
        }
        book.available = false;
        book.times_borrowed += 1;
        let book_title = book.title.clone();

        let member = self.member_mut(member_index);
        member.borrowed_books.push(book_id.to_string());
        let member_name = member.name.clone();

        self.persist()?;
        tracing::info!("Book {} borrowed by member {}", book_id, member_id);

        Ok(LoanReceipt {
            book_id: book_id.to_string(),
            book_title,
            member_id: member_id.to_string(),
            member_name,
        })
    }

    /// Return a borrowed book.
    ///
    /// The member must currently hold the book; only the holding member can
    /// put it back on the shelf.
    pub fn return_book(&mut self, member_id: &str, book_id: &str) -> AppResult<ReturnReceipt> {
        let member_index = self.member_index(member_id)?;
        let book_index = self.book_index(book_id)?;

        let member = self.member_mut(member_index);
        let loan_position = member
            .borrowed_books
            .iter()
            .position(|id| id == book_id)
            .ok_or_else(|| {
                AppError::InvalidLoan(format!(
                    "member {} does not hold book {}",
                    member_id, book_id
                ))
            })?;
        member.borrowed_books.remove(loan_position);

        let book = self.book_mut(book_index);
        book.available = true;
        let book_title = book.title.clone();

        self.persist()?;
        tracing::info!("Book {} returned by member {}", book_id, member_id);

        Ok(ReturnReceipt {
            book_id: book_id.to_string(),
            book_title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::CatalogRepository;
    use tempfile::TempDir;

    fn library_with_fixtures(dir: &TempDir) -> Library {
        let mut library =
            Library::open(CatalogRepository::new(dir.path().join("library_data.json")));
        library.add_book("B1", "Dune", "Herbert").unwrap();
        library.add_book("B2", "Emma", "Austen").unwrap();
        library.register_member("M1", "Alice").unwrap();
        library.register_member("M2", "Bob").unwrap();
        library
    }

    #[test]
    fn test_borrow_marks_book_out_and_records_loan() {
        let dir = TempDir::new().unwrap();
        let mut library = library_with_fixtures(&dir);

        let receipt = library.borrow_book("M1", "B1").unwrap();
        assert_eq!(receipt.book_title, "Dune");
        assert_eq!(receipt.member_name, "Alice");

        let book = library.find_book("B1").unwrap();
        assert!(!book.available);
        assert_eq!(book.times_borrowed, 1);
        assert_eq!(library.find_member("M1").unwrap().borrowed_books, vec!["B1"]);
    }

    #[test]
    fn test_borrow_unknown_member_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut library = library_with_fixtures(&dir);

        let err = library.borrow_book("M9", "B1").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let book = library.find_book("B1").unwrap();
        assert!(book.available);
        assert_eq!(book.times_borrowed, 0);
    }

    #[test]
    fn test_borrow_unknown_book_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut library = library_with_fixtures(&dir);

        let err = library.borrow_book("M1", "B9").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(library.find_member("M1").unwrap().borrowed_books.is_empty());
    }

    #[test]
    fn test_borrowed_book_is_unavailable_to_everyone() {
        let dir = TempDir::new().unwrap();
        let mut library = library_with_fixtures(&dir);

        library.borrow_book("M1", "B1").unwrap();
        let err = library.borrow_book("M2", "B1").unwrap_err();
        assert!(matches!(err, AppError::Unavailable(_)));

        // Counter unchanged by the rejected attempt.
        assert_eq!(library.find_book("B1").unwrap().times_borrowed, 1);
        assert!(library.find_member("M2").unwrap().borrowed_books.is_empty());
    }

    #[test]
    fn test_borrow_then_return_restores_prior_state() {
        let dir = TempDir::new().unwrap();
        let mut library = library_with_fixtures(&dir);

        library.borrow_book("M1", "B1").unwrap();
        let receipt = library.return_book("M1", "B1").unwrap();
        assert_eq!(receipt.book_title, "Dune");

        let book = library.find_book("B1").unwrap();
        assert!(book.available);
        // The popularity counter is historical and survives the return.
        assert_eq!(book.times_borrowed, 1);
        assert!(library.find_member("M1").unwrap().borrowed_books.is_empty());
    }

    #[test]
    fn test_return_by_non_holder_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut library = library_with_fixtures(&dir);

        library.borrow_book("M1", "B1").unwrap();
        let err = library.return_book("M2", "B1").unwrap_err();
        assert!(matches!(err, AppError::InvalidLoan(_)));

        assert!(!library.find_book("B1").unwrap().available);
        assert_eq!(library.find_member("M1").unwrap().borrowed_books, vec!["B1"]);
    }

    #[test]
    fn test_return_never_borrowed_book_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut library = library_with_fixtures(&dir);

        let err = library.return_book("M1", "B1").unwrap_err();
        assert!(matches!(err, AppError::InvalidLoan(_)));
        assert!(library.find_book("B1").unwrap().available);
    }

    #[test]
    fn test_return_removes_only_the_returned_loan() {
        let dir = TempDir::new().unwrap();
        let mut library = library_with_fixtures(&dir);

        library.borrow_book("M1", "B1").unwrap();
        library.borrow_book("M1", "B2").unwrap();
        library.return_book("M1", "B1").unwrap();

        assert_eq!(library.find_member("M1").unwrap().borrowed_books, vec!["B2"]);
        assert!(!library.find_book("B2").unwrap().available);
    }
}
