//! Business logic for the catalog store

pub mod catalog;
pub mod loans;
pub mod stats;

pub use catalog::Library;
pub use stats::MostBorrowedReport;
