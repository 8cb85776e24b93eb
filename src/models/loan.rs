//! Loan transaction outcome types.
//!
//! The store returns these so the surface layer can render its own success
//! messages without re-reading catalog state.

/// Outcome of a successful borrow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReceipt {
    pub book_id: String,
    pub book_title: String,
    pub member_id: String,
    pub member_name: String,
}

/// Outcome of a successful return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    pub book_id: String,
    pub book_title: String,
}
