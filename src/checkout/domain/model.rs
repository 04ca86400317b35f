use crate::core::domain::BookId;

// BorrowerEntity is the session's single borrower. `borrowed` holds catalog ids in
// checkout order; the books themselves stay in the catalog.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct BorrowerEntity {
    pub name: String,
    pub borrower_id: String,
    pub borrowed: Vec<BookId>,
}

impl BorrowerEntity {
    pub fn new(name: &str, borrower_id: &str) -> Self {
        Self {
            name: name.to_string(),
            borrower_id: borrower_id.to_string(),
            borrowed: vec![],
        }
    }

    pub fn holds(&self, book_id: BookId) -> bool {
        self.borrowed.contains(&book_id)
    }
}
