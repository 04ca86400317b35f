use serde::{Deserialize, Serialize};

/// Identifier assigned to a book by the catalog; never reused within a session.
pub type BookId = u64;

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable {
    type Id: Copy + PartialEq;
    fn id(&self) -> Self::Id;
}

// Configuration abstracts config options for the catalog session
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub recent_after_year: i32,
    pub borrower_name: String,
    pub borrower_id: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            recent_after_year: 2015,
            borrower_name: "Sample Borrower".to_string(),
            borrower_id: "B001".to_string(),
        }
    }

    pub fn with_borrower(mut self, name: &str, borrower_id: &str) -> Self {
        self.borrower_name = name.to_string();
        self.borrower_id = borrower_id.to_string();
        self
    }
}
