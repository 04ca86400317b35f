use crate::books::domain::Book;
use crate::core::domain::{BookId, Identifiable};

// BookEntity is the single stored record of a book; the borrower ledger refers to it
// by `book_id` only.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BookEntity {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_available: bool,
}

impl BookEntity {
    pub fn new(book_id: BookId, title: &str, author: &str, year: i32) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            is_available: true,
        }
    }

    pub fn matches_keyword(&self, lower_keyword: &str) -> bool {
        self.title.to_lowercase().contains(lower_keyword) ||
            self.author.to_lowercase().contains(lower_keyword)
    }
}

impl Identifiable for BookEntity {
    type Id = BookId;

    fn id(&self) -> BookId {
        self.book_id
    }
}

impl Book for BookEntity {
    fn is_available(&self) -> bool {
        self.is_available
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::library::BookStatus;

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new(7, "Educated", "Tara Westover", 2018);
        assert_eq!(7, book.book_id);
        assert_eq!("Educated", book.title.as_str());
        assert_eq!(2018, book.year);
        assert_eq!(BookStatus::Available, book.status());
    }

    #[test]
    fn test_should_match_keyword_on_title_or_author() {
        let book = BookEntity::new(1, "1984", "George Orwell", 1949);
        assert!(book.matches_keyword("orwell"));
        assert!(book.matches_keyword("98"));
        assert!(!book.matches_keyword("huxley"));
    }
}
