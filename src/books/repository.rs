pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub(crate) trait BookRepository: Repository<BookEntity> {
    // first book, in insertion order, whose title equals `title` ignoring case
    fn find_first_by_title_ignore_case(&self, title: &str) -> Option<&BookEntity>;
}
