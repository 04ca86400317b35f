pub mod service;

use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, BookPatch};
use crate::core::domain::BookId;
use crate::core::library::LibraryResult;

pub(crate) trait CatalogService {
    fn add_book(&mut self, title: &str, author: &str, year: &str) -> LibraryResult<BookDto>;
    fn update_book(&mut self, search_title: &str, patch: &BookPatch) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, id: BookId) -> LibraryResult<BookDto>;
    fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto>;
    fn all_books(&self) -> Vec<BookDto>;
    fn search_books(&self, keyword: &str) -> Vec<BookDto>;
    fn filter_recent_books(&self) -> Vec<BookDto>;
    fn sort_by_year(&self, ascending: bool) -> Vec<BookDto>;
    fn sort_by_title(&self, ascending: bool) -> Vec<BookDto>;
    fn summary(&self) -> CatalogSummary;
    // only the checkout ledger flips availability
    fn set_availability(&mut self, id: BookId, is_available: bool) -> LibraryResult<BookDto>;
}

/// Book counts shown alongside any rendered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}
