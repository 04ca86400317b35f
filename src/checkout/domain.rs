use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::model::BorrowerEntity;
use crate::core::domain::BookId;
use crate::core::library::LibraryResult;

pub mod model;
pub mod service;

pub(crate) trait CheckoutService {
    fn borrow(&mut self, catalog: &mut dyn CatalogService, book_id: BookId) -> LibraryResult<String>;
    fn return_book(&mut self, catalog: &mut dyn CatalogService, title: &str) -> LibraryResult<String>;
    fn list_borrowed_books(&self, catalog: &dyn CatalogService) -> String;
    fn borrowed_books(&self, catalog: &dyn CatalogService) -> Vec<BookDto>;
    // drops a book id from the borrowed list without touching the catalog
    fn release(&mut self, book_id: BookId) -> bool;
    fn borrower(&self) -> &BorrowerEntity;
}
