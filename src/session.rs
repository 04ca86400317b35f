use crate::books::dto::{BookDto, BookPatch};
use crate::catalog::domain::{CatalogService, CatalogSummary};
use crate::catalog::factory::{create_catalog_service, seed_sample_books};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory::create_checkout_service;
use crate::core::domain::{BookId, Configuration};
use crate::core::library::LibraryResult;

/// One catalog and its single borrower. All mutation goes through this type, so the
/// borrower's list and each book's availability flag move together.
pub struct LibrarySession {
    config: Configuration,
    catalog: Box<dyn CatalogService>,
    ledger: Box<dyn CheckoutService>,
}

impl LibrarySession {
    pub fn new(config: &Configuration) -> Self {
        Self {
            config: config.clone(),
            catalog: create_catalog_service(config),
            ledger: create_checkout_service(config),
        }
    }

    pub fn with_sample_books(config: &Configuration) -> LibraryResult<Self> {
        let mut session = Self::new(config);
        seed_sample_books(session.catalog.as_mut())?;
        Ok(session)
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: &str) -> LibraryResult<BookDto> {
        self.catalog.add_book(title, author, year)
    }

    pub fn update_book(&mut self, search_title: &str, patch: &BookPatch) -> LibraryResult<BookDto> {
        self.catalog.update_book(search_title, patch)
    }

    /// Removes the book; if it was on loan it is dropped from the borrower's list too.
    pub fn delete_book(&mut self, id: BookId) -> LibraryResult<BookDto> {
        let deleted = self.catalog.remove_book(id)?;
        if self.ledger.release(id) {
            tracing::info!(book_id = id, "deleted book released from borrowed list");
        }
        Ok(deleted)
    }

    pub fn get_book(&self, id: BookId) -> LibraryResult<BookDto> {
        self.catalog.find_book_by_id(id)
    }

    pub fn books(&self) -> Vec<BookDto> {
        self.catalog.all_books()
    }

    pub fn search_books(&self, keyword: &str) -> Vec<BookDto> {
        self.catalog.search_books(keyword)
    }

    pub fn filter_recent_books(&self) -> Vec<BookDto> {
        self.catalog.filter_recent_books()
    }

    pub fn sort_by_year(&self, ascending: bool) -> Vec<BookDto> {
        self.catalog.sort_by_year(ascending)
    }

    pub fn sort_by_title(&self, ascending: bool) -> Vec<BookDto> {
        self.catalog.sort_by_title(ascending)
    }

    pub fn summary(&self) -> CatalogSummary {
        self.catalog.summary()
    }

    pub fn borrow_book(&mut self, id: BookId) -> LibraryResult<String> {
        self.ledger.borrow(self.catalog.as_mut(), id)
    }

    pub fn return_book(&mut self, title: &str) -> LibraryResult<String> {
        self.ledger.return_book(self.catalog.as_mut(), title)
    }

    pub fn list_borrowed_books(&self) -> String {
        self.ledger.list_borrowed_books(self.catalog.as_ref())
    }

    pub fn borrowed_books(&self) -> Vec<BookDto> {
        self.ledger.borrowed_books(self.catalog.as_ref())
    }

    pub fn borrower_name(&self) -> &str {
        self.ledger.borrower().name.as_str()
    }

    pub fn borrower_id(&self) -> &str {
        self.ledger.borrower().borrower_id.as_str()
    }
}
