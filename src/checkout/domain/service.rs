use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::model::BorrowerEntity;
use crate::core::domain::{BookId, Configuration};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct BorrowerLedger {
    borrower: BorrowerEntity,
}

impl BorrowerLedger {
    pub(crate) fn new(config: &Configuration) -> Self {
        Self {
            borrower: BorrowerEntity::new(config.borrower_name.as_str(), config.borrower_id.as_str()),
        }
    }
}

impl CheckoutService for BorrowerLedger {
    fn borrow(&mut self, catalog: &mut dyn CatalogService, book_id: BookId) -> LibraryResult<String> {
        let book = catalog.find_book_by_id(book_id)?;
        if !book.is_available() {
            let message = format!("Cannot borrow \"{}\", book unavailable.", book.title);
            tracing::warn!(book_id, borrower_id = self.borrower.borrower_id.as_str(), "{}", message);
            return Err(LibraryError::unavailable(message.as_str()));
        }
        catalog.set_availability(book_id, false)?;
        self.borrower.borrowed.push(book_id);
        tracing::info!(book_id, borrower_id = self.borrower.borrower_id.as_str(), "book borrowed");
        Ok(format!("{} successfully borrowed \"{}\".", self.borrower.name, book.title))
    }

    fn return_book(&mut self, catalog: &mut dyn CatalogService, title: &str) -> LibraryResult<String> {
        let found = self.borrower.borrowed.iter().enumerate().find_map(|(ndx, id)| {
            catalog.find_book_by_id(*id).ok().filter(|b| b.title == title).map(|b| (ndx, b.id))
        });
        let (ndx, book_id) = match found {
            Some(found) => found,
            None => {
                let message = format!("Book \"{}\" not found in borrowed list.", title);
                tracing::warn!(borrower_id = self.borrower.borrower_id.as_str(), "{}", message);
                return Err(LibraryError::not_found(message.as_str()));
            }
        };
        catalog.set_availability(book_id, true)?;
        self.borrower.borrowed.remove(ndx);
        tracing::info!(book_id, borrower_id = self.borrower.borrower_id.as_str(), "book returned");
        Ok(format!("\"{}\" returned successfully.", title))
    }

    fn list_borrowed_books(&self, catalog: &dyn CatalogService) -> String {
        let books = self.borrowed_books(catalog);
        if books.is_empty() {
            return format!("{} has no borrowed books.", self.borrower.name);
        }
        let mut report = format!("{} borrowed books:\n", self.borrower.name);
        for (i, book) in books.iter().enumerate() {
            report.push_str(format!("{}. \"{}\" by {} ({})\n", i + 1, book.title, book.author, book.year).as_str());
        }
        report
    }

    // ids whose book has left the catalog are skipped
    fn borrowed_books(&self, catalog: &dyn CatalogService) -> Vec<BookDto> {
        self.borrower.borrowed.iter()
            .filter_map(|id| catalog.find_book_by_id(*id).ok())
            .collect()
    }

    fn release(&mut self, book_id: BookId) -> bool {
        if !self.borrower.holds(book_id) {
            return false;
        }
        self.borrower.borrowed.retain(|id| *id != book_id);
        true
    }

    fn borrower(&self) -> &BorrowerEntity {
        &self.borrower
    }
}
