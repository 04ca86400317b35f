use std::cmp::Ordering;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{parse_year, BookDto, BookPatch};
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, CatalogSummary};
use crate::core::domain::{BookId, Configuration};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    next_book_id: BookId,
    recent_after_year: i32,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
            next_book_id: 1,
            recent_after_year: config.recent_after_year,
        }
    }

    fn collect(&self, predicate: &dyn Fn(&BookEntity) -> bool) -> Vec<BookDto> {
        self.book_repository.query(predicate).into_iter().map(BookDto::from).collect()
    }
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending { ordering } else { ordering.reverse() }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, title: &str, author: &str, year: &str) -> LibraryResult<BookDto> {
        if title.is_empty() || author.is_empty() || year.is_empty() {
            tracing::warn!(title, author, year, "All fields are required!");
            return Err(LibraryError::validation("All fields are required!"));
        }
        let year = parse_year(year).map_err(|err| {
            tracing::warn!(title, error = %err, "rejected book");
            err
        })?;
        let book = BookEntity::new(self.next_book_id, title, author, year);
        self.book_repository.create(book.clone())?;
        self.next_book_id += 1;
        tracing::info!(book_id = book.book_id, "Added: \"{}\" by {}", book.title, book.author);
        Ok(BookDto::from(&book))
    }

    fn update_book(&mut self, search_title: &str, patch: &BookPatch) -> LibraryResult<BookDto> {
        let mut book = match self.book_repository.find_first_by_title_ignore_case(search_title) {
            Some(found) => found.clone(),
            None => {
                tracing::warn!("Book \"{}\" not found.", search_title);
                return Err(LibraryError::not_found(format!("Book \"{}\" not found.", search_title).as_str()));
            }
        };
        patch.apply_to(&mut book)?;
        self.book_repository.update(&book)?;
        tracing::info!(book_id = book.book_id, "Updated book: {}", book.title);
        Ok(BookDto::from(&book))
    }

    fn remove_book(&mut self, id: BookId) -> LibraryResult<BookDto> {
        let deleted = self.book_repository.delete(id).map_err(|err| {
            tracing::warn!(book_id = id, "{}", err);
            err
        })?;
        tracing::info!(book_id = id, "Deleted: \"{}\"", deleted.title);
        Ok(BookDto::from(&deleted))
    }

    fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto> {
        self.book_repository.get(id).map(BookDto::from)
    }

    fn all_books(&self) -> Vec<BookDto> {
        self.collect(&|_| true)
    }

    fn search_books(&self, keyword: &str) -> Vec<BookDto> {
        let lower_keyword = keyword.to_lowercase();
        self.collect(&|b| b.matches_keyword(lower_keyword.as_str()))
    }

    fn filter_recent_books(&self) -> Vec<BookDto> {
        let after = self.recent_after_year;
        self.collect(&|b| b.year > after)
    }

    // slice::sort_by is stable, so equal keys keep catalog order in both directions
    fn sort_by_year(&self, ascending: bool) -> Vec<BookDto> {
        let mut books = self.all_books();
        books.sort_by(|a, b| directed(a.year.cmp(&b.year), ascending));
        books
    }

    fn sort_by_title(&self, ascending: bool) -> Vec<BookDto> {
        let mut books = self.all_books();
        books.sort_by(|a, b| directed(a.title.to_lowercase().cmp(&b.title.to_lowercase()), ascending));
        books
    }

    fn summary(&self) -> CatalogSummary {
        let total = self.book_repository.count();
        let available = self.book_repository.query(&|b| b.is_available).len();
        CatalogSummary {
            total,
            available,
            borrowed: total - available,
        }
    }

    fn set_availability(&mut self, id: BookId, is_available: bool) -> LibraryResult<BookDto> {
        let mut book = self.book_repository.get(id)?.clone();
        book.is_available = is_available;
        self.book_repository.update(&book)?;
        Ok(BookDto::from(&book))
    }
}
