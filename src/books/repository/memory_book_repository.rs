use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::{BookId, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order; lookups are linear scans.
#[derive(Debug, Default)]
pub(crate) struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: vec![],
        }
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id() == id)
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: BookEntity) -> LibraryResult<usize> {
        if self.position(entity.id()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("book with id {} already exists", entity.id()).as_str()));
        }
        self.books.push(entity);
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let ndx = self.position(entity.id()).ok_or_else(|| LibraryError::not_found("Book not found"))?;
        if let Some(existing) = self.books.get_mut(ndx) {
            *existing = entity.clone();
        }
        Ok(1)
    }

    fn get(&self, id: BookId) -> LibraryResult<&BookEntity> {
        self.books.iter().find(|b| b.id() == id).ok_or_else(|| LibraryError::not_found("Book not found"))
    }

    fn delete(&mut self, id: BookId) -> LibraryResult<BookEntity> {
        let ndx = self.position(id).ok_or_else(|| LibraryError::not_found("Book not found"))?;
        Ok(self.books.remove(ndx))
    }

    fn query(&self, predicate: &dyn Fn(&BookEntity) -> bool) -> Vec<&BookEntity> {
        self.books.iter().filter(|b| predicate(b)).collect()
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_first_by_title_ignore_case(&self, title: &str) -> Option<&BookEntity> {
        let lower_title = title.to_lowercase();
        self.books.iter().find(|b| b.title.to_lowercase() == lower_title)
    }
}
