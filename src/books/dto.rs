use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::{BookId, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};

// BookDto is a snapshot of a stored book handed out by catalog queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_available: bool,
}

impl Identifiable for BookDto {
    type Id = BookId;

    fn id(&self) -> BookId {
        self.id
    }
}

impl Book for BookDto {
    fn is_available(&self) -> bool {
        self.is_available
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            is_available: other.is_available,
        }
    }
}

/// Partial update for a stored book. Absent or empty fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
}

impl BookPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn year(mut self, year: &str) -> Self {
        self.year = Some(year.to_string());
        self
    }

    // The year is parsed before any field is written so a bad year leaves the record as it was.
    pub(crate) fn apply_to(&self, book: &mut BookEntity) -> LibraryResult<()> {
        let year = match present(&self.year) {
            Some(year) => Some(parse_year(year)?),
            None => None,
        };
        if let Some(title) = present(&self.title) {
            book.title = title.to_string();
        }
        if let Some(author) = present(&self.author) {
            book.author = author.to_string();
        }
        if let Some(year) = year {
            book.year = year;
        }
        Ok(())
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

pub(crate) fn parse_year(year: &str) -> LibraryResult<i32> {
    year.trim().parse::<i32>()
        .map_err(|_| LibraryError::validation(format!("Year \"{}\" is not a number.", year).as_str()))
}
