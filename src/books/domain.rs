use crate::core::domain::{BookId, Identifiable};
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable<Id = BookId> {
    fn is_available(&self) -> bool;

    fn status(&self) -> BookStatus {
        BookStatus::from(self.is_available())
    }
}
