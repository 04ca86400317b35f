use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// Display of every variant is the bare message, so it can be handed to the user as is.
#[derive(Debug, PartialEq, Clone)]
pub enum LibraryError {
    Validation {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The book exists but its loan state does not allow the requested transition.
    Unavailable {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str) -> LibraryError {
        LibraryError::Validation { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str) -> LibraryError {
        LibraryError::Unavailable { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message } => message,
            LibraryError::NotFound { message } => message,
            LibraryError::Unavailable { message } => message,
            LibraryError::DuplicateKey { message } => message,
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog and ledger operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl From<bool> for BookStatus {
    fn from(is_available: bool) -> Self {
        if is_available {
            BookStatus::Available
        } else {
            BookStatus::Borrowed
        }
    }
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Borrowed" => BookStatus::Borrowed,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookStatus, LibraryError};

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test"), LibraryError::Validation{ message: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_unavailable_error() {
        assert!(matches!(LibraryError::unavailable("test"), LibraryError::Unavailable{ message: _ }));
    }

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[test]
    fn test_should_display_bare_message() {
        let err = LibraryError::unavailable("Cannot borrow \"1984\", book unavailable.");
        assert_eq!("Cannot borrow \"1984\", book unavailable.", err.to_string());
    }

    #[test]
    fn test_should_format_book_status() {
        let statuses = vec![
            BookStatus::Available,
            BookStatus::Borrowed,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = BookStatus::from(str);
            assert_eq!(status, str_status);
        }
    }

    #[test]
    fn test_should_map_availability_flag_to_status() {
        assert_eq!(BookStatus::Available, BookStatus::from(true));
        assert_eq!(BookStatus::Borrowed, BookStatus::from(false));
    }
}
