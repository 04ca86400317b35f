pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod session;
pub mod utils;

pub use crate::books::dto::{BookDto, BookPatch};
pub use crate::catalog::controller::CatalogController;
pub use crate::catalog::domain::CatalogSummary;
pub use crate::catalog::view::{SortField, SortState, ViewMode};
pub use crate::core::domain::{BookId, Configuration};
pub use crate::core::library::{BookStatus, LibraryError, LibraryResult};
pub use crate::session::LibrarySession;
pub use crate::utils::logging::setup_tracing;
