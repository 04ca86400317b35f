use crate::books::dto::BookDto;
use crate::catalog::view::{render_books, SortField, SortState, ViewMode};
use crate::core::domain::BookId;
use crate::core::library::LibraryResult;
use crate::session::LibrarySession;

/// Text front end over a [`LibrarySession`]: turns user actions into session calls and
/// renders the resulting list in the current view mode.
pub struct CatalogController {
    session: LibrarySession,
    view_mode: ViewMode,
    current_sort: Option<SortState>,
}

fn log_books(label: &str, books: &[BookDto]) {
    tracing::debug!(books = %serde_json::to_string(books).unwrap_or_default(), "{}", label);
}

impl CatalogController {
    pub fn new(session: LibrarySession) -> Self {
        Self {
            session,
            view_mode: ViewMode::default(),
            current_sort: None,
        }
    }

    pub fn session(&self) -> &LibrarySession {
        &self.session
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn current_sort(&self) -> Option<SortState> {
        self.current_sort
    }

    pub fn render(&self, books: &[BookDto]) -> String {
        render_books(books, self.view_mode, &self.session.summary())
    }

    pub fn render_all(&self) -> String {
        self.render(&self.session.books())
    }

    pub fn handle_add_book(&mut self, title: &str, author: &str, year: &str) -> LibraryResult<String> {
        self.session.add_book(title.trim(), author.trim(), year)?;
        Ok(self.render_all())
    }

    pub fn handle_search(&self, keyword: &str) -> String {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return self.render_all();
        }
        let results = self.session.search_books(keyword);
        log_books(format!("Search results for \"{}\"", keyword).as_str(), &results);
        self.render(&results)
    }

    pub fn filter_and_display(&self) -> String {
        let filtered = self.session.filter_recent_books();
        log_books("Books published after the recent-year threshold", &filtered);
        self.render(&filtered)
    }

    // Sorting the same field again flips the direction; a new field starts ascending.
    pub fn sort_and_display(&mut self, field: SortField) -> String {
        let sort = match self.current_sort {
            Some(current) if current.field == field => SortState { field, ascending: !current.ascending },
            _ => SortState { field, ascending: true },
        };
        self.current_sort = Some(sort);
        let sorted = match field {
            SortField::Year => self.session.sort_by_year(sort.ascending),
            SortField::Title => self.session.sort_by_title(sort.ascending),
        };
        let direction = if sort.ascending { "ascending" } else { "descending" };
        log_books(format!("Sorted by {} ({})", field, direction).as_str(), &sorted);
        self.render(&sorted)
    }

    pub fn toggle_view(&mut self) -> String {
        self.view_mode = self.view_mode.toggle();
        tracing::info!(view = %self.view_mode, "view changed");
        self.render_all()
    }

    pub fn reset_display(&mut self) -> String {
        self.current_sort = None;
        tracing::info!("display reset");
        self.render_all()
    }

    /// Deletes the book; callers are expected to have confirmed with the user already.
    pub fn handle_delete(&mut self, id: BookId) -> LibraryResult<String> {
        self.session.delete_book(id)?;
        Ok(self.render_all())
    }

    pub fn handle_borrow(&mut self, id: BookId) -> LibraryResult<String> {
        self.session.borrow_book(id)
    }

    pub fn handle_return(&mut self, id: BookId) -> LibraryResult<String> {
        let book = self.session.get_book(id)?;
        self.session.return_book(book.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::controller::CatalogController;
    use crate::catalog::view::{SortField, SortState, ViewMode};
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::session::LibrarySession;

    fn build_controller() -> CatalogController {
        let session = LibrarySession::with_sample_books(&Configuration::new("test")).expect("should seed books");
        CatalogController::new(session)
    }

    #[test]
    fn test_should_render_all_books_on_empty_search() {
        let controller = build_controller();
        assert_eq!(controller.render_all(), controller.handle_search("   "));
    }

    #[test]
    fn test_should_render_search_results() {
        let controller = build_controller();
        let out = controller.handle_search("  orwell ");
        assert!(out.contains("1984"));
        assert!(!out.contains("Educated"));
        assert!(controller.handle_search("tolkien").starts_with("No books found."));
    }

    #[test]
    fn test_should_add_trimmed_book() {
        let mut controller = build_controller();
        let out = controller.handle_add_book("  Dune ", " Frank Herbert", "1965").expect("should add book");
        assert!(out.contains("Total: 6 | Available: 6 | Borrowed: 0"));
        assert_eq!(1, controller.session().search_books("dune").len());
        assert_eq!("Dune", controller.session().get_book(6).expect("should return book").title.as_str());
    }

    #[test]
    fn test_should_reject_blank_book() {
        let mut controller = build_controller();
        let res = controller.handle_add_book("   ", "Author", "2000");
        assert_eq!(Err(LibraryError::validation("All fields are required!")), res);
        assert_eq!(5, controller.session().books().len());
    }

    #[test]
    fn test_should_toggle_sort_direction() {
        let mut controller = build_controller();
        let _ = controller.sort_and_display(SortField::Year);
        assert_eq!(Some(SortState { field: SortField::Year, ascending: true }), controller.current_sort());
        let out = controller.sort_and_display(SortField::Year);
        assert_eq!(Some(SortState { field: SortField::Year, ascending: false }), controller.current_sort());
        let midnight = out.find("The Midnight Library").expect("should render book");
        let gatsby = out.find("The Great Gatsby").expect("should render book");
        assert!(midnight < gatsby);

        let _ = controller.sort_and_display(SortField::Title);
        assert_eq!(Some(SortState { field: SortField::Title, ascending: true }), controller.current_sort());

        let _ = controller.reset_display();
        assert_eq!(None, controller.current_sort());
    }

    #[test]
    fn test_should_filter_recent_books() {
        let controller = build_controller();
        let out = controller.filter_and_display();
        assert!(out.contains("The Midnight Library"));
        assert!(out.contains("Educated"));
        assert!(!out.contains("1984"));
    }

    #[test]
    fn test_should_toggle_view() {
        let mut controller = build_controller();
        let out = controller.toggle_view();
        assert_eq!(ViewMode::Card, controller.view_mode());
        assert!(out.contains("  by George Orwell (1949)\n"));
        let out = controller.toggle_view();
        assert_eq!(ViewMode::Table, controller.view_mode());
        assert!(out.starts_with("Title"));
    }

    #[test]
    fn test_should_borrow_and_return_by_id() {
        let mut controller = build_controller();
        let msg = controller.handle_borrow(2).expect("should borrow book");
        assert_eq!("Sample Borrower successfully borrowed \"To Kill a Mockingbird\".", msg.as_str());
        assert!(controller.render_all().contains("Borrowed: 1"));
        assert!(controller.handle_borrow(2).is_err());

        let msg = controller.handle_return(2).expect("should return book");
        assert_eq!("\"To Kill a Mockingbird\" returned successfully.", msg.as_str());
        assert!(controller.handle_return(2).is_err());
    }

    #[test]
    fn test_should_delete_book() {
        let mut controller = build_controller();
        let out = controller.handle_delete(3).expect("should delete book");
        assert!(!out.contains("1984"));
        assert!(matches!(controller.handle_delete(3), Err(LibraryError::NotFound { .. })));
    }
}
