use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

const SAMPLE_BOOKS: [(&str, &str, &str); 5] = [
    ("The Great Gatsby", "F. Scott Fitzgerald", "1925"),
    ("To Kill a Mockingbird", "Harper Lee", "1960"),
    ("1984", "George Orwell", "1949"),
    ("The Midnight Library", "Matt Haig", "2020"),
    ("Educated", "Tara Westover", "2018"),
];

pub(crate) fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    Box::new(CatalogServiceImpl::new(config, book_repo))
}

pub(crate) fn seed_sample_books(catalog: &mut dyn CatalogService) -> LibraryResult<()> {
    for (title, author, year) in SAMPLE_BOOKS {
        catalog.add_book(title, author, year)?;
    }
    Ok(())
}
