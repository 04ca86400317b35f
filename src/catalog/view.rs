use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogSummary;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Table,
    Card,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Card,
            ViewMode::Card => ViewMode::Table,
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ViewMode::Table => write!(f, "table"),
            ViewMode::Card => write!(f, "card"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum SortField {
    Year,
    Title,
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SortField::Year => write!(f, "year"),
            SortField::Title => write!(f, "title"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub ascending: bool,
}

const NO_BOOKS: &str = "No books found.";
const HEADERS: [&str; 4] = ["Title", "Author", "Year", "Status"];

/// Renders `books` in the given layout, followed by the catalog summary line.
pub fn render_books(books: &[BookDto], mode: ViewMode, summary: &CatalogSummary) -> String {
    let body = if books.is_empty() {
        format!("{}\n", NO_BOOKS)
    } else {
        match mode {
            ViewMode::Table => render_table(books),
            ViewMode::Card => render_cards(books),
        }
    };
    format!("{}\n{}\n", body, render_summary(summary))
}

pub fn render_summary(summary: &CatalogSummary) -> String {
    format!("Total: {} | Available: {} | Borrowed: {}", summary.total, summary.available, summary.borrowed)
}

fn render_table(books: &[BookDto]) -> String {
    let rows: Vec<[String; 4]> = books.iter().map(|b| [
        b.title.to_string(),
        b.author.to_string(),
        b.year.to_string(),
        b.status().to_string(),
    ]).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_row(&HEADERS.map(str::to_string), &widths);
    out.push_str(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-").as_str());
    out.push('\n');
    for row in &rows {
        out.push_str(format_row(row, &widths).as_str());
    }
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let line = cells.iter().zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{}\n", line.trim_end())
}

fn render_cards(books: &[BookDto]) -> String {
    books.iter()
        .map(|b| format!("\"{}\"\n  by {} ({})\n  Status: {}\n", b.title, b.author, b.year, b.status()))
        .collect::<Vec<_>>()
        .join("\n")
}
