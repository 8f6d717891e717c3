//! CLI command execution.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::{
    models::book::Book,
    services::{books::BookService, reading::ReadingService},
};

/// Split raw arguments into valid book IDs and the values that failed to parse.
pub fn parse_book_ids(raw: &[String]) -> (Vec<i32>, Vec<String>) {
    let mut ids = Vec::with_capacity(raw.len());
    let mut invalid = Vec::new();
    for value in raw {
        match value.trim().parse::<i32>() {
            Ok(id) => ids.push(id),
            Err(_) => invalid.push(value.clone()),
        }
    }
    (ids, invalid)
}

pub fn format_book(book: &Book) -> String {
    format!(
        "ID: {}, Title: {}, Author: {}, Genre: {}",
        book.id, book.title, book.author, book.genre
    )
}

/// Print the books whose title contains `name`.
pub async fn search_books(books: &BookService, name: &str, out: &mut impl Write) -> Result<()> {
    let found = books
        .search_by_title(name)
        .await
        .with_context(|| format!("Failed to search books matching '{}'", name))?;
    write_search_results(name, &found, out)
}

/// Print the outcome of a title search.
pub fn write_search_results(name: &str, found: &[Book], out: &mut impl Write) -> Result<()> {
    if found.is_empty() {
        writeln!(out, "No books found matching: {}", name)?;
        return Ok(());
    }

    writeln!(out, "Found {} book(s):", found.len())?;
    for book in found {
        writeln!(out, "{}", format_book(book))?;
    }
    Ok(())
}

/// Simulate reading the given books, printing one line per result in the
/// order the readings finished. Unparseable IDs go to `err` and are skipped.
pub async fn simulate_reading(
    reading: &ReadingService,
    raw_ids: &[String],
    delay: Duration,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let (ids, invalid) = parse_book_ids(raw_ids);
    for value in &invalid {
        writeln!(err, "Invalid book ID: {}", value)?;
    }
    if !invalid.is_empty() {
        tracing::warn!(skipped = invalid.len(), "Ignoring invalid book IDs");
    }

    for line in reading.simulate_many(&ids, delay).await {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
