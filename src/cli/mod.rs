//! Command-line interface.

mod args;
mod commands;

pub use args::{Cli, Commands};
pub use commands::{
    format_book, parse_book_ids, search_books, simulate_reading, write_search_results,
};
