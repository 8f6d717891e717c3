//! Business logic services

pub mod books;
pub mod reading;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
    pub reading: reading::ReadingService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BookService::new(repository.clone()),
            reading: reading::ReadingService::new(Arc::new(repository)),
        }
    }
}
