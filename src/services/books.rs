//! Book catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    /// Search books by (partial) title
    pub async fn search_by_title(&self, name: &str) -> AppResult<Vec<Book>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Search term must not be empty".to_string()));
        }
        self.repository.books_search_by_title(name).await
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.books_create(data).await?;
        tracing::info!(book_id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        data.validate()?;
        if data.is_empty() {
            return self.repository.books_get_by_id(id).await;
        }
        self.repository.books_update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}
