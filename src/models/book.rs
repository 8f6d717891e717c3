//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "Author must be at most 255 characters"))]
    pub author: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "Genre must be at most 255 characters"))]
    pub genre: String,
}

/// Update book request; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 255, message = "Author must be at most 255 characters"))]
    pub author: Option<String>,
    #[validate(length(max = 255, message = "Genre must be at most 255 characters"))]
    pub genre: Option<String>,
}

impl UpdateBook {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.genre.is_none()
    }
}

/// Book list query parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_book_requires_title() {
        let data = CreateBook {
            title: String::new(),
            author: "Frank Herbert".to_string(),
            genre: "Science fiction".to_string(),
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_create_book_defaults_author_and_genre() {
        let data: CreateBook = serde_json::from_str(r#"{"title":"Dune"}"#).unwrap();
        assert_eq!(data.author, "");
        assert_eq!(data.genre, "");
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_update_book_rejects_empty_title_only_when_present() {
        assert!(UpdateBook::default().validate().is_ok());
        let data = UpdateBook {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_update_book_is_empty() {
        assert!(UpdateBook::default().is_empty());
        let data = UpdateBook {
            genre: Some("Fantasy".to_string()),
            ..Default::default()
        };
        assert!(!data.is_empty());
    }
}
