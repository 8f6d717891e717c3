//! Bookshelf
//!
//! A small book catalog service: CRUD over a `books` table exposed through a
//! REST JSON API and a command-line interface, plus a reading simulator that
//! reads many books concurrently.

use std::sync::Arc;

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
