//! Reading simulator
//!
//! Models reading a book as a delayed response. A batch fans out one task per
//! book id and gathers the status lines through a channel sized to the batch,
//! in the order the tasks finish.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::{error::AppResult, models::book::Book};

/// Resolves a book from its id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookLookup: Send + Sync {
    async fn find_book(&self, id: i32) -> AppResult<Book>;
}

#[derive(Clone)]
pub struct ReadingService {
    lookup: Arc<dyn BookLookup>,
}

impl ReadingService {
    pub fn new(lookup: Arc<dyn BookLookup>) -> Self {
        Self { lookup }
    }

    /// Simulate reading a single book and report the outcome into `results`.
    ///
    /// Any lookup failure is reported as "not found" right away. A found book
    /// is reported only after `delay` has elapsed.
    pub async fn simulate_one(&self, id: i32, delay: Duration, results: mpsc::Sender<String>) {
        let message = match self.lookup.find_book(id).await {
            Ok(book) => {
                tokio::time::sleep(delay).await;
                format!("Book {} read!", book.title)
            }
            Err(e) => {
                tracing::debug!(book_id = id, error = %e, "Book lookup failed");
                format!("Book {} not found!", id)
            }
        };

        if results.send(message).await.is_err() {
            tracing::warn!(book_id = id, "Reading result dropped: collector already closed");
        }
    }

    /// Simulate reading every book in `ids` concurrently.
    ///
    /// Returns exactly one line per id (duplicates included) in completion
    /// order, once every task has reported.
    pub async fn simulate_many(&self, ids: &[i32], delay: Duration) -> Vec<String> {
        // tokio's bounded channel rejects a zero capacity
        let (tx, mut rx) = mpsc::channel(ids.len().max(1));

        for &id in ids {
            let service = self.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                service.simulate_one(id, delay, tx).await;
            });
        }
        // Producers now hold the only senders.
        drop(tx);

        let mut responses = Vec::with_capacity(ids.len());
        for _ in ids {
            match rx.recv().await {
                Some(message) => responses.push(message),
                None => {
                    tracing::error!(
                        expected = ids.len(),
                        received = responses.len(),
                        "Reading task exited without reporting"
                    );
                    break;
                }
            }
        }
        rx.close();

        tracing::info!(books = ids.len(), delay = ?delay, "Reading simulation finished");
        responses
    }
}
