//! Author service: owns the author store and the "authors" broadcast channel.
//!
//! Every successful mutation publishes a full snapshot of the author collection
//! on the channel, so subscribers always see the collection as of the mutation
//! that triggered the event. Snapshots are published while the store lock is
//! still held, so concurrent mutations cannot observe (or publish) each other's
//! state. Snapshots arrive in mutation order; a receiver that lags past the
//! channel capacity drops the oldest snapshots (broadcast semantics).

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

use super::ServiceError;

/// An author as stored by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub pen_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an author.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub pen_name: Option<String>,
}

/// Partial update for an author. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct AuthorUpdate {
    pub id: String,
    pub name: Option<String>,
    pub pen_name: Option<String>,
}

/// Author service configuration.
#[derive(Debug, Clone)]
pub struct AuthorsServiceConfig {
    /// Capacity of the authors snapshot broadcast channel
    pub channel_capacity: usize,
}

impl Default for AuthorsServiceConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}

/// Service managing the author collection.
pub struct AuthorsService {
    /// Authors in creation order
    authors: RwLock<Vec<Author>>,
    /// Broadcast channel publishing the author collection after each mutation
    snapshot_tx: broadcast::Sender<Vec<Author>>,
}

impl AuthorsService {
    pub fn new(config: AuthorsServiceConfig) -> Self {
        let (snapshot_tx, _) = broadcast::channel(config.channel_capacity);
        Self {
            authors: RwLock::new(Vec::new()),
            snapshot_tx,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(AuthorsServiceConfig::default())
    }

    /// Subscribe to author collection snapshots
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<Author>> {
        self.snapshot_tx.subscribe()
    }

    /// Fetch authors, optionally filtered by id. `None` returns the whole
    /// collection; unknown ids are silently skipped. Order is creation order.
    pub fn get_authors(&self, ids: Option<Vec<String>>) -> Vec<Author> {
        let authors = self.authors.read();
        match ids {
            None => authors.clone(),
            Some(ids) => authors
                .iter()
                .filter(|a| ids.contains(&a.id))
                .cloned()
                .collect(),
        }
    }

    /// Fetch exactly one author by id
    pub fn get_author(&self, id: &str) -> Result<Author, ServiceError> {
        self.authors
            .read()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// Create an author and publish the updated collection
    pub fn create_author(&self, new: NewAuthor) -> Author {
        let now = Utc::now();
        let author = Author {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            pen_name: new.pen_name,
            created_at: now,
            updated_at: now,
        };
        {
            let mut authors = self.authors.write();
            authors.push(author.clone());
            self.publish_snapshot(&authors);
        }
        info!(author_id = %author.id, name = %author.name, "Author created");
        author
    }

    /// Apply a partial update and publish the updated collection.
    /// An update with no fields set is rejected.
    pub fn update_author(&self, update: AuthorUpdate) -> Result<Author, ServiceError> {
        if update.name.is_none() && update.pen_name.is_none() {
            return Err(ServiceError::InvalidInput(
                "update must set at least one field".into(),
            ));
        }

        let updated = {
            let mut authors = self.authors.write();
            let author = authors
                .iter_mut()
                .find(|a| a.id == update.id)
                .ok_or_else(|| ServiceError::not_found(&update.id))?;

            if let Some(name) = update.name {
                author.name = name;
            }
            if let Some(pen_name) = update.pen_name {
                author.pen_name = Some(pen_name);
            }
            author.updated_at = Utc::now();
            let updated = author.clone();
            self.publish_snapshot(&authors);
            updated
        };

        info!(author_id = %updated.id, "Author updated");
        Ok(updated)
    }

    /// Remove an author, returning the removed entity, and publish the
    /// updated collection
    pub fn delete_author(&self, id: &str) -> Result<Author, ServiceError> {
        let removed = {
            let mut authors = self.authors.write();
            let pos = authors
                .iter()
                .position(|a| a.id == id)
                .ok_or_else(|| ServiceError::not_found(id))?;
            let removed = authors.remove(pos);
            self.publish_snapshot(&authors);
            removed
        };

        info!(author_id = %removed.id, "Author deleted");
        Ok(removed)
    }

    /// Send the given collection state to all subscribers. Callers pass the
    /// store contents while still holding the write lock, so the snapshot is
    /// exactly the state produced by the mutation being published. A send
    /// error only means there are no active subscribers.
    fn publish_snapshot(&self, snapshot: &[Author]) {
        if self.snapshot_tx.send(snapshot.to_vec()).is_ok() {
            debug!(author_count = snapshot.len(), "Published authors snapshot");
        }
    }
}
