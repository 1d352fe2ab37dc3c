//! Post service: short-form content keyed by owning author.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// A post as stored by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub body: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Payload for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: String,
    pub title: String,
    pub body: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Service managing the post collection.
#[derive(Default)]
pub struct PostsService {
    posts: RwLock<Vec<Post>>,
    /// Count of grouped lookups served, exposed so callers can observe
    /// how the dataloader batches per-author resolutions
    batch_lookups: AtomicUsize,
}

impl PostsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch posts, optionally filtered by post id. `None` returns all posts.
    pub fn get_posts(&self, ids: Option<Vec<String>>) -> Vec<Post> {
        let posts = self.posts.read();
        match ids {
            None => posts.clone(),
            Some(ids) => posts
                .iter()
                .filter(|p| ids.contains(&p.id))
                .cloned()
                .collect(),
        }
    }

    /// Batch lookup backing the author->posts dataloader: returns the posts of
    /// every requested author, grouped by author id. Authors without posts get
    /// no entry.
    pub fn posts_by_authors(&self, author_ids: &[String]) -> HashMap<String, Vec<Post>> {
        self.batch_lookups.fetch_add(1, Ordering::Relaxed);
        let posts = self.posts.read();
        let mut grouped: HashMap<String, Vec<Post>> = HashMap::new();
        for post in posts.iter() {
            if author_ids.contains(&post.author_id) {
                grouped
                    .entry(post.author_id.clone())
                    .or_default()
                    .push(post.clone());
            }
        }
        grouped
    }

    /// Number of `posts_by_authors` calls served so far
    pub fn batch_lookup_count(&self) -> usize {
        self.batch_lookups.load(Ordering::Relaxed)
    }

    /// Create a post
    pub fn create_post(&self, new: NewPost) -> Post {
        let post = Post {
            id: Uuid::new_v4().to_string(),
            author_id: new.author_id,
            title: new.title,
            body: new.body,
            published_at: new.published_at,
        };
        self.posts.write().push(post.clone());
        info!(post_id = %post.id, author_id = %post.author_id, "Post created");
        post
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post_for(svc: &PostsService, author_id: &str, title: &str) -> Post {
        svc.create_post(NewPost {
            author_id: author_id.into(),
            title: title.into(),
            body: None,
            published_at: None,
        })
    }

    #[test]
    fn test_get_posts_filters_by_ids() {
        let svc = PostsService::new();
        let a = post_for(&svc, "author-1", "First");
        let _b = post_for(&svc, "author-1", "Second");

        assert_eq!(svc.get_posts(None).len(), 2);

        let filtered = svc.get_posts(Some(vec![a.id.clone()]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, a.id);
    }

    #[test]
    fn test_posts_by_authors_groups_by_owner() {
        let svc = PostsService::new();
        post_for(&svc, "42", "On engines");
        post_for(&svc, "42", "On looms");
        post_for(&svc, "7", "Elsewhere");

        let grouped = svc.posts_by_authors(&["42".to_string()]);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped["42"].len(), 2);

        // Author with no posts gets no entry
        let grouped = svc.posts_by_authors(&["missing".to_string()]);
        assert!(grouped.is_empty());
    }
}
