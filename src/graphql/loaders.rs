//! GraphQL DataLoader batching the author->posts relation.
//!
//! Without batching, resolving `posts` on each author in a collection issues
//! one posts lookup per parent. The loader collects sibling resolutions within
//! a request tick and performs a single grouped lookup against the post service.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use async_graphql::dataloader::Loader;

use crate::services::PostsService;

use super::types::Post;

/// Batches `Author.posts` resolutions into one `posts_by_authors` call.
pub struct AuthorPostsLoader {
    posts: Arc<PostsService>,
}

impl AuthorPostsLoader {
    pub fn new(posts: Arc<PostsService>) -> Self {
        Self { posts }
    }
}

impl Loader<String> for AuthorPostsLoader {
    type Value = Vec<Post>;
    type Error = Infallible;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        tracing::debug!(parent_count = keys.len(), "Batch loading posts for authors");

        let grouped = self.posts.posts_by_authors(keys);
        Ok(grouped
            .into_iter()
            .map(|(author_id, posts)| {
                (author_id, posts.into_iter().map(Post::from).collect())
            })
            .collect())
    }
}
