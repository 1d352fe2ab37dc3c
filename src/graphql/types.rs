//! GraphQL type definitions
//!
//! These types mirror the domain models owned by the services but are decorated
//! with async-graphql attributes. Conversions are one-way: service model in,
//! GraphQL type out.

use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, ID, InputObject, Result, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::{Author as AuthorModel, Novel as NovelModel, Post as PostModel};

use super::loaders::AuthorPostsLoader;

/// A writer with published content
#[derive(Debug, Clone, SimpleObject, Serialize, Deserialize)]
#[graphql(complex)]
pub struct Author {
    /// Unique author ID
    pub id: ID,
    /// Legal name
    pub name: String,
    /// Name the author publishes under, if different
    pub pen_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[ComplexObject]
impl Author {
    /// Posts written by this author
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let loader = ctx.data_unchecked::<DataLoader<AuthorPostsLoader>>();
        let posts = loader.load_one(self.id.to_string()).await?;
        Ok(posts.unwrap_or_default())
    }
}

impl From<AuthorModel> for Author {
    fn from(a: AuthorModel) -> Self {
        Self {
            id: ID(a.id),
            name: a.name,
            pen_name: a.pen_name,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// A short-form piece of content
#[derive(Debug, Clone, SimpleObject, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID
    pub id: ID,
    /// ID of the owning author
    pub author_id: ID,
    pub title: String,
    pub body: Option<String>,
    /// Unset while the post is still a draft
    pub published_at: Option<DateTime<Utc>>,
}

impl From<PostModel> for Post {
    fn from(p: PostModel) -> Self {
        Self {
            id: ID(p.id),
            author_id: ID(p.author_id),
            title: p.title,
            body: p.body,
            published_at: p.published_at,
        }
    }
}

/// A long-form work
#[derive(Debug, Clone, SimpleObject, Serialize, Deserialize)]
pub struct Novel {
    /// Unique novel ID
    pub id: ID,
    /// ID of the owning author
    pub author_id: ID,
    pub title: String,
    pub genre: Option<String>,
}

impl From<NovelModel> for Novel {
    fn from(n: NovelModel) -> Self {
        Self {
            id: ID(n.id),
            author_id: ID(n.author_id),
            title: n.title,
            genre: n.genre,
        }
    }
}

/// Payload for the createAuthor mutation
#[derive(Debug, Clone, InputObject)]
pub struct CreateAuthorInput {
    pub name: String,
    pub pen_name: Option<String>,
}

/// Payload for the updateAuthor mutation; unset fields are left untouched
#[derive(Debug, Clone, InputObject)]
pub struct UpdateAuthorInput {
    pub id: ID,
    pub name: Option<String>,
    pub pen_name: Option<String>,
}

/// Payload for the deleteAuthor mutation
#[derive(Debug, Clone, InputObject)]
pub struct DeleteAuthorInput {
    pub id: ID,
}
