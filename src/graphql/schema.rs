//! GraphQL schema definition with queries, mutations, and subscriptions
//!
//! This is the single API surface for the Scriptorium backend. The resolvers
//! hold no state of their own; the services and the posts dataloader are
//! installed as schema data here.

use std::sync::Arc;

use async_graphql::dataloader::DataLoader;
use async_graphql::{MergedObject, Schema};

use crate::services::{AuthorsService, NovelsService, PostsService};

use super::loaders::AuthorPostsLoader;
use super::mutations::AuthorMutations;
use super::queries::{AuthorQueries, NovelQueries, PostQueries};
use super::subscriptions::SubscriptionRoot;

/// The GraphQL schema type
pub type ScriptoriumSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AuthorQueries, PostQueries, NovelQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AuthorMutations);

/// Build the GraphQL schema with all resolvers
pub fn build_schema(
    authors: Arc<AuthorsService>,
    posts: Arc<PostsService>,
    novels: Arc<NovelsService>,
) -> ScriptoriumSchema {
    let posts_loader = DataLoader::new(AuthorPostsLoader::new(posts.clone()), tokio::spawn);

    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot,
    )
    .data(authors)
    .data(posts)
    .data(novels)
    .data(posts_loader)
    .finish()
}
