//! Author mutations: each resolver is a single delegation to the author
//! service and returns the affected entity unmodified. Failure modes are
//! produced by the service and propagated onto the GraphQL error channel.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use crate::graphql::types::{Author, CreateAuthorInput, DeleteAuthorInput, UpdateAuthorInput};
use crate::services::{AuthorUpdate, AuthorsService, NewAuthor};

#[derive(Default)]
pub struct AuthorMutations;

#[Object]
impl AuthorMutations {
    /// Create an author
    async fn create_author(
        &self,
        ctx: &Context<'_>,
        create_author_input: CreateAuthorInput,
    ) -> Result<Author> {
        let service = ctx.data_unchecked::<Arc<AuthorsService>>();
        let author = service.create_author(NewAuthor {
            name: create_author_input.name,
            pen_name: create_author_input.pen_name,
        });
        Ok(author.into())
    }

    /// Update an author
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        update_author_input: UpdateAuthorInput,
    ) -> Result<Author> {
        let service = ctx.data_unchecked::<Arc<AuthorsService>>();
        let author = service
            .update_author(AuthorUpdate {
                id: update_author_input.id.to_string(),
                name: update_author_input.name,
                pen_name: update_author_input.pen_name,
            })
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(author.into())
    }

    /// Delete an author, returning the removed entity
    async fn delete_author(
        &self,
        ctx: &Context<'_>,
        delete_author_input: DeleteAuthorInput,
    ) -> Result<Author> {
        let service = ctx.data_unchecked::<Arc<AuthorsService>>();
        let author = service
            .delete_author(&delete_author_input.id)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(author.into())
    }
}
