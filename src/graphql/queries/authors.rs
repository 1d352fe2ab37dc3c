use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// Fetch authors, optionally filtered by id
    async fn authors(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Author IDs to fetch; omit for all authors")] ids: Option<
            Vec<Option<ID>>,
        >,
    ) -> Result<Vec<Author>> {
        let service = ctx.data_unchecked::<Arc<AuthorsService>>();
        let authors = service.get_authors(optional_ids(ids));
        Ok(authors.into_iter().map(Author::from).collect())
    }

    /// Fetch exactly one author
    async fn author(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Author ID")] id: ID,
    ) -> Result<Author> {
        let service = ctx.data_unchecked::<Arc<AuthorsService>>();
        let author = service
            .get_author(&id)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(author.into())
    }
}
