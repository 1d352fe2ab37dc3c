use super::prelude::*;

#[derive(Default)]
pub struct NovelQueries;

#[Object]
impl NovelQueries {
    /// Fetch the novels with the given ids. The list is required and must be
    /// non-empty; validation rejects the request before this body runs.
    async fn novels(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Novel IDs to fetch", validator(min_items = 1))] ids: Vec<Option<ID>>,
    ) -> Result<Vec<Novel>> {
        let service = ctx.data_unchecked::<Arc<NovelsService>>();
        let novels = service.get_novels(flatten_ids(ids));
        Ok(novels.into_iter().map(Novel::from).collect())
    }
}
