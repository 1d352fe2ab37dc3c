use super::prelude::*;

#[derive(Default)]
pub struct PostQueries;

#[Object]
impl PostQueries {
    /// Fetch posts, optionally filtered by id
    async fn posts(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Post IDs to fetch; omit for all posts")] ids: Option<Vec<Option<ID>>>,
    ) -> Result<Vec<Post>> {
        let service = ctx.data_unchecked::<Arc<PostsService>>();
        let posts = service.get_posts(optional_ids(ids));
        Ok(posts.into_iter().map(Post::from).collect())
    }
}
