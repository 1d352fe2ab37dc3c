pub mod authors;
pub mod novels;
pub mod posts;

pub use authors::AuthorQueries;
pub use novels::NovelQueries;
pub use posts::PostQueries;

pub(crate) mod prelude {
    pub(crate) use std::sync::Arc;

    pub(crate) use async_graphql::{Context, ID, Object, Result};

    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::services::{AuthorsService, NovelsService, PostsService};
}
