//! Service layer: the business-logic collaborators consumed by the GraphQL resolvers.
//!
//! Each service owns its own in-memory store. The resolver layer only depends on
//! the public methods here, never on the stores directly.

pub mod authors;
pub mod error;
pub mod novels;
pub mod posts;

pub use authors::{Author, AuthorUpdate, AuthorsService, AuthorsServiceConfig, NewAuthor};
pub use error::ServiceError;
pub use novels::{NewNovel, Novel, NovelsService};
pub use posts::{NewPost, Post, PostsService};
