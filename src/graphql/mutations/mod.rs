pub mod authors;

pub use authors::AuthorMutations;
