//! Scriptorium backend - GraphQL content service
//!
//! A thin GraphQL layer over author, post, and novel services. All operations
//! are exposed via GraphQL at /graphql, with subscriptions at /graphql/ws.

pub mod config;
pub mod graphql;
pub mod services;
