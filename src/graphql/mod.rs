//! GraphQL API with subscriptions for real-time updates
//!
//! This module provides a GraphQL API using async-graphql with support for
//! queries, mutations, and subscriptions over WebSocket. Resolvers are thin:
//! each delegates to one service call and returns its result unchanged.

pub mod helpers;
pub mod loaders;
pub mod mutations;
pub mod queries;
mod schema;
mod subscriptions;
pub mod types;

pub use schema::{MutationRoot, QueryRoot, ScriptoriumSchema, build_schema};
pub use subscriptions::SubscriptionRoot;
