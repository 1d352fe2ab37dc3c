//! GraphQL subscriptions for real-time updates
//!
//! Subscriptions allow clients to receive push updates over WebSocket.
//! The stream ends when the client disconnects; teardown is handled by the
//! WebSocket transport, not here.

use std::sync::Arc;

use async_graphql::{Context, Subscription};
use futures::Stream;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use crate::services::AuthorsService;

use super::types::Author;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Subscribe to snapshots of the author collection. One item is emitted
    /// per author mutation; a lagging client skips to the newest snapshots.
    async fn authors<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Vec<Author>> + 'ctx {
        let service = ctx.data_unchecked::<Arc<AuthorsService>>();
        let receiver = service.subscribe();

        BroadcastStream::new(receiver).filter_map(|result| {
            result
                .ok()
                .map(|snapshot| snapshot.into_iter().map(Author::from).collect())
        })
    }
}
