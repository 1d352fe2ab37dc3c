// Helper functions shared across GraphQL query/mutation modules.

use async_graphql::ID;

/// Flatten an `[ID]` argument whose list and items may both be null
/// (nullable list, nullable items) into the id list the services expect.
/// Null items are skipped.
pub(crate) fn optional_ids(ids: Option<Vec<Option<ID>>>) -> Option<Vec<String>> {
    ids.map(flatten_ids)
}

/// Flatten a required `[ID]!` argument with nullable items, skipping nulls.
pub(crate) fn flatten_ids(ids: Vec<Option<ID>>) -> Vec<String> {
    ids.into_iter().flatten().map(|id| id.to_string()).collect()
}
