//! Integration tests for the GraphQL API surface
//!
//! These tests execute operations against the built schema and verify:
//! - Argument validation runs before resolver bodies
//! - Resolvers delegate to services and return results unchanged
//! - The posts field resolves per author through the batched loader
//! - The authors subscription observes every published snapshot

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;

use scriptorium::graphql::{ScriptoriumSchema, build_schema};
use scriptorium::services::{
    AuthorsService, NewAuthor, NewNovel, NewPost, NovelsService, PostsService,
};

struct TestApp {
    schema: ScriptoriumSchema,
    authors: Arc<AuthorsService>,
    posts: Arc<PostsService>,
    novels: Arc<NovelsService>,
}

fn test_app() -> TestApp {
    let authors = Arc::new(AuthorsService::with_defaults());
    let posts = Arc::new(PostsService::new());
    let novels = Arc::new(NovelsService::new());
    let schema = build_schema(authors.clone(), posts.clone(), novels.clone());
    TestApp {
        schema,
        authors,
        posts,
        novels,
    }
}

fn author_named(app: &TestApp, name: &str) -> String {
    app.authors
        .create_author(NewAuthor {
            name: name.into(),
            pen_name: None,
        })
        .id
}

// ============================================================================
// Query Tests
// ============================================================================

#[tokio::test]
async fn test_authors_query_filters_by_given_ids() {
    let app = test_app();
    let ada = author_named(&app, "Ada");
    let emily = author_named(&app, "Emily");
    let _unwanted = author_named(&app, "Unwanted");

    let query = format!(r#"{{ authors(ids: ["{ada}", "{emily}"]) {{ id name }} }}"#);
    let resp = app.schema.execute(&query).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({
            "authors": [
                { "id": ada, "name": "Ada" },
                { "id": emily, "name": "Emily" },
            ]
        })
    );
}

#[tokio::test]
async fn test_authors_query_accepts_omitted_ids() {
    let app = test_app();
    author_named(&app, "Ada");
    author_named(&app, "Emily");

    let resp = app.schema.execute("{ authors { name } }").await;
    assert!(resp.errors.is_empty());

    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({ "authors": [{ "name": "Ada" }, { "name": "Emily" }] })
    );
}

#[tokio::test]
async fn test_author_query_returns_single_entity() {
    let app = test_app();
    let ada = author_named(&app, "Ada");

    let query = format!(r#"{{ author(id: "{ada}") {{ id name }} }}"#);
    let resp = app.schema.execute(&query).await;
    assert!(resp.errors.is_empty());
    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({ "author": { "id": ada, "name": "Ada" } })
    );
}

#[tokio::test]
async fn test_author_query_propagates_service_not_found() {
    let app = test_app();

    let resp = app
        .schema
        .execute(r#"{ author(id: "missing") { id } }"#)
        .await;
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].message, "no entity with id missing");
}

#[tokio::test]
async fn test_posts_query_accepts_omitted_ids() {
    let app = test_app();
    app.posts.create_post(NewPost {
        author_id: "1".into(),
        title: "Draft".into(),
        body: None,
        published_at: None,
    });

    let resp = app.schema.execute("{ posts { title } }").await;
    assert!(resp.errors.is_empty());
    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({ "posts": [{ "title": "Draft" }] })
    );
}

#[tokio::test]
async fn test_novels_query_requires_non_empty_ids() {
    let app = test_app();

    // Empty list fails validation before the resolver body runs
    let resp = app.schema.execute("{ novels(ids: []) { id } }").await;
    assert_eq!(resp.errors.len(), 1);

    // Absent list fails at the schema level (required argument)
    let resp = app.schema.execute("{ novels { id } }").await;
    assert!(!resp.errors.is_empty());
}

#[tokio::test]
async fn test_novels_query_skips_null_entries() {
    let app = test_app();
    let novel = app.novels.create_novel(NewNovel {
        author_id: "1".into(),
        title: "North and South".into(),
        genre: None,
    });

    let query = format!(r#"{{ novels(ids: [null, "{}"]) {{ title }} }}"#, novel.id);
    let resp = app.schema.execute(&query).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({ "novels": [{ "title": "North and South" }] })
    );
}

// ============================================================================
// Field Resolution Tests
// ============================================================================

#[tokio::test]
async fn test_author_posts_field_resolves_owned_posts() {
    let app = test_app();
    let ada = author_named(&app, "Ada");
    let emily = author_named(&app, "Emily");

    app.posts.create_post(NewPost {
        author_id: ada.clone(),
        title: "On engines".into(),
        body: None,
        published_at: None,
    });
    app.posts.create_post(NewPost {
        author_id: ada.clone(),
        title: "On looms".into(),
        body: None,
        published_at: None,
    });

    // Sibling resolutions go through the batched loader; each parent still
    // sees only its own posts, and a parent without posts gets an empty list.
    let resp = app
        .schema
        .execute("{ authors { id posts { title authorId } } }")
        .await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({
            "authors": [
                {
                    "id": ada,
                    "posts": [
                        { "title": "On engines", "authorId": ada },
                        { "title": "On looms", "authorId": ada },
                    ]
                },
                { "id": emily, "posts": [] },
            ]
        })
    );

    // Both parents were served by a single grouped lookup, not one per author
    assert_eq!(app.posts.batch_lookup_count(), 1);
}

// ============================================================================
// Mutation Tests
// ============================================================================

#[tokio::test]
async fn test_create_author_mutation_returns_created_entity() {
    let app = test_app();

    let resp = app
        .schema
        .execute(
            r#"mutation {
                createAuthor(createAuthorInput: { name: "Ada", penName: "A.L." }) {
                    id name penName
                }
            }"#,
        )
        .await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    let created = &data["createAuthor"];
    assert_eq!(created["name"], "Ada");
    assert_eq!(created["penName"], "A.L.");

    // The mutation delegated to the service: the store now holds the entity
    let stored = app
        .authors
        .get_author(created["id"].as_str().unwrap())
        .unwrap();
    assert_eq!(stored.name, "Ada");
}

#[tokio::test]
async fn test_update_author_mutation_applies_partial_update() {
    let app = test_app();
    let ada = author_named(&app, "Ada");

    let query = format!(
        r#"mutation {{
            updateAuthor(updateAuthorInput: {{ id: "{ada}", name: "Ada Lovelace" }}) {{
                id name
            }}
        }}"#
    );
    let resp = app.schema.execute(&query).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({ "updateAuthor": { "id": ada, "name": "Ada Lovelace" } })
    );
    assert_eq!(app.authors.get_author(&ada).unwrap().name, "Ada Lovelace");
}

#[tokio::test]
async fn test_delete_author_mutation_returns_removed_entity() {
    let app = test_app();
    let ada = author_named(&app, "Ada");

    let query = format!(
        r#"mutation {{ deleteAuthor(deleteAuthorInput: {{ id: "{ada}" }}) {{ id name }} }}"#
    );
    let resp = app.schema.execute(&query).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({ "deleteAuthor": { "id": ada, "name": "Ada" } })
    );
    assert!(app.authors.get_authors(None).is_empty());
}

#[tokio::test]
async fn test_delete_author_mutation_propagates_service_error() {
    let app = test_app();

    let resp = app
        .schema
        .execute(r#"mutation { deleteAuthor(deleteAuthorInput: { id: "missing" }) { id } }"#)
        .await;
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].message, "no entity with id missing");
}

// ============================================================================
// Subscription Tests
// ============================================================================

#[tokio::test]
async fn test_authors_subscription_observes_mutations() {
    let app = test_app();

    let mut stream = app
        .schema
        .execute_stream("subscription { authors { name } }");

    // Mutate after the stream has had a chance to attach to the channel
    let authors = app.authors.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        authors.create_author(NewAuthor {
            name: "Ada".into(),
            pen_name: None,
        });
    });

    let resp = tokio::time::timeout(Duration::from_secs(5), stream.next())
        .await
        .expect("subscription timed out")
        .expect("stream ended unexpectedly");
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({ "authors": [{ "name": "Ada" }] })
    );
}

#[tokio::test]
async fn test_authors_subscription_reaches_every_subscriber() {
    let app = test_app();

    let mut first = app
        .schema
        .execute_stream("subscription { authors { name } }");
    let mut second = app
        .schema
        .execute_stream("subscription { authors { name } }");

    let authors = app.authors.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        authors.create_author(NewAuthor {
            name: "Emily".into(),
            pen_name: None,
        });
    });

    // Poll both streams concurrently so each attaches to the channel before
    // the mutation fires
    let (first_resp, second_resp) = tokio::join!(
        tokio::time::timeout(Duration::from_secs(5), first.next()),
        tokio::time::timeout(Duration::from_secs(5), second.next()),
    );

    for resp in [first_resp, second_resp] {
        let resp = resp
            .expect("subscription timed out")
            .expect("stream ended unexpectedly");
        assert_eq!(
            resp.data.into_json().unwrap(),
            json!({ "authors": [{ "name": "Emily" }] })
        );
    }
}
