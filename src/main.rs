//! Scriptorium backend entry point
//!
//! Wires configuration, the content services, the GraphQL schema, and the
//! axum HTTP/WebSocket surface together.

use std::net::SocketAddr;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scriptorium::config::Config;
use scriptorium::graphql::{ScriptoriumSchema, build_schema};
use scriptorium::services::{
    AuthorsService, AuthorsServiceConfig, NewAuthor, NewNovel, NewPost, NovelsService,
    PostsService,
};

/// Application state shared across all handlers
#[derive(Clone)]
struct AppState {
    schema: ScriptoriumSchema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scriptorium=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scriptorium Backend");

    // Build the content services
    let authors = Arc::new(AuthorsService::new(AuthorsServiceConfig {
        channel_capacity: config.channel_capacity,
    }));
    let posts = Arc::new(PostsService::new());
    let novels = Arc::new(NovelsService::new());

    if config.seed_demo_data {
        seed_demo_data(&authors, &posts, &novels);
        tracing::info!("Demo data seeded");
    }

    // Build GraphQL schema
    let schema = build_schema(authors, posts, novels);
    tracing::info!("GraphQL schema built");

    let state = AppState { schema };

    // Build router - GraphQL is the only API surface
    let app = Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/graphql/ws", get(graphql_ws_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "GraphQL playground: http://{}:{}/graphql",
        config.host.as_deref().unwrap_or("localhost"),
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GraphQL query/mutation handler
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphQL WebSocket handler for subscriptions
async fn graphql_ws_handler(
    State(state): State<AppState>,
    upgrade: axum::extract::WebSocketUpgrade,
    protocol: async_graphql_axum::GraphQLProtocol,
) -> impl IntoResponse {
    upgrade
        .protocols(["graphql-transport-ws", "graphql-ws"])
        .on_upgrade(move |socket| {
            async_graphql_axum::GraphQLWebSocket::new(socket, state.schema.clone(), protocol)
                .serve()
        })
}

/// GraphiQL interactive playground (only for browsers)
async fn graphiql(headers: HeaderMap) -> impl IntoResponse {
    let accepts_html = headers
        .get(axum::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        axum::response::Html(
            GraphiQLSource::build()
                .endpoint("/graphql")
                .subscription_endpoint("/graphql/ws")
                .finish(),
        )
        .into_response()
    } else {
        (
            axum::http::StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}

/// Populate the stores with a small content set for local development
fn seed_demo_data(authors: &AuthorsService, posts: &PostsService, novels: &NovelsService) {
    let gaskell = authors.create_author(NewAuthor {
        name: "Elizabeth Gaskell".into(),
        pen_name: Some("Mrs Gaskell".into()),
    });
    let lovelace = authors.create_author(NewAuthor {
        name: "Ada Lovelace".into(),
        pen_name: None,
    });

    posts.create_post(NewPost {
        author_id: gaskell.id.clone(),
        title: "On industrial towns".into(),
        body: Some("Notes from Manchester.".into()),
        published_at: Some(chrono::Utc::now()),
    });
    posts.create_post(NewPost {
        author_id: lovelace.id.clone(),
        title: "Notes on the Analytical Engine".into(),
        body: None,
        published_at: None,
    });

    novels.create_novel(NewNovel {
        author_id: gaskell.id,
        title: "North and South".into(),
        genre: Some("social novel".into()),
    });
}
