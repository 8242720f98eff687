use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use entry_distribution::modules::distribution::adapters::outbound::in_memory::InMemoryStore;
use entry_distribution::shared::infrastructure::temp_storage::local::LocalTempStorage;
use entry_distribution::shell::config::{AppConfig, load_roster_seed};
use entry_distribution::shell::graphql::{AppSchema, build_schema};
use entry_distribution::shell::http::router;
use entry_distribution::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // In-memory persistence for now
    let store = Arc::new(InMemoryStore::new());
    if let Some(path) = &config.agents_file {
        for agent in load_roster_seed(path)? {
            let agent = store.register_agent(agent).await;
            tracing::info!(agent_id = %agent.id, name = %agent.name, "agent registered");
        }
    }
    let temp_storage = Arc::new(LocalTempStorage::create(&config.upload_dir).await?);

    let state = AppState::new(store, temp_storage);
    let schema = build_schema(state.clone());

    let app = router(state, config.max_upload_bytes)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http());

    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        "listening on http://{}",
        config.addr
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
