use postbridge::error::{GatewayError, Result};
use postbridge::posts::PostsApi;
use postbridge::schema::{build_schema, GatewaySchema};
use postbridge::store::SqlUserStore;
use std::net::SocketAddr;
use std::sync::Arc;

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: String, port: Option<u16>) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    let config = postbridge::config::load_config(&config_path)?;

    // CLI flag wins over the configured port
    let server_port = port.unwrap_or(config.server.port);

    tracing::info!("🗄️  Opening user store at {}", config.database.url);
    let store = SqlUserStore::connect(&config.database).await?;
    store.migrate().await?;

    tracing::info!("🌐 Posts data source: {}", config.posts.base_url);
    if config.posts.timeout_secs.is_none() {
        tracing::warn!("No timeout configured for the posts API; slow upstream calls will block resolvers");
    }
    let posts = PostsApi::from_config(&config.posts)?;

    let schema = build_schema(Arc::new(store), Arc::new(posts));

    tracing::info!("✅ Schema built successfully");
    tracing::info!("🚀 GraphQL server running on http://localhost:{}", server_port);
    tracing::info!("📊 Playground: http://localhost:{}/graphql", server_port);
    tracing::info!("💡 Press Ctrl+C to stop the server");

    start_http_server(schema, &config.server.bind, server_port).await
}

async fn start_http_server(schema: GatewaySchema, bind: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid bind address '{}:{}': {}", bind, port, e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, postbridge::server::router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| GatewayError::Server(e.to_string()))?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
