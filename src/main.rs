use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use palettier::api;
use palettier::models::AppConfig;
use palettier::server;

#[derive(Parser)]
#[command(name = "palettier")]
#[command(about = "Curated color palette API backed by the Colormind generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Palettier API",
        description = "Curated color palettes for UI theming",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::colors::handle_colors),
    components(schemas(palettier::models::Palette)),
    tags(
        (name = "Palette", description = "Curated palette retrieval")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) | None => run_server().await,
    }
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palettier=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(AppConfig::from_env());

    tracing::info!(
        upstream = %config.upstream_url,
        allowed_origin = %config.allowed_origin,
        fetch_timeout_secs = config.fetch_timeout.as_secs(),
        "Configuration resolved"
    );

    let state = server::create_app_state(config.clone())?;

    // Build router: shared API routes plus production-only Swagger UI
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Palettier server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
