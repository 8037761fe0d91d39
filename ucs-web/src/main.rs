// main.rs only boots the loader, router, and server

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use ucs_web::config::Config;
use ucs_web::state::AppState;
use ucs_web::{client, logging, router};

#[derive(Parser)]
#[command(name = "ucs-web")]
#[command(about = "University class search web server")]
#[command(version)]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Courses feed URL (overrides COURSES_URL)
    #[arg(long)]
    courses_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.port, cli.courses_url);

    // One fetch per process lifetime; the catalog is read-only afterwards.
    let catalog = client::load_catalog(&config)
        .await
        .context("failed to load the course catalog at startup")?;
    info!(sections = catalog.len(), "course catalog loaded");

    let app_state = AppState {
        catalog: Arc::new(catalog),
    };
    let app = router::app_router(app_state);

    let bind_addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    println!(
        "Class search listening on {} (visit http://127.0.0.1:{})",
        bind_addr, config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
