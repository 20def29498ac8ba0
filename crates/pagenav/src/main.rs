use pagenav::{config::NavConfig, run_server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = NavConfig::from_env();

    tracing::info!(
        max_pages = config.max_pages,
        per_page = config.per_page,
        page_param = %config.page_param,
        "Loaded configuration"
    );

    run_server(config).await
}
