use anyhow::Result;
use tracing_subscriber::EnvFilter;

use dental_catalog::constants;
use dental_catalog::Application;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(id = constants::APP_ID, version = constants::APP_VERSION, "starting {}", constants::APP_TITLE);
    Application::new().activate(&mut std::io::stdout()).await
}
