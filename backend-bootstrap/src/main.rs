use anyhow::Result;
use clap::Parser;
use tracing::info;

use backend_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "siglon-backend")]
#[command(about = "Siglon landslide reporting backend", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("SIGLON_CONFIG", config);
    }

    // Config warnings are emitted before the configured subscriber exists.
    let config = {
        let _startup_log = backend_bootstrap::startup_subscriber();
        AppConfig::load().await?
    };
    let _log_guard = backend_bootstrap::init_tracing(&config)?;
    info!(
        config = %AppConfig::config_path(),
        store_backend = %config.store_backend,
        "configuration loaded"
    );

    backend_bootstrap::run_standalone(config).await
}
