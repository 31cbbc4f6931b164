use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use hub_infrastructure::{AppConfig, CONFIG_PATH_ENV};

#[derive(Parser, Debug)]
#[command(name = "resident-hub")]
#[command(about = "Resident Hub community service", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,
}

/// Console output always; daily rolling files as well when `log_dir` is set.
fn init_tracing(log_dir: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());
    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "resident-hub.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var(CONFIG_PATH_ENV, config);
    }

    // loaded before logging is up so the log directory can come from the file
    let config = AppConfig::load().await?;
    let _log_guard = init_tracing(config.log_dir.as_deref());
    let path = AppConfig::path();
    if Path::new(&path).exists() {
        info!("configuration loaded from {}", path);
    } else {
        warn!("{} not found, running with defaults", path);
    }

    hub_bootstrap::run_with_config(config).await
}
