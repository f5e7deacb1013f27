use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;

mod config;
mod gateways;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(version, about = "Delivery route optimization service")]
struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_deref())?;

    let geocoding = gateways::geocoding_gateway(&cfg.geocoding)?;
    let enable_cors = args.enable_cors || cfg.webserver.cors;
    if enable_cors {
        log::info!("CORS is enabled");
    }

    rotaplan_webserver::run(enable_cors, Arc::new(geocoding), VERSION).await;
    Ok(())
}
