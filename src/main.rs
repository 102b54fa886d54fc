use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use versepick::core::catalog::Catalog;
use versepick::core::config::{self, CliOverrides};
use versepick::tui;

#[derive(Parser)]
#[command(name = "versepick", about = "Pick a scripture passage and insert its text")]
struct Args {
    /// Verse-count catalog to use instead of the bundled one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Translation passed to the lookup service (e.g. web, kjv)
    #[arg(short, long)]
    translation: Option<String>,

    /// Lookup service base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Lookup timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to versepick.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("versepick.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Ignoring config file: {}", e);
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            catalog: args.catalog,
            translation: args.translation,
            base_url: args.base_url,
            timeout_secs: args.timeout,
        },
    );
    info!(
        "Versepick starting up (base_url={}, translation={}, timeout={:?})",
        resolved.base_url, resolved.translation, resolved.timeout
    );

    let catalog = Catalog::load_or_empty(resolved.catalog_path.as_deref());
    let document = tui::run(resolved, catalog)?;

    if !document.is_empty() {
        println!("{document}");
    }
    Ok(())
}
