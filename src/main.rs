use std::fs::File;
use std::path::PathBuf;

use checkmenu::config::{self, CliOverrides, MenuConfig};
use checkmenu::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "checkmenu", about = "Checkbox menu that fires HTTP requests")]
struct Args {
    /// Base URL the endpoint paths are joined to
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Config file (defaults to ~/.checkmenu/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the log; the terminal itself is taken by the UI
    #[arg(long, default_value = "checkmenu.log")]
    log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    log::info!("checkmenu starting up");

    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        MenuConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            timeout_secs: args.timeout_secs,
        },
    );
    log::info!("Endpoints: {:?}", resolved.endpoints);

    tui::run(resolved)
}
