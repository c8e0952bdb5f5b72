//! webprof command line tool
//!
//! Fetches a URL once, or profiles it with concurrent requests.

use clap::Parser;
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use webprof::{run_single, HttpClient, Profiler, Scheme, APP_NAME, VERSION};
use webprof::common::{init_logger, Result};
use webprof::config::{load_config, validate_config};

/// Minimal HTTP/HTTPS client and latency profiler
#[derive(Parser, Debug)]
#[clap(author, version = VERSION, about, long_about = None)]
struct Args {
    /// URL to fetch, with or without an http:// or https:// prefix
    #[clap(long)]
    url: Option<String>,

    /// Use HTTPS (TLS, port 443) instead of plain HTTP (port 80)
    #[clap(long)]
    https: bool,

    /// Number of concurrent requests to profile; 0 fetches once and prints the body
    #[clap(long, default_value_t = 0)]
    profile: usize,

    /// Load configuration from a JSON file
    #[clap(long)]
    config_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long)]
    log_level: Option<String>,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[clap(long)]
    timeout: Option<u64>,

    /// Maximum number of profiling requests in flight (default: all at once)
    #[clap(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config_file.as_deref())?
        .with_overrides(args.log_level, args.timeout, args.concurrency);

    // Validation warnings need the logger
    init_logger(&config.log_level);
    info!("Starting {} v{}", APP_NAME, VERSION);
    if let Some(path) = &args.config_file {
        info!("Configuration loaded from {}", path.display());
    }

    validate_config(&config)?;
    debug!("Configuration: {:?}", config);

    let url = match args.url.filter(|url| !url.is_empty()) {
        Some(url) => url,
        None => {
            println!("URL not specified!");
            return Ok(());
        }
    };

    let scheme = Scheme::from_https_flag(args.https);
    let config = Arc::new(config);
    let client = HttpClient::new(scheme, Arc::clone(&config))?;

    if args.profile > 0 {
        let report = Profiler::new(Arc::new(client))
            .with_max_concurrency(config.max_concurrency)
            .run(&url, args.profile)
            .await;
        print!("{}", report);
    } else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        run_single(&client, &url, &mut out).await?;
        out.flush()?;
    }

    Ok(())
}
