//! SafeLens CLI - relay and submit uploads to the content analysis service
//!
//! ```bash
//! safelens serve --static-dir frontend/dist     # Gateway + frontend on port 3000
//! safelens analyze holiday.jpg                  # Analyze one file, print the verdict
//! safelens analyze clip.mp4 --json              # Print the decoded result as JSON
//! ```

use clap::{Parser, Subcommand};
use safelens::config::{
    megabytes, GatewayConfig, DEFAULT_MAX_UPLOAD_MB, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_UPSTREAM,
};
use safelens::AnalyzeClient;
use safelens_core::{render_error, render_result, Mode};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "safelens")]
#[command(about = "Submit images and videos to a content-safety analysis service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway (serves the frontend, relays /analyze)
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "SAFELENS_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Analysis service base URL
        #[arg(short, long, env = "SAFELENS_UPSTREAM", default_value = DEFAULT_UPSTREAM)]
        upstream: String,

        /// Directory holding the built frontend
        #[arg(short, long, env = "SAFELENS_STATIC_DIR")]
        static_dir: Option<PathBuf>,

        /// Upstream request timeout in seconds
        #[arg(long, env = "SAFELENS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        /// Largest accepted upload in megabytes
        #[arg(long, env = "SAFELENS_MAX_UPLOAD_MB", default_value_t = DEFAULT_MAX_UPLOAD_MB)]
        max_upload_mb: usize,
    },

    /// Upload one file and print the verdict
    Analyze {
        /// Image or video file
        file: PathBuf,

        /// Force the mode (image or video) instead of guessing from the extension
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Analysis endpoint or base URL
        #[arg(short, long, env = "SAFELENS_UPSTREAM", default_value = DEFAULT_UPSTREAM)]
        endpoint: String,

        /// Request timeout in seconds
        #[arg(long, env = "SAFELENS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        /// Print the decoded result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    // RUST_LOG controls verbosity (defaults to "info")
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            upstream,
            static_dir,
            timeout_secs,
            max_upload_mb,
        } => {
            let config = GatewayConfig {
                port,
                upstream,
                static_dir,
                timeout: Duration::from_secs(timeout_secs),
                max_upload_bytes: megabytes(max_upload_mb),
            };
            cmd_serve(config).await
        }

        Commands::Analyze {
            file,
            mode,
            endpoint,
            timeout_secs,
            json,
        } => cmd_analyze(&file, mode, &endpoint, timeout_secs, json).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    safelens::server::start_server(config).await
}

async fn cmd_analyze(
    file: &Path,
    mode: Option<Mode>,
    endpoint: &str,
    timeout_secs: u64,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = AnalyzeClient::new(endpoint, Duration::from_secs(timeout_secs))?;

    match client.analyze_path(file, mode).await {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", render_result(&result).plain_text());
            }
            Ok(())
        }
        Err(safelens::ClientError::Analysis(err)) => {
            eprintln!("{}", render_error(&err).plain_text());
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
