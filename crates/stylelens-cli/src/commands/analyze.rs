use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use stylelens_core::client::ApiClient;
use stylelens_core::config::ClientConfig;

use crate::summary;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Outfit photo to submit (PNG or JPG)
    pub image: PathBuf,

    /// Analysis service base URL (overrides config file and environment)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// TOML config file with service settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (0 = no timeout)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the raw JSON response instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    }
    .with_env_overrides();

    if let Some(ref url) = args.base_url {
        config.base_url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    let client = ApiClient::new(&config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Analyzing {}...", args.image.display()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = client.analyze_outfit_file(&args.image);
    spinner.finish_and_clear();

    let result = outcome.with_context(|| {
        format!(
            "Failed to analyze {} against {}",
            args.image.display(),
            config.base_url
        )
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        summary::print_analysis_summary(&result);
    }

    Ok(())
}
