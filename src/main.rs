use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use obamafy::error::RenderError;
use obamafy::models::config::check_threshold;
use obamafy::models::{RenderConfig, RenderOverrides, CONFIG_ENV};
use obamafy::services::RenderService;

#[derive(Parser)]
#[command(name = "obamafy")]
#[command(about = "Turn a photo into a four-tone campaign-style poster")]
struct Cli {
    /// Input image (any format the image crate can decode)
    #[arg(value_parser = existing_path)]
    input: PathBuf,

    /// Output PNG path [default: <input stem>_obamafied.png next to the input]
    output: Option<PathBuf>,

    /// Bits kept per channel before tone mapping (1-8) [default: 3]
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=8))]
    posterization: Option<u8>,

    /// Percent of image area painted with the dark tone [default: 15]
    #[arg(short, long, value_parser = dark_threshold)]
    dark_threshold: Option<f64>,

    /// Percent of image area at which the accent band ends [default: 50]
    #[arg(short, long, value_parser = accent_threshold)]
    accent_threshold: Option<f64>,

    /// Median filter window; even values are rounded up [default: 5]
    #[arg(short, long)]
    median: Option<u32>,

    /// YAML config file (falls back to $OBAMAFY_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn existing_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(RenderError::InputNotFound(path).to_string())
    }
}

fn parse_threshold(name: &'static str, value: &str) -> Result<f64, String> {
    let value: f64 = value
        .parse()
        .map_err(|e| format!("{value:?} is not a number: {e}"))?;
    check_threshold(name, value).map_err(|e| e.to_string())
}

fn dark_threshold(value: &str) -> Result<f64, String> {
    parse_threshold("dark", value)
}

fn accent_threshold(value: &str) -> Result<f64, String> {
    parse_threshold("accent", value)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the output path
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "obamafy=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_file = cli
        .config
        .clone()
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

    let overrides = RenderOverrides {
        dark_threshold: cli.dark_threshold,
        accent_threshold: cli.accent_threshold,
        posterization: cli.posterization,
        median: cli.median,
    };
    let config = RenderConfig::load_optional(config_file.as_deref())?.with_overrides(&overrides);

    let service = RenderService::new(config)?;
    let outcome = service.render_file(&cli.input, cli.output.as_deref())?;

    eprintln!("{}", outcome.report);
    if let Some(path) = outcome.output_path {
        println!("{}", path.display());
    }

    Ok(())
}
