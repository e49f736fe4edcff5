use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epaper_convert::{AppConfig, Converter, Overrides};

#[derive(Parser)]
#[command(name = "epaper-convert")]
#[command(about = "Convert an image for a 7-color ACeP e-paper display")]
#[command(version)]
struct Cli {
    /// Image to convert (any format the image crate can read)
    input: PathBuf,

    /// Output file; .png writes an indexed PNG, other extensions write RGB
    output: PathBuf,

    /// Output width in pixels, 1 to 16384 [default: 800]
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels, 1 to 16384 [default: 480]
    #[arg(long)]
    height: Option<u32>,

    /// Saturation factor, 1.0 leaves colors unchanged [default: 1.5]
    #[arg(long)]
    saturation: Option<f32>,

    /// YAML config file (width, height, saturation, preview, palette)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write measured colors to preview how the panel will look
    #[arg(long)]
    preview: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "epaper_convert=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    let config = config.with_overrides(Overrides {
        width: cli.width,
        height: cli.height,
        saturation: cli.saturation,
        preview: cli.preview,
    });

    let converter = Converter::from_config(&config).context("Invalid settings")?;
    converter
        .convert(&cli.input, &cli.output)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    println!("✓ Converted: {}", cli.output.display());
    Ok(())
}
