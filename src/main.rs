use anyhow::{Context, Result, anyhow, bail};
use cardamom_client::{
    config::{self, Config},
    diagnosis::Diagnosis,
    image::ImageSource,
    prediction::PredictionService,
    reference,
};
use std::io::IsTerminal;
use tracing::{error, info};

const USAGE: &str = "Usage:
  cardamom predict <image> [heatmap.png]
  cardamom health
  cardamom disease <id>
  cardamom diseases";

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    // Environment variable overrides config and may carry full directives
    let log_level = match std::env::var("RUST_LOG") {
        Ok(directives) => directives,
        Err(_) => {
            validate_log_level(&config.logs.level)?;
            config.logs.level.clone()
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .with_context(|| format!("Invalid log filter: '{}'", log_level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.logs.json {
        builder.json().init();
    } else {
        builder
            .with_ansi(std::io::stderr().is_terminal())
            .init();
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(config: Config, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("predict") => {
            let path = args.get(1).ok_or_else(|| anyhow!("missing image path\n{}", USAGE))?;
            let service = PredictionService::from_config(&config.api);

            let image = ImageSource::from_path(path)
                .await
                .with_context(|| format!("Failed to read image: {}", path))?;
            let prediction = service.predict(image).await?;

            if let Some(heatmap_path) = args.get(2) {
                tokio::fs::write(heatmap_path, prediction.heatmap_png()?)
                    .await
                    .with_context(|| format!("Failed to write heatmap: {}", heatmap_path))?;
                info!("Heatmap written to {}", heatmap_path);
            }

            print_json(&Diagnosis::from_prediction(prediction))
        }
        Some("health") => {
            let service = PredictionService::from_config(&config.api);
            let health = service.health_check().await?;
            print_json(&health)?;
            if !health.is_ok() {
                bail!("Service reported status '{}'", health.status);
            }
            Ok(())
        }
        Some("disease") => {
            let id = args.get(1).ok_or_else(|| anyhow!("missing disease id\n{}", USAGE))?;
            let record = reference::resolve_by_id(id)
                .or_else(|| reference::resolve_by_class_label(id))
                .ok_or_else(|| anyhow!("No reference material for '{}'", id))?;
            print_json(record)
        }
        Some("diseases") => print_json(&reference::all_records()),
        _ => bail!("{}", USAGE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("Using inference service at {}", config.api.base_url);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(config, &args).await {
        error!("{:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
