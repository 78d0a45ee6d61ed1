use clap::Parser;
use std::path::{Path, PathBuf};
use tapfield::adapters::outbound::{init_combined_logger, init_console_logger, init_tracing};
use tapfield::application::{Environment, SessionInput};
use tapfield::common::{ApplicationResult, DomainError, EventEnvelope};
use tapfield::Config;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "tapfield",
    version,
    about = "Replay a tap-field search session as an animation or GIF"
)]
struct Cli {
    /// Session JSON produced by the search agent (stats and movements).
    session: PathBuf,

    /// TOML configuration file; defaults are used when it does not exist.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Save the traversal as `<prefix>_<timestamp>.gif`.
    #[arg(long, value_name = "PREFIX")]
    save: Option<String>,

    /// Skip interactive playback.
    #[arg(long)]
    no_display: bool,
}

#[tokio::main]
async fn main() -> ApplicationResult<()> {
    let args = Cli::parse();
    init_tracing()?;

    let mut config = if Path::new(&args.config).exists() {
        Config::from_file(&args.config).await?
    } else {
        warn!("{} not found, using default configuration", args.config.display());
        Config::default()
    };

    let session = SessionInput::from_file(&args.session).await?;
    if let Some(preset) = session.preset {
        config.session.preset = preset;
    }
    if let Some(open_taps) = &session.open_taps {
        config.session.open_taps = Some(open_taps.iter().copied().collect());
    }

    let logger = match &config.logging.file {
        Some(path) => init_combined_logger(path, config.logging.level_filter()),
        None => init_console_logger(),
    };

    // Mirror animation events into the trace log as JSON envelopes.
    let (event_sender, mut event_receiver) = mpsc::unbounded_channel();
    let event_sink = tokio::spawn(async move {
        while let Some(event) = event_receiver.recv().await {
            match EventEnvelope::new(&event, "tapfield") {
                Ok(envelope) => match serde_json::to_string(&envelope) {
                    Ok(json) => debug!(target: "tapfield::events", "{}", json),
                    Err(e) => warn!("Failed to serialize event envelope: {}", e),
                },
                Err(e) => warn!("Failed to wrap event: {}", e),
            }
        }
    });

    let mut environment = Environment::from_config(&config, logger)?.with_event_sender(event_sender);
    info!(session_id = %environment.session_id(), preset = %config.session.preset, "Starting tapfield session");

    if !args.no_display {
        environment
            .display_animation(&session.stats, &session.movements)
            .await?;
    }
    if let Some(prefix) = &args.save {
        environment.save_animation(&session.movements, prefix)?;
    }

    drop(environment);
    event_sink
        .await
        .map_err(|e| DomainError::InfrastructureError(format!("Event sink failed: {}", e)))?;
    Ok(())
}
