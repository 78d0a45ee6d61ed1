use crate::domains::animation::DEFAULT_SCALE_FACTOR;
use crate::domains::field::{MapPreset, NodeId};
use crate::domains::scene::AssetKind;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides `assets.dir` when set.
pub const ASSET_DIR_ENV: &str = "TAPFIELD_ASSET_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub assets: AssetConfig,
    pub animation: AnimationConfig,
    pub render: RenderConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub preset: MapPreset,
    /// Taps with running water; `None` opens the default tap.
    pub open_taps: Option<Vec<NodeId>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub dir: Option<PathBuf>,
    pub running_tap: String,
    pub closed_tap: String,
    pub agent: String,
    pub background: String,
    pub obstacle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Delay between interactive steps.
    pub step_interval_ms: u64,
    /// Display time of each exported frame.
    pub frame_duration_ms: u32,
    /// GIF repeat count written into the artifact.
    pub loop_count: u16,
    pub scale_factor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub pixels_per_unit: u32,
    /// NeuQuant speed, 1 (best) to 30 (fastest).
    pub gif_speed: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Placed between the caller's prefix and the timestamp.
    pub separator: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write diagnostics to this file through fast_log.
    pub file: Option<String>,
    pub level: String,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

impl AssetConfig {
    pub fn file_name(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::RunningTap => &self.running_tap,
            AssetKind::ClosedTap => &self.closed_tap,
            AssetKind::Agent => &self.agent,
            AssetKind::Background => &self.background,
            AssetKind::Obstacle => &self.obstacle,
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: None,
            running_tap: "runningTap.png".to_string(),
            closed_tap: "closedTap.png".to_string(),
            agent: "human.png".to_string(),
            background: "field.jpeg".to_string(),
            obstacle: "rock.png".to_string(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 1000,
            frame_duration_ms: 1000,
            loop_count: 1,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: 50,
            gif_speed: 10,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            separator: "_".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
