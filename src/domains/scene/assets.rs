use crate::common::DomainResult;
use crate::domains::field::MapPreset;
use image::RgbaImage;
use std::fmt;

/// Images a session needs before it can draw anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    RunningTap,
    ClosedTap,
    Agent,
    Background,
    Obstacle,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::RunningTap => "running tap",
            AssetKind::ClosedTap => "closed tap",
            AssetKind::Agent => "agent",
            AssetKind::Background => "background",
            AssetKind::Obstacle => "obstacle",
        };
        f.write_str(name)
    }
}

/// Port for loading scene images (filesystem, embedded, generated in tests...).
pub trait AssetSource: Send + Sync {
    fn load_image(&self, kind: AssetKind) -> DomainResult<RgbaImage>;
}

/// Decoded images for one session.
#[derive(Debug, Clone)]
pub struct SceneAssets {
    pub running_tap: RgbaImage,
    pub closed_tap: RgbaImage,
    pub agent: RgbaImage,
    pub background: RgbaImage,
    pub obstacle: Option<RgbaImage>,
}

impl SceneAssets {
    /// Load everything `preset` needs. The first failure aborts the load.
    pub fn load(source: &dyn AssetSource, preset: MapPreset) -> DomainResult<Self> {
        let obstacle = if preset.has_obstacles() {
            Some(source.load_image(AssetKind::Obstacle)?)
        } else {
            None
        };
        Ok(Self {
            running_tap: source.load_image(AssetKind::RunningTap)?,
            closed_tap: source.load_image(AssetKind::ClosedTap)?,
            agent: source.load_image(AssetKind::Agent)?,
            background: source.load_image(AssetKind::Background)?,
            obstacle,
        })
    }
}
