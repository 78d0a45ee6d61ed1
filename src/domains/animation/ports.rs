use super::recorder::Snapshot;
use crate::common::DomainResult;
use crate::domains::field::{Extent, NodeId};
use async_trait::async_trait;
use image::RgbaImage;
use std::path::PathBuf;

/// One frame of interactive playback, borrowed from the session surface.
#[derive(Debug)]
pub struct PresentedFrame<'a> {
    pub index: usize,
    pub total: usize,
    pub node: NodeId,
    pub extent: Extent,
    pub surface: &'a RgbaImage,
}

/// Port for whatever shows interactive playback (terminal, window, test probe).
#[async_trait]
pub trait FramePresenter: Send {
    async fn present(&mut self, frame: &PresentedFrame<'_>) -> DomainResult<()>;

    /// Called once after the last step.
    async fn finish(&mut self) -> DomainResult<()> {
        Ok(())
    }
}

/// Port for turning recorded snapshots into a single animation file.
pub trait ArtifactEncoder: Send + Sync {
    /// Encode `snapshots` in order and return the written path.
    fn encode(&self, snapshots: &[Snapshot], prefix: &str) -> DomainResult<PathBuf>;
}
