use super::actors::AnimationEventPublisher;
use super::controller::{AnimationController, Playback, Step};
use crate::common::DomainResult;
use crate::domains::field::NodeId;
use crate::domains::logger::DomainLogger;
use crate::domains::scene::Canvas;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use tracing::debug;

pub const NOTHING_TO_SAVE: &str = "Nothing to be saved";

/// A captured frame. Owns its pixels; nothing ties it back to the canvas.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub index: usize,
    pub node: NodeId,
    pub image: RgbaImage,
}

/// Renders and captures one bitmap per movement, in order.
pub struct FrameRecorder<'a> {
    controller: &'a AnimationController,
    logger: &'a dyn DomainLogger,
    events: &'a AnimationEventPublisher,
}

impl<'a> FrameRecorder<'a> {
    pub fn new(
        controller: &'a AnimationController,
        logger: &'a dyn DomainLogger,
        events: &'a AnimationEventPublisher,
    ) -> Self {
        Self {
            controller,
            logger,
            events,
        }
    }

    /// Capture every step of `movements` on `canvas`.
    ///
    /// Holding `&mut Canvas` for the whole call keeps capture strictly
    /// sequential. An empty sequence logs [`NOTHING_TO_SAVE`] and yields no
    /// snapshots.
    pub fn record(&self, canvas: &mut Canvas, movements: &[NodeId]) -> DomainResult<Vec<Snapshot>> {
        if movements.is_empty() {
            self.logger.info(NOTHING_TO_SAVE);
            self.events.save_skipped(NOTHING_TO_SAVE);
            return Ok(Vec::new());
        }

        let mut snapshots = Vec::with_capacity(movements.len());
        for index in Playback::new(movements.len()) {
            if let Step::Move(extent) = self.controller.step(index, movements)? {
                canvas.place_agent(extent);
            }
            let image = capture(canvas.render())?;
            let node = movements[index];
            debug!(index, node, "captured frame");
            self.events.frame_captured(index, node);
            snapshots.push(Snapshot { index, node, image });
        }
        Ok(snapshots)
    }
}

/// Round-trip the surface through an in-memory PNG. The encode buffer lives
/// only inside this call, so at most one exists at a time.
fn capture(surface: &RgbaImage) -> DomainResult<RgbaImage> {
    let mut buffer = Cursor::new(Vec::new());
    surface.write_to(&mut buffer, ImageFormat::Png)?;
    let bitmap = image::load_from_memory_with_format(buffer.get_ref(), ImageFormat::Png)?.to_rgba8();
    drop(buffer);
    Ok(bitmap)
}
