// Animation event publishing - fire and forget, events are observational only
use super::events::AnimationEvent;
use crate::domains::field::{Extent, MapPreset, NodeId};
use chrono::Utc;
use std::path::Path;
use tokio::sync::mpsc;
use tracing::warn;

pub struct AnimationEventPublisher {
    session_id: String,
    event_sender: Option<mpsc::UnboundedSender<AnimationEvent>>,
}

impl AnimationEventPublisher {
    pub fn new(session_id: String, event_sender: Option<mpsc::UnboundedSender<AnimationEvent>>) -> Self {
        Self {
            session_id,
            event_sender,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn attach(&mut self, event_sender: mpsc::UnboundedSender<AnimationEvent>) {
        self.event_sender = Some(event_sender);
    }

    pub fn playback_started(&self, preset: MapPreset, frames: usize) {
        self.send(AnimationEvent::PlaybackStarted {
            session_id: self.session_id.clone(),
            preset,
            frames,
            timestamp: Utc::now(),
        });
    }

    pub fn step_advanced(&self, index: usize, node: NodeId, extent: Extent) {
        self.send(AnimationEvent::StepAdvanced {
            session_id: self.session_id.clone(),
            index,
            node,
            extent,
            timestamp: Utc::now(),
        });
    }

    pub fn playback_finished(&self, steps: usize) {
        self.send(AnimationEvent::PlaybackFinished {
            session_id: self.session_id.clone(),
            steps,
            timestamp: Utc::now(),
        });
    }

    pub fn frame_captured(&self, index: usize, node: NodeId) {
        self.send(AnimationEvent::FrameCaptured {
            session_id: self.session_id.clone(),
            index,
            node,
            timestamp: Utc::now(),
        });
    }

    pub fn artifact_written(&self, path: &Path, frames: usize) {
        self.send(AnimationEvent::ArtifactWritten {
            session_id: self.session_id.clone(),
            path: path.display().to_string(),
            frames,
            timestamp: Utc::now(),
        });
    }

    pub fn save_skipped(&self, reason: &str) {
        self.send(AnimationEvent::SaveSkipped {
            session_id: self.session_id.clone(),
            reason: reason.to_string(),
            timestamp: Utc::now(),
        });
    }

    fn send(&self, event: AnimationEvent) {
        if let Some(sender) = &self.event_sender {
            if let Err(e) = sender.send(event) {
                warn!(session_id = %self.session_id, "Dropped animation event: {}", e);
            }
        }
    }
}
