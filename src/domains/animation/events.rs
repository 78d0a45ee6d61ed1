use crate::common::DomainEvent;
use crate::domains::field::{Extent, MapPreset, NodeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnimationEvent {
    PlaybackStarted {
        session_id: String,
        preset: MapPreset,
        frames: usize,
        timestamp: DateTime<Utc>,
    },
    StepAdvanced {
        session_id: String,
        index: usize,
        node: NodeId,
        extent: Extent,
        timestamp: DateTime<Utc>,
    },
    PlaybackFinished {
        session_id: String,
        steps: usize,
        timestamp: DateTime<Utc>,
    },
    FrameCaptured {
        session_id: String,
        index: usize,
        node: NodeId,
        timestamp: DateTime<Utc>,
    },
    ArtifactWritten {
        session_id: String,
        path: String,
        frames: usize,
        timestamp: DateTime<Utc>,
    },
    SaveSkipped {
        session_id: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for AnimationEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AnimationEvent::PlaybackStarted { .. } => "PlaybackStarted",
            AnimationEvent::StepAdvanced { .. } => "StepAdvanced",
            AnimationEvent::PlaybackFinished { .. } => "PlaybackFinished",
            AnimationEvent::FrameCaptured { .. } => "FrameCaptured",
            AnimationEvent::ArtifactWritten { .. } => "ArtifactWritten",
            AnimationEvent::SaveSkipped { .. } => "SaveSkipped",
        }
    }

    fn session_id(&self) -> &str {
        match self {
            AnimationEvent::PlaybackStarted { session_id, .. } => session_id,
            AnimationEvent::StepAdvanced { session_id, .. } => session_id,
            AnimationEvent::PlaybackFinished { session_id, .. } => session_id,
            AnimationEvent::FrameCaptured { session_id, .. } => session_id,
            AnimationEvent::ArtifactWritten { session_id, .. } => session_id,
            AnimationEvent::SaveSkipped { session_id, .. } => session_id,
        }
    }

    fn event_version(&self) -> u64 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            AnimationEvent::PlaybackStarted { timestamp, .. } => *timestamp,
            AnimationEvent::StepAdvanced { timestamp, .. } => *timestamp,
            AnimationEvent::PlaybackFinished { timestamp, .. } => *timestamp,
            AnimationEvent::FrameCaptured { timestamp, .. } => *timestamp,
            AnimationEvent::ArtifactWritten { timestamp, .. } => *timestamp,
            AnimationEvent::SaveSkipped { timestamp, .. } => *timestamp,
        }
    }
}
