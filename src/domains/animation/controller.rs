use crate::common::{DomainError, DomainResult};
use crate::domains::field::{Extent, GraphModel, NodeId};
use std::sync::Arc;

/// Agent bounding box side, in field units.
pub const DEFAULT_SCALE_FACTOR: f64 = 2.0;

/// What a playback step does to the agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Move the agent to this extent.
    Move(Extent),
    /// Past the end of the sequence: leave the agent where it is.
    Hold,
}

/// Turns a movement sequence into per-step agent placements.
#[derive(Debug, Clone)]
pub struct AnimationController {
    graph: Arc<GraphModel>,
    scale_factor: f64,
}

impl AnimationController {
    pub fn new(graph: Arc<GraphModel>, scale_factor: f64) -> Self {
        Self { graph, scale_factor }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// `[x - s/2, x + s/2, y - s/2, y + s/2]` around the node's coordinate.
    pub fn scaled_extent(&self, node: NodeId) -> DomainResult<Extent> {
        let position = self.graph.coordinate(node)?;
        Ok(Extent::centered(position, self.scale_factor))
    }

    /// Placement for step `index`. Indices past the end yield [`Step::Hold`].
    pub fn step(&self, index: usize, movements: &[NodeId]) -> DomainResult<Step> {
        match movements.get(index) {
            Some(node) => Ok(Step::Move(self.scaled_extent(*node)?)),
            None => Ok(Step::Hold),
        }
    }

    /// Reject sequences naming nodes that have no coordinate. Adjacency
    /// between consecutive entries is not checked.
    pub fn validate(&self, movements: &[NodeId]) -> DomainResult<()> {
        match movements.iter().find(|node| !self.graph.contains(**node)) {
            Some(node) => Err(DomainError::UnknownNode { node: *node }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Pending,
    Running { next: usize },
    Finished,
}

/// Cursor over `0..len`, handing out each index exactly once.
#[derive(Debug, Clone)]
pub struct Playback {
    len: usize,
    state: PlaybackState,
}

impl Playback {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: PlaybackState::Pending,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    pub fn advance(&mut self) -> Option<usize> {
        let current = match self.state {
            PlaybackState::Pending => 0,
            PlaybackState::Running { next } => next,
            PlaybackState::Finished => return None,
        };
        if current < self.len {
            self.state = PlaybackState::Running { next: current + 1 };
            Some(current)
        } else {
            self.state = PlaybackState::Finished;
            None
        }
    }
}

impl Iterator for Playback {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.advance()
    }
}
