use super::presets::TapValidation;
use super::types::{NodeId, DEFAULT_OPEN_TAP};
use crate::domains::logger::DomainLogger;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const INVALID_TAP_MESSAGE: &str = "Invalid node selected, defaulted to node 7";

/// Open/closed classification of the taps, fixed for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapState {
    open: BTreeSet<NodeId>,
    closed: BTreeSet<NodeId>,
    fell_back: bool,
}

impl TapState {
    /// Split `nodes` into open and closed taps.
    ///
    /// `None` requests the default tap. Under [`TapValidation::Strict`] a
    /// request naming any unknown node is replaced wholesale by the default
    /// and a warning is logged. Under [`TapValidation::Lenient`] the request
    /// is kept as given, unknown ids included; those ids simply never match a
    /// field node.
    pub fn classify(
        requested: Option<&BTreeSet<NodeId>>,
        nodes: &BTreeSet<NodeId>,
        validation: TapValidation,
        logger: &dyn DomainLogger,
    ) -> Self {
        let default_set = || BTreeSet::from([DEFAULT_OPEN_TAP]);
        let mut open = requested.cloned().unwrap_or_else(default_set);
        let mut fell_back = false;

        if validation == TapValidation::Strict && !open.is_subset(nodes) {
            logger.warn(INVALID_TAP_MESSAGE);
            open = default_set();
            fell_back = true;
        }

        let closed = nodes.difference(&open).copied().collect();
        Self { open, closed, fell_back }
    }

    pub fn open(&self) -> &BTreeSet<NodeId> {
        &self.open
    }

    pub fn closed(&self) -> &BTreeSet<NodeId> {
        &self.closed
    }

    pub fn is_open(&self, node: NodeId) -> bool {
        self.open.contains(&node)
    }

    /// True when the requested set was discarded for the default.
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    /// Open ids that are not field nodes (only possible under lenient validation).
    pub fn unknown_open(&self, nodes: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
        self.open.difference(nodes).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::init_noop_logger;

    fn nodes(n: NodeId) -> BTreeSet<NodeId> {
        (1..=n).collect()
    }

    #[test]
    fn test_default_request_opens_tap_seven() {
        let logger = init_noop_logger();
        let taps = TapState::classify(None, &nodes(25), TapValidation::Strict, logger.as_ref());
        assert_eq!(taps.open(), &BTreeSet::from([7]));
        assert_eq!(taps.closed().len(), 24);
        assert!(!taps.fell_back());
    }

    #[test]
    fn test_empty_request_closes_everything() {
        let logger = init_noop_logger();
        let requested = BTreeSet::new();
        let taps = TapState::classify(Some(&requested), &nodes(50), TapValidation::Strict, logger.as_ref());
        assert!(taps.open().is_empty());
        assert_eq!(taps.closed().len(), 50);
    }

    #[test]
    fn test_strict_discards_partially_valid_request() {
        let logger = init_noop_logger();
        let requested = BTreeSet::from([3, 51]);
        let taps = TapState::classify(Some(&requested), &nodes(50), TapValidation::Strict, logger.as_ref());
        assert_eq!(taps.open(), &BTreeSet::from([7]));
        assert!(taps.fell_back());
    }
}
