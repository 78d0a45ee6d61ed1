mod common;

use std::collections::BTreeSet;
use std::sync::Arc;
use tapfield::domains::animation::{AnimationController, Step, DEFAULT_SCALE_FACTOR};
use tapfield::domains::field::*;

#[cfg(test)]
mod graph_model_tests {
    use super::*;

    #[test]
    fn test_every_neighbor_has_a_coordinate() {
        for preset in MapPreset::ALL {
            let graph = GraphModel::new(preset);
            assert_eq!(graph.node_count(), preset.node_count());
            assert!(graph.dangling_neighbors().is_empty(), "{} has dangling neighbors", preset);
            for node in graph.nodes() {
                for neighbor in graph.neighbors(node).unwrap() {
                    assert!(graph.coordinate(neighbor).is_ok());
                }
            }
        }
    }

    #[test]
    fn test_field25_covers_eight_by_eight() {
        let graph = GraphModel::new(MapPreset::Field25);
        assert_eq!(graph.coordinate(1).unwrap(), Position2D { x: 0.0, y: 8.0 });
        assert_eq!(graph.coordinate(13).unwrap(), Position2D { x: 4.0, y: 4.0 });
        assert_eq!(graph.coordinate(25).unwrap(), Position2D { x: 8.0, y: 0.0 });
        assert!(graph.obstacles().is_empty());
        assert!(graph.self_loops().is_empty());
    }

    #[test]
    fn test_field50_bridges_two_blocks() {
        let graph = GraphModel::new(MapPreset::Field50);
        assert_eq!(graph.coordinate(30).unwrap(), Position2D { x: 18.0, y: 8.0 });
        assert_eq!(graph.neighbors(21).unwrap(), vec![16, 22, 26]);
        assert_eq!(graph.neighbors(32).unwrap(), vec![20, 27, 31, 33, 37]);
        assert_eq!(graph.obstacles(), &BTreeSet::from([17, 33, 45]));
    }

    // Node 4 of the 50-node survey lists itself. Kept verbatim until the
    // survey is corrected upstream.
    #[test]
    fn test_field50_self_loop_is_preserved() {
        let graph = GraphModel::new(MapPreset::Field50);
        assert_eq!(graph.self_loops(), vec![4]);
        assert_eq!(graph.neighbors(4).unwrap(), vec![3, 4, 9]);
    }

    #[test]
    fn test_obstacles_keep_their_edges() {
        let graph = GraphModel::new(MapPreset::Field50);
        for rock in graph.obstacles() {
            assert!(!graph.neighbors(*rock).unwrap().is_empty());
        }
        assert!(graph.neighbors(12).unwrap().contains(&17));
    }
}

#[cfg(test)]
mod tap_state_tests {
    use super::*;

    fn assert_partition(taps: &TapState, nodes: &BTreeSet<NodeId>) {
        let open_on_field: BTreeSet<NodeId> = taps.open().intersection(nodes).copied().collect();
        assert!(open_on_field.is_disjoint(taps.closed()));
        let union: BTreeSet<NodeId> = open_on_field.union(taps.closed()).copied().collect();
        assert_eq!(&union, nodes);
    }

    #[test]
    fn test_partition_holds_for_any_request() {
        let requests: Vec<Option<BTreeSet<NodeId>>> = vec![
            None,
            Some(BTreeSet::new()),
            Some(BTreeSet::from([1])),
            Some(BTreeSet::from([7, 8, 25])),
            Some(BTreeSet::from([999])),
            Some(BTreeSet::from([0, 3])),
            Some((1..=50).collect()),
        ];
        for preset in MapPreset::ALL {
            let graph = GraphModel::new(preset);
            let nodes = graph.nodes();
            for requested in &requests {
                let (_capture, logger) = common::capture_logger();
                let taps = TapState::classify(
                    requested.as_ref(),
                    &nodes,
                    preset.layout().validation,
                    logger.as_ref(),
                );
                assert_partition(&taps, &nodes);
            }
        }
    }

    #[test]
    fn test_validating_preset_falls_back_to_default() {
        let (capture, logger) = common::capture_logger();
        let graph = GraphModel::new(MapPreset::Field50);
        let requested = BTreeSet::from([999]);
        let taps = TapState::classify(Some(&requested), &graph.nodes(), TapValidation::Strict, logger.as_ref());

        assert_eq!(taps.open(), &BTreeSet::from([DEFAULT_OPEN_TAP]));
        assert_eq!(taps.closed().len(), 49);
        assert!(taps.fell_back());
        assert!(capture.contains("WARN:Invalid node selected, defaulted to node 7"));
    }

    #[test]
    fn test_lenient_preset_retains_invalid_request() {
        let (capture, logger) = common::capture_logger();
        let graph = GraphModel::new(MapPreset::Field25);
        let requested = BTreeSet::from([999]);
        let taps = TapState::classify(
            Some(&requested),
            &graph.nodes(),
            MapPreset::Field25.layout().validation,
            logger.as_ref(),
        );

        assert_eq!(taps.open(), &BTreeSet::from([999]));
        assert_eq!(taps.closed(), &graph.nodes());
        assert!(!taps.fell_back());
        assert_eq!(taps.unknown_open(&graph.nodes()), BTreeSet::from([999]));
        assert!(capture.messages.lock().unwrap().is_empty());
    }

    #[test]
    fn test_valid_request_is_kept() {
        let (capture, logger) = common::capture_logger();
        let graph = GraphModel::new(MapPreset::Field50);
        let requested = BTreeSet::from([12, 44]);
        let taps = TapState::classify(Some(&requested), &graph.nodes(), TapValidation::Strict, logger.as_ref());
        assert_eq!(taps.open(), &requested);
        assert!(taps.is_open(44));
        assert!(!taps.is_open(7));
        assert_eq!(capture.count("Invalid node"), 0);
    }
}

#[cfg(test)]
mod extent_tests {
    use super::*;

    #[test]
    fn test_scaled_extent_is_unit_box_around_node() {
        for preset in MapPreset::ALL {
            let graph = Arc::new(GraphModel::new(preset));
            let controller = AnimationController::new(graph.clone(), DEFAULT_SCALE_FACTOR);
            for node in graph.nodes() {
                let Position2D { x, y } = graph.coordinate(node).unwrap();
                let extent = controller.scaled_extent(node).unwrap();
                assert_eq!(extent.as_array(), [x - 1.0, x + 1.0, y - 1.0, y + 1.0]);
                // Same node, same box.
                assert_eq!(controller.scaled_extent(node).unwrap(), extent);
            }
        }
    }

    #[test]
    fn test_step_past_end_holds() {
        let controller = AnimationController::new(Arc::new(GraphModel::new(MapPreset::Field25)), DEFAULT_SCALE_FACTOR);
        let movements = [1, 7, 8];
        for index in [3, 4, 100, usize::MAX] {
            assert_eq!(controller.step(index, &movements).unwrap(), Step::Hold);
        }
        assert_eq!(controller.step(0, &[]).unwrap(), Step::Hold);
        assert_eq!(
            controller.step(2, &movements).unwrap(),
            Step::Move(controller.scaled_extent(8).unwrap())
        );
    }
}
