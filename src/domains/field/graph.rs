use super::presets::MapPreset;
use super::types::{NodeId, Position2D, ViewBounds};
use crate::common::{DomainError, DomainResult};
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::{BTreeMap, BTreeSet};

/// Immutable topology and coordinate layout of one map preset.
///
/// Edges are directional and neighbor order is the order the preset lists
/// them in; nothing is symmetrised or deduplicated.
#[derive(Debug, Clone)]
pub struct GraphModel {
    preset: MapPreset,
    topology: DiGraphMap<NodeId, ()>,
    field: BTreeMap<NodeId, Position2D>,
    obstacles: BTreeSet<NodeId>,
}

impl GraphModel {
    pub fn new(preset: MapPreset) -> Self {
        let layout = preset.layout();
        let field: BTreeMap<NodeId, Position2D> = layout.field().into_iter().collect();

        let mut topology = DiGraphMap::new();
        for node in field.keys() {
            topology.add_node(*node);
        }
        for (node, neighbors) in layout.adjacency {
            for neighbor in neighbors.iter() {
                topology.add_edge(*node, *neighbor, ());
            }
        }

        Self {
            preset,
            topology,
            field,
            obstacles: layout.obstacles.iter().copied().collect(),
        }
    }

    pub fn preset(&self) -> MapPreset {
        self.preset
    }

    /// Outgoing neighbors of `node`, in preset order.
    pub fn neighbors(&self, node: NodeId) -> DomainResult<Vec<NodeId>> {
        if !self.field.contains_key(&node) {
            return Err(DomainError::UnknownNode { node });
        }
        Ok(self
            .topology
            .neighbors_directed(node, Direction::Outgoing)
            .collect())
    }

    pub fn coordinate(&self, node: NodeId) -> DomainResult<Position2D> {
        self.field
            .get(&node)
            .copied()
            .ok_or(DomainError::UnknownNode { node })
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.field.contains_key(&node)
    }

    /// All nodes with a field coordinate, ascending.
    pub fn nodes(&self) -> BTreeSet<NodeId> {
        self.field.keys().copied().collect()
    }

    pub fn node_count(&self) -> usize {
        self.field.len()
    }

    /// Nodes drawn with the rock icon. Purely cosmetic: they keep their edges.
    pub fn obstacles(&self) -> &BTreeSet<NodeId> {
        &self.obstacles
    }

    pub fn view(&self) -> ViewBounds {
        self.preset.layout().view
    }

    /// Nodes that list themselves as a neighbor.
    pub fn self_loops(&self) -> Vec<NodeId> {
        self.field
            .keys()
            .copied()
            .filter(|node| self.topology.contains_edge(*node, *node))
            .collect()
    }

    /// `(node, neighbor)` pairs whose neighbor has no field coordinate.
    pub fn dangling_neighbors(&self) -> Vec<(NodeId, NodeId)> {
        self.topology
            .all_edges()
            .filter(|(_, to, _)| !self.field.contains_key(to))
            .map(|(from, to, _)| (from, to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_keep_listed_order() {
        let graph = GraphModel::new(MapPreset::Field25);
        assert_eq!(graph.neighbors(7).unwrap(), vec![2, 6, 8, 12]);
        assert_eq!(graph.neighbors(25).unwrap(), vec![20, 24]);
    }

    #[test]
    fn test_unknown_node_is_lookup_error() {
        let graph = GraphModel::new(MapPreset::Field25);
        assert!(matches!(graph.neighbors(26), Err(DomainError::UnknownNode { node: 26 })));
        assert!(matches!(graph.coordinate(0), Err(DomainError::UnknownNode { node: 0 })));
    }

    #[test]
    fn test_adjacency_is_not_symmetrised() {
        let graph = GraphModel::new(MapPreset::Field50);
        // 5 -> 35 is listed, 35 -> 5 is not.
        assert!(graph.neighbors(5).unwrap().contains(&35));
        assert!(!graph.neighbors(35).unwrap().contains(&5));
    }
}
