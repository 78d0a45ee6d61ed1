use super::types::{NodeId, Position2D, ViewBounds};
use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named map layouts the environment can be built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapPreset {
    /// Single 5x5 grid, 25 taps.
    Field25,
    #[default]
    /// Two 5x5 grids joined by bridge edges, 50 taps and three rocks.
    Field50,
}

/// How a preset treats a requested open-tap set containing unknown nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapValidation {
    /// Any unknown id discards the request in favour of the default tap.
    Strict,
    /// The request is kept verbatim, unknown ids included.
    Lenient,
}

/// 5x5 block of nodes numbered row-major from the top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct GridBlock {
    pub first: NodeId,
    pub origin_x: f64,
}

const BLOCK_SIDE: u32 = 5;
const GRID_SPACING: f64 = 2.0;
const BLOCK_TOP: f64 = 8.0;

/// Static description of a preset: topology, coordinates and drawing options.
#[derive(Debug)]
pub struct PresetLayout {
    pub adjacency: &'static [(NodeId, &'static [NodeId])],
    pub blocks: &'static [GridBlock],
    pub obstacles: &'static [NodeId],
    pub view: ViewBounds,
    /// Top edge of the running-tap icon relative to the node centre.
    pub running_tap_top: f64,
    pub labels: bool,
    pub validation: TapValidation,
}

impl PresetLayout {
    /// Node coordinates, in ascending node order.
    pub fn field(&self) -> Vec<(NodeId, Position2D)> {
        let mut field = Vec::new();
        for block in self.blocks {
            for offset in 0..BLOCK_SIDE * BLOCK_SIDE {
                let col = offset % BLOCK_SIDE;
                let row = offset / BLOCK_SIDE;
                field.push((
                    block.first + offset,
                    Position2D {
                        x: block.origin_x + GRID_SPACING * col as f64,
                        y: BLOCK_TOP - GRID_SPACING * row as f64,
                    },
                ));
            }
        }
        field.sort_by_key(|(node, _)| *node);
        field
    }
}

static FIELD25: PresetLayout = PresetLayout {
    adjacency: &[
        (1, &[2, 6]),
        (2, &[1, 3, 7]),
        (3, &[2, 4, 8]),
        (4, &[3, 5, 9]),
        (5, &[4, 10]),
        (6, &[1, 7, 11]),
        (7, &[2, 6, 8, 12]),
        (8, &[3, 7, 9, 13]),
        (9, &[4, 8, 10, 14]),
        (10, &[5, 9, 15]),
        (11, &[6, 12, 16]),
        (12, &[7, 11, 13, 17]),
        (13, &[8, 12, 14, 18]),
        (14, &[9, 13, 15, 19]),
        (15, &[10, 14, 20]),
        (16, &[11, 17, 21]),
        (17, &[12, 16, 18, 22]),
        (18, &[13, 17, 19, 23]),
        (19, &[14, 18, 20, 24]),
        (20, &[15, 19, 25]),
        (21, &[16, 22]),
        (22, &[17, 21, 23]),
        (23, &[18, 22, 24]),
        (24, &[19, 23, 25]),
        (25, &[20, 24]),
    ],
    blocks: &[GridBlock { first: 1, origin_x: 0.0 }],
    obstacles: &[],
    view: ViewBounds { min_x: -2.0, max_x: 10.0, min_y: -2.0, max_y: 10.0 },
    running_tap_top: 0.15,
    labels: false,
    validation: TapValidation::Lenient,
};

// Adjacency is kept exactly as surveyed: it is directional, 4 lists itself,
// and the bridges between the two blocks are irregular.
static FIELD50: PresetLayout = PresetLayout {
    adjacency: &[
        (1, &[2, 6]),
        (2, &[1, 3, 7]),
        (3, &[2, 4, 8]),
        (4, &[3, 4, 9]),
        (5, &[4, 35]),
        (6, &[1, 7, 11]),
        (7, &[2, 6, 8, 12]),
        (8, &[3, 7, 9, 13]),
        (9, &[4, 8, 10, 14]),
        (10, &[5, 9, 15]),
        (11, &[6, 12, 16]),
        (12, &[7, 11, 13, 17]),
        (13, &[8, 12, 14, 18]),
        (14, &[9, 13, 15, 19]),
        (15, &[10, 14]),
        (16, &[11, 17, 21]),
        (17, &[12, 16, 18, 22]),
        (18, &[13, 17, 19, 23]),
        (19, &[14, 18, 24]),
        (20, &[15, 19, 25]),
        (21, &[16, 22, 26]),
        (22, &[17, 21, 23, 27]),
        (23, &[18, 22, 24, 28]),
        (24, &[19, 23, 25, 29]),
        (25, &[20, 24, 30]),
        (26, &[21, 27, 31]),
        (27, &[5, 26, 28, 32]),
        (28, &[23, 27, 29, 33]),
        (29, &[24, 28, 30, 34]),
        (30, &[5, 25, 29]),
        (31, &[26, 32, 36]),
        (32, &[20, 27, 31, 33, 37]),
        (33, &[28, 32, 34, 38]),
        (34, &[29, 33, 35, 39]),
        (35, &[30, 34, 40]),
        (36, &[31, 37, 41]),
        (37, &[32, 36, 38, 42]),
        (38, &[33, 37, 39, 43]),
        (39, &[34, 38, 40, 44]),
        (40, &[35, 39, 45]),
        (41, &[36, 42, 46]),
        (42, &[37, 41, 43, 47]),
        (43, &[38, 42, 44]),
        (44, &[39, 43, 45, 49]),
        (45, &[40, 44, 50]),
        (46, &[41, 47]),
        (47, &[42, 46]),
        (48, &[43, 47, 49]),
        (49, &[44, 50]),
        (50, &[45, 49]),
    ],
    blocks: &[
        GridBlock { first: 1, origin_x: 0.0 },
        GridBlock { first: 26, origin_x: 10.0 },
    ],
    obstacles: &[17, 33, 45],
    view: ViewBounds { min_x: -2.0, max_x: 20.0, min_y: -2.0, max_y: 10.0 },
    running_tap_top: 0.5,
    labels: true,
    validation: TapValidation::Strict,
};

impl MapPreset {
    pub const ALL: [MapPreset; 2] = [MapPreset::Field25, MapPreset::Field50];

    pub fn layout(&self) -> &'static PresetLayout {
        match self {
            MapPreset::Field25 => &FIELD25,
            MapPreset::Field50 => &FIELD50,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MapPreset::Field25 => "field25",
            MapPreset::Field50 => "field50",
        }
    }

    pub fn node_count(&self) -> usize {
        self.layout().blocks.len() * (BLOCK_SIDE * BLOCK_SIDE) as usize
    }

    /// Whether this preset draws the rock obstacle icon.
    pub fn has_obstacles(&self) -> bool {
        !self.layout().obstacles.is_empty()
    }
}

impl fmt::Display for MapPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapPreset {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        MapPreset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownPreset { name: s.to_string() })
    }
}
