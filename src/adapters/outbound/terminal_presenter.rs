use crate::common::DomainResult;
use crate::domains::animation::{FramePresenter, PresentedFrame};
use crate::domains::field::{GraphModel, NodeId, TapState};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::Write;

const AGENT: char = '@';
const RUNNING: char = '~';
const OBSTACLE: char = '#';
const CLOSED: char = '.';

/// Prints the field as a character map, one block per step.
///
/// Each cell is the node id followed by a marker: `@` agent, `~` running tap,
/// `#` rock, `.` closed tap.
pub struct TerminalPresenter<W: Write + Send> {
    out: W,
    /// Row-major node ids, top row first.
    rows: Vec<Vec<NodeId>>,
    markers: BTreeMap<NodeId, char>,
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W, graph: &GraphModel, taps: &TapState) -> Self {
        let mut by_row: BTreeMap<i64, Vec<(i64, NodeId)>> = BTreeMap::new();
        let mut markers = BTreeMap::new();
        for node in graph.nodes() {
            let Ok(position) = graph.coordinate(node) else { continue };
            // Keyed on negated y so the top of the field prints first.
            by_row
                .entry(-position.y.round() as i64)
                .or_default()
                .push((position.x.round() as i64, node));
            let marker = if taps.is_open(node) {
                RUNNING
            } else if graph.obstacles().contains(&node) {
                OBSTACLE
            } else {
                CLOSED
            };
            markers.insert(node, marker);
        }
        let rows = by_row
            .into_values()
            .map(|mut row| {
                row.sort_by_key(|(x, _)| *x);
                row.into_iter().map(|(_, node)| node).collect()
            })
            .collect();
        Self { out, rows, markers }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, frame: &PresentedFrame<'_>) -> std::io::Result<()> {
        writeln!(self.out, "step {}/{}: node {}", frame.index + 1, frame.total, frame.node)?;
        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .map(|node| {
                    let marker = if *node == frame.node {
                        AGENT
                    } else {
                        self.markers.get(node).copied().unwrap_or(CLOSED)
                    };
                    format!("{:>3}{}", node, marker)
                })
                .collect();
            writeln!(self.out, "{}", line.join(" "))?;
        }
        self.out.flush()
    }
}

#[async_trait]
impl<W: Write + Send> FramePresenter for TerminalPresenter<W> {
    async fn present(&mut self, frame: &PresentedFrame<'_>) -> DomainResult<()> {
        self.draw(frame)?;
        Ok(())
    }

    async fn finish(&mut self) -> DomainResult<()> {
        writeln!(self.out, "playback finished")?;
        Ok(())
    }
}
