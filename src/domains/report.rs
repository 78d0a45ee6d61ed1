use crate::domains::logger::DomainLogger;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalars reported by the search agent that produced a movement sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub time_taken_ms: f64,
    pub node_count: u64,
    pub max_depth: u64,
    pub peak_memory_bytes: u64,
}

impl SearchStats {
    /// Edges walked between visited nodes; zero when nothing was visited.
    pub fn path_count(&self) -> u64 {
        self.node_count.saturating_sub(1)
    }

    pub fn peak_memory_kb(&self) -> f64 {
        self.peak_memory_bytes as f64 / 1024.0
    }
}

/// Fixed-format session summary, one line per figure.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    lines: Vec<String>,
}

impl SessionSummary {
    pub fn new(stats: &SearchStats) -> Self {
        Self {
            lines: vec![
                format!("Time taken: {:.2} milliseconds", stats.time_taken_ms),
                format!("Number of nodes visited: {}", stats.node_count),
                format!("Number of paths taken: {}", stats.path_count()),
                format!("Maximum depth reached: {}", stats.max_depth),
                format!("Peak memory usage: {:.2} KB", stats.peak_memory_kb()),
            ],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub struct Reporter<'a> {
    logger: &'a dyn DomainLogger,
}

impl<'a> Reporter<'a> {
    pub fn new(logger: &'a dyn DomainLogger) -> Self {
        Self { logger }
    }

    /// Emit the summary for `stats`. Has no effect on playback.
    pub fn emit(&self, stats: &SearchStats) -> SessionSummary {
        let summary = SessionSummary::new(stats);
        for line in summary.lines() {
            self.logger.info(line);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_count_never_negative() {
        let mut stats = SearchStats::default();
        assert_eq!(stats.path_count(), 0);
        stats.node_count = 1;
        assert_eq!(stats.path_count(), 0);
        stats.node_count = 5;
        assert_eq!(stats.path_count(), 4);
    }

    #[test]
    fn test_summary_formats_fixed_precision() {
        let stats = SearchStats {
            time_taken_ms: 1.23456,
            node_count: 12,
            max_depth: 6,
            peak_memory_bytes: 2048 + 512,
        };
        let summary = SessionSummary::new(&stats);
        assert_eq!(
            summary.lines(),
            &[
                "Time taken: 1.23 milliseconds".to_string(),
                "Number of nodes visited: 12".to_string(),
                "Number of paths taken: 11".to_string(),
                "Maximum depth reached: 6".to_string(),
                "Peak memory usage: 2.50 KB".to_string(),
            ]
        );
        assert!(summary.to_string().ends_with("KB\n"));
    }
}
