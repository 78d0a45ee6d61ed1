use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Prints diagnostics the way the session summary expects to appear: plain
/// lines on stdout, warnings prefixed, errors on stderr.
struct ConsoleBridge;

impl DomainLogger for ConsoleBridge {
    fn info(&self, msg: &str) { println!("{}", msg); }
    fn warn(&self, msg: &str) { println!("WARN: {}", msg); }
    fn error(&self, msg: &str) { eprintln!("ERROR: {}", msg); }
}

pub fn init_console_logger() -> DynLogger {
    Arc::new(ConsoleBridge {})
}
