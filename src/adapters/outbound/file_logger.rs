use crate::common::{DomainError, DomainResult};
use crate::domains::logger::{DynLogger, FileLogger};
use std::sync::Arc;

/// Install the `fast_log` file backend and hand back a logger that writes to it.
pub fn init_file_logger(path: &str, level: log::LevelFilter) -> DomainResult<DynLogger> {
    FileLogger::init(path, level).map_err(|e| {
        DomainError::InfrastructureError(format!("Failed to initialize fast_log at {}: {}", path, e))
    })?;
    Ok(Arc::new(FileLogger))
}
