use crate::common::{DomainError, DomainResult};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Only the subscriber is registered. The `log` facade stays free for the
/// `fast_log` file backend, which can be installed before or after this call.
pub fn init_tracing() -> DomainResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| DomainError::InfrastructureError(format!("Failed to install tracing subscriber: {}", e)))
}
