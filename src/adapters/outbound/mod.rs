pub mod asset_store;
pub mod console_logger;
pub mod file_logger;
pub mod gif_artifact;
pub mod multi_logger;
pub mod noop_logger;
pub mod terminal_presenter;
pub mod trace_subscriber;

pub use asset_store::*;
pub use console_logger::*;
pub use file_logger::*;
pub use gif_artifact::*;
pub use multi_logger::*;
pub use noop_logger::*;
pub use terminal_presenter::*;
pub use trace_subscriber::*;
