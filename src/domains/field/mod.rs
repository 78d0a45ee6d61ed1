pub mod graph;
pub mod presets;
pub mod taps;
pub mod types;

pub use graph::*;
pub use presets::*;
pub use taps::*;
pub use types::*;
