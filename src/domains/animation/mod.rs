pub mod actors;
pub mod controller;
pub mod events;
pub mod ports;
pub mod recorder;

pub use actors::*;
pub use controller::*;
pub use events::*;
pub use ports::*;
pub use recorder::*;
