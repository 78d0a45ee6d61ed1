pub mod environment;
pub mod session_input;

pub use environment::*;
pub use session_input::*;
