pub mod animation;
pub mod field;
pub mod logger;
pub mod report;
pub mod scene;

pub use animation::*;
pub use field::*;
pub use logger::*;
pub use report::*;
pub use scene::*;
