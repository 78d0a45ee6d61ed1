pub mod assets;
pub mod canvas;
pub mod glyphs;
pub mod viewport;

pub use assets::*;
pub use canvas::*;
pub use viewport::*;
