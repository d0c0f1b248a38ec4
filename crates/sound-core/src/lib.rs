pub mod block;
pub mod constants;
pub mod finder;
pub mod geometry;
pub mod layout;
pub mod volume;

pub use block::*;
pub use constants::*;
pub use finder::*;
pub use geometry::*;
pub use layout::*;
pub use volume::*;
