pub mod blink_sequence;
pub mod celebration;
pub mod tile_overlay;

pub use blink_sequence::*;
pub use celebration::*;
pub use tile_overlay::*;
