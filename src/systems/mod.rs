pub mod blink;
pub mod celebration;
pub mod tile_overlay;

pub use blink::*;
pub use celebration::*;
pub use tile_overlay::*;
