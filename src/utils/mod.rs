pub mod easing;
pub mod tile_selector;
