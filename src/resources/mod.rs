pub mod blink_config;
pub mod blink_controller;
pub mod blink_pitch;
pub mod celebration;
pub mod cli;
pub mod reward_board;

pub use blink_config::*;
pub use blink_controller::*;
pub use blink_pitch::*;
pub use celebration::*;
pub use reward_board::*;
