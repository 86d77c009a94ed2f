//! Rigged slot-machine style reveal for a row of reward tiles.
//!
//! Random tiles blink with a slowing rhythm, then the pre-selected winner
//! is revealed. The timing and selection logic lives in plain types
//! (`components`, `resources`, `utils`); `plugins::blink::BlinkPlugin`
//! wires it into a Bevy app.

pub mod components;
pub mod error;
pub mod events;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
