use bevy::prelude::*;

use crate::resources::blink_config::BlinkSfxConfig;

/// Pitch the next blink cue will play at.
///
/// Rises with every blink so the sequence sounds like it is building up,
/// and drops back when a sequence starts or is cancelled.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BlinkPitch {
    pub current: f32,
}

impl Default for BlinkPitch {
    fn default() -> Self {
        Self { current: 1.0 }
    }
}

impl BlinkPitch {
    /// Pitch used for the selection cue, independent of the ramp.
    pub const SELECTION: f32 = 1.0;

    pub fn reset(&mut self, config: &BlinkSfxConfig) {
        self.current = config.starting_pitch;
    }

    /// Returns the pitch for this blink and raises it for the next one.
    pub fn next_blink(&mut self, config: &BlinkSfxConfig) -> f32 {
        let pitch = self.current;
        self.current = (self.current + config.pitch_increment).min(config.max_pitch);
        pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_and_cap() {
        let config = BlinkSfxConfig {
            starting_pitch: 1.0,
            max_pitch: 1.2,
            pitch_increment: 0.1,
        };
        let mut pitch = BlinkPitch::default();
        pitch.reset(&config);

        assert_eq!(pitch.next_blink(&config), 1.0);
        assert!((pitch.next_blink(&config) - 1.1).abs() < 1e-6);
        assert!((pitch.next_blink(&config) - 1.2).abs() < 1e-6);
        assert!((pitch.next_blink(&config) - 1.2).abs() < 1e-6);

        pitch.reset(&config);
        assert_eq!(pitch.current, 1.0);
    }
}
