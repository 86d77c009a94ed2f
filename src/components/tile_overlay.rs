//! Tile overlay state driven by blink events.
//!
//! Each board tile carries a dark overlay. A pulse fades the overlay away,
//! holds, then fades it back; the reveal fades it away for good. Only the
//! alpha value is tracked here, drawing is left to whoever owns the sprite.

use bevy::prelude::*;

use crate::resources::blink_config::PulseTiming;
use crate::utils::easing::{ease_in_quad, ease_out_quad, lerp};

/// Position of a tile on the reward board.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardTile {
    pub index: usize,
}

/// What the overlay is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OverlayState {
    /// Resting at the base alpha.
    #[default]
    Idle,
    /// Running one fade-in / hold / fade-out cycle.
    Pulsing { timing: PulseTiming, elapsed: f32 },
    /// Fading towards (or resting at) fully transparent.
    Highlighted { duration: f32, elapsed: f32 },
}

/// Overlay alpha of a single tile.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct TileOverlay {
    /// Alpha the overlay returns to after a pulse or reset.
    pub base_alpha: f32,
    /// Alpha as of the last tick.
    pub current_alpha: f32,
    pub state: OverlayState,
}

impl Default for TileOverlay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_ALPHA)
    }
}

impl TileOverlay {
    /// Overlay darkness for tiles that are not lit.
    pub const DEFAULT_BASE_ALPHA: f32 = 0.6;

    pub fn new(base_alpha: f32) -> Self {
        Self {
            base_alpha,
            current_alpha: base_alpha,
            state: OverlayState::Idle,
        }
    }

    /// Starts a pulse cycle, restarting any pulse already running.
    pub fn pulse(&mut self, timing: PulseTiming) {
        self.current_alpha = self.base_alpha;
        self.state = OverlayState::Pulsing {
            timing,
            elapsed: 0.0,
        };
    }

    /// Fades the overlay away and keeps it there.
    pub fn reveal(&mut self, fade_duration: f32) {
        self.state = OverlayState::Highlighted {
            duration: fade_duration.max(0.0),
            elapsed: 0.0,
        };
        if fade_duration <= 0.0 {
            self.current_alpha = 0.0;
        }
    }

    /// Snaps back to the base alpha, cancelling any pulse or highlight.
    pub fn reset(&mut self) {
        self.current_alpha = self.base_alpha;
        self.state = OverlayState::Idle;
    }

    pub fn is_pulsing(&self) -> bool {
        matches!(self.state, OverlayState::Pulsing { .. })
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self.state, OverlayState::Highlighted { .. })
    }

    /// Advances the active animation by `delta_seconds`.
    pub fn tick(&mut self, delta_seconds: f32) {
        match &mut self.state {
            OverlayState::Idle => {}
            OverlayState::Pulsing { timing, elapsed } => {
                *elapsed += delta_seconds;
                let t = *elapsed;
                let timing = *timing;

                if t >= timing.total() {
                    self.current_alpha = self.base_alpha;
                    self.state = OverlayState::Idle;
                } else {
                    self.current_alpha = pulse_alpha(self.base_alpha, timing, t);
                }
            }
            OverlayState::Highlighted { duration, elapsed } => {
                *elapsed += delta_seconds;
                let progress = if *duration > 0.0 {
                    (*elapsed / *duration).min(1.0)
                } else {
                    1.0
                };
                self.current_alpha = lerp(self.base_alpha, 0.0, ease_out_quad(progress));
            }
        }
    }
}

/// Overlay alpha `t` seconds into a pulse cycle.
fn pulse_alpha(base_alpha: f32, timing: PulseTiming, t: f32) -> f32 {
    if t < timing.fade_in {
        lerp(base_alpha, 0.0, ease_out_quad(t / timing.fade_in))
    } else if t < timing.fade_in + timing.hold {
        0.0
    } else if timing.fade_out > 0.0 {
        let t_out = (t - timing.fade_in - timing.hold) / timing.fade_out;
        lerp(0.0, base_alpha, ease_in_quad(t_out))
    } else {
        base_alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> PulseTiming {
        PulseTiming::new(0.1, 0.2, 0.1)
    }

    #[test]
    fn test_default_is_idle_at_base() {
        let overlay = TileOverlay::default();
        assert_eq!(overlay.current_alpha, TileOverlay::DEFAULT_BASE_ALPHA);
        assert!(!overlay.is_pulsing());
        assert!(!overlay.is_highlighted());
    }

    #[test]
    fn test_pulse_cycle() {
        let mut overlay = TileOverlay::new(0.8);
        overlay.pulse(timing());
        assert!(overlay.is_pulsing());

        overlay.tick(0.05);
        assert!(overlay.current_alpha < 0.8 && overlay.current_alpha > 0.0);

        overlay.tick(0.1);
        assert_eq!(overlay.current_alpha, 0.0);

        overlay.tick(0.2);
        assert!(overlay.current_alpha > 0.0 && overlay.current_alpha < 0.8);

        overlay.tick(0.1);
        assert!(!overlay.is_pulsing());
        assert_eq!(overlay.current_alpha, 0.8);
    }

    #[test]
    fn test_pulse_restarts() {
        let mut overlay = TileOverlay::new(0.5);
        overlay.pulse(timing());
        overlay.tick(0.3);
        overlay.pulse(timing());
        assert_eq!(overlay.current_alpha, 0.5);
        assert_eq!(
            overlay.state,
            OverlayState::Pulsing {
                timing: timing(),
                elapsed: 0.0
            }
        );
    }

    #[test]
    fn test_reveal_stays_transparent() {
        let mut overlay = TileOverlay::new(0.6);
        overlay.pulse(timing());
        overlay.reveal(0.05);
        overlay.tick(0.05);
        assert_eq!(overlay.current_alpha, 0.0);
        overlay.tick(5.0);
        assert_eq!(overlay.current_alpha, 0.0);
        assert!(overlay.is_highlighted());
    }

    #[test]
    fn test_instant_reveal() {
        let mut overlay = TileOverlay::new(0.6);
        overlay.reveal(0.0);
        assert_eq!(overlay.current_alpha, 0.0);
    }

    #[test]
    fn test_reset_snaps_back() {
        let mut overlay = TileOverlay::new(0.6);
        overlay.reveal(0.1);
        overlay.tick(0.1);
        overlay.reset();
        assert_eq!(overlay.current_alpha, 0.6);
        assert_eq!(overlay.state, OverlayState::Idle);
    }
}
