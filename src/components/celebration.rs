//! Celebration blink: random bursts of several tiles at once.
//!
//! Unlike the reward sequence there is no winner and no slowdown. Each
//! burst avoids the tiles lit by the previous one when the board is large
//! enough, so the lights appear to move around.

use std::collections::HashSet;

use crate::error::BlinkError;
use crate::events::CelebrationEvent;
use crate::resources::blink_config::CelebrationConfig;
use crate::utils::tile_selector::TileSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationPhase {
    Bursting,
    /// Letting the last burst fade out.
    Cooldown,
    Finished,
}

/// A single celebration run.
#[derive(Debug, Clone)]
pub struct CelebrationBlink {
    config: CelebrationConfig,
    tile_count: usize,
    phase: CelebrationPhase,
    elapsed: f32,
    wait_remaining: f32,
    last_burst: HashSet<usize>,
}

impl CelebrationBlink {
    pub fn new(tile_count: usize, config: CelebrationConfig) -> Result<Self, BlinkError> {
        if tile_count == 0 {
            return Err(BlinkError::invalid("tile_count must be > 0"));
        }
        config.validate()?;

        Ok(Self {
            config,
            tile_count,
            phase: CelebrationPhase::Bursting,
            elapsed: 0.0,
            wait_remaining: 0.0,
            last_burst: HashSet::new(),
        })
    }

    pub fn phase(&self) -> CelebrationPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == CelebrationPhase::Finished
    }

    /// Tiles lit by the most recent burst.
    pub fn last_burst(&self) -> &HashSet<usize> {
        &self.last_burst
    }

    /// Advances by `delta` seconds, running every step that falls due.
    pub fn advance(
        &mut self,
        delta: f32,
        selector: &mut TileSelector,
        events: &mut Vec<CelebrationEvent>,
    ) {
        let mut budget = delta.max(0.0);

        while !self.is_finished() {
            if self.wait_remaining > budget {
                self.wait_remaining -= budget;
                return;
            }
            budget -= self.wait_remaining;
            self.wait_remaining = 0.0;
            self.step(selector, events);
        }
    }

    /// Stops early and resets tiles. Returns false if already finished.
    pub fn cancel(&mut self, events: &mut Vec<CelebrationEvent>) -> bool {
        if self.is_finished() {
            return false;
        }
        self.phase = CelebrationPhase::Finished;
        events.push(CelebrationEvent::AllTilesReset);
        events.push(CelebrationEvent::Finished);
        true
    }

    fn step(&mut self, selector: &mut TileSelector, events: &mut Vec<CelebrationEvent>) {
        match self.phase {
            CelebrationPhase::Bursting => {
                if self.elapsed >= self.config.duration {
                    self.phase = CelebrationPhase::Cooldown;
                    self.wait_remaining = self.config.pulse.total();
                    return;
                }
                self.burst(selector, events);
            }
            CelebrationPhase::Cooldown => {
                self.phase = CelebrationPhase::Finished;
                events.push(CelebrationEvent::AllTilesReset);
                events.push(CelebrationEvent::Finished);
            }
            CelebrationPhase::Finished => {}
        }
    }

    fn burst(&mut self, selector: &mut TileSelector, events: &mut Vec<CelebrationEvent>) {
        let count = selector
            .range_inclusive(self.config.min_simultaneous, self.config.max_simultaneous)
            .min(self.tile_count);
        let indices = selector.select_batch(self.tile_count, count, &self.last_burst);

        self.last_burst = indices.iter().copied().collect();
        events.push(CelebrationEvent::TilesPulsed {
            indices,
            timing: self.config.pulse,
        });

        let interval = selector.range_f32(self.config.min_interval, self.config.max_interval);
        self.elapsed += interval;
        self.wait_remaining = interval;
    }
}
