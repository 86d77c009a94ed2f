//! Reward blink sequence state machine.
//!
//! A run goes Blinking -> Cooldown -> RevealPending -> Completed. Pulses
//! are spaced by the deceleration curve and land on random tiles; the
//! rigged target is only ever shown by the final transition.

use crate::error::BlinkError;
use crate::events::BlinkEvent;
use crate::resources::blink_config::SequenceConfig;
use crate::utils::tile_selector::TileSelector;

/// Phase of a reward sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencePhase {
    #[default]
    Idle,
    /// Pulsing random tiles with a slowing rhythm.
    Blinking,
    /// Waiting for the last pulse to finish.
    Cooldown,
    /// Tiles are reset, waiting to reveal.
    RevealPending,
    /// Terminal, either revealed or cancelled.
    Completed,
}

/// Mutable state of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceState {
    pub phase: SequencePhase,
    /// Sum of the intervals scheduled so far while blinking.
    pub elapsed: f32,
    pub last_selected_index: Option<usize>,
    pub target_index: usize,
    /// Snapshot taken at start; board changes afterwards do not apply.
    pub tile_count: usize,
    pub pulses_fired: usize,
    pub cancelled: bool,
}

/// A single reward run, advanced by [`BlinkSequence::advance`].
#[derive(Debug, Clone)]
pub struct BlinkSequence {
    config: SequenceConfig,
    state: SequenceState,
    /// Seconds until the next scheduled step.
    wait_remaining: f32,
}

impl BlinkSequence {
    /// Creates a run in the `Blinking` phase with its first pulse due immediately.
    pub fn new(
        tile_count: usize,
        target_index: usize,
        config: SequenceConfig,
    ) -> Result<Self, BlinkError> {
        if tile_count == 0 {
            return Err(BlinkError::invalid("tile_count must be > 0"));
        }
        if target_index >= tile_count {
            return Err(BlinkError::invalid(format!(
                "target_index {} out of range for {} tiles",
                target_index, tile_count
            )));
        }

        Ok(Self {
            config,
            state: SequenceState {
                phase: SequencePhase::Blinking,
                elapsed: 0.0,
                last_selected_index: None,
                target_index,
                tile_count,
                pulses_fired: 0,
                cancelled: false,
            },
            wait_remaining: 0.0,
        })
    }

    pub fn state(&self) -> &SequenceState {
        &self.state
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    pub fn phase(&self) -> SequencePhase {
        self.state.phase
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == SequencePhase::Completed
    }

    /// Advances the run by `delta` seconds, running every step that falls due.
    ///
    /// A large `delta` may fire several steps in one call; events are
    /// appended to `events` in order.
    pub fn advance(
        &mut self,
        delta: f32,
        selector: &mut TileSelector,
        events: &mut Vec<BlinkEvent>,
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

    /// Cancels the run. Returns false if it had already finished.
    pub fn cancel(&mut self, events: &mut Vec<BlinkEvent>) -> bool {
        if self.is_finished() {
            return false;
        }

        self.state.phase = SequencePhase::Completed;
        self.state.cancelled = true;
        self.wait_remaining = 0.0;
        events.push(BlinkEvent::AllTilesReset);
        events.push(BlinkEvent::SequenceCompleted { revealed: None });
        true
    }

    fn step(&mut self, selector: &mut TileSelector, events: &mut Vec<BlinkEvent>) {
        match self.state.phase {
            SequencePhase::Blinking => {
                // The pulse cap also ends runs whose f32 sum stops growing
                if self.state.elapsed >= self.config.total_duration()
                    || self.state.pulses_fired >= self.config.max_pulses()
                {
                    self.state.phase = SequencePhase::Cooldown;
                    self.wait_remaining = self.config.cooldown();
                    return;
                }
                self.pulse(selector, events);
            }
            SequencePhase::Cooldown => {
                events.push(BlinkEvent::AllTilesReset);
                self.state.phase = SequencePhase::RevealPending;
                self.wait_remaining = self.config.final_reveal_delay();
            }
            SequencePhase::RevealPending => {
                self.state.phase = SequencePhase::Completed;
                let index = self.state.target_index;
                events.push(BlinkEvent::TileRevealed {
                    index,
                    fade_duration: self.config.pulse().fade_in,
                });
                events.push(BlinkEvent::SequenceCompleted {
                    revealed: Some(index),
                });
            }
            SequencePhase::Idle | SequencePhase::Completed => {}
        }
    }

    fn pulse(&mut self, selector: &mut TileSelector, events: &mut Vec<BlinkEvent>) {
        let progress = self.state.elapsed / self.config.total_duration();
        let interval = self.config.interval_at(progress);

        let index = selector.select(self.state.tile_count, self.state.last_selected_index);
        self.state.last_selected_index = Some(index);
        self.state.pulses_fired += 1;
        events.push(BlinkEvent::TilePulsed {
            index,
            timing: self.config.pulse(),
        });

        if self.state.tile_count == 1 {
            // Nothing to shuffle between; go straight to the reveal
            self.state.elapsed = self.config.total_duration();
            self.wait_remaining = 0.0;
            return;
        }

        self.state.elapsed += interval;
        self.wait_remaining = interval;
    }
}
