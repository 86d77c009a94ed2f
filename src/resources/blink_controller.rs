//! Owner of the active reward sequence.
//!
//! The controller enforces that only one sequence runs at a time, hands
//! out handles so stale callers cannot stop a newer run, and queues the
//! events of the active run until a system drains them.

use bevy::prelude::*;

use crate::components::blink_sequence::{BlinkSequence, SequenceState};
use crate::error::BlinkError;
use crate::events::BlinkEvent;
use crate::resources::blink_config::SequenceConfig;
use crate::utils::tile_selector::TileSelector;

/// Identifies one started sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceHandle(u64);

/// Runs reward sequences one at a time.
#[derive(Resource, Debug)]
pub struct BlinkController {
    selector: TileSelector,
    active: Option<(SequenceHandle, BlinkSequence)>,
    next_handle: u64,
    pending: Vec<BlinkEvent>,
}

impl Default for BlinkController {
    fn default() -> Self {
        Self::new(TileSelector::default())
    }
}

impl BlinkController {
    pub fn new(selector: TileSelector) -> Self {
        Self {
            selector,
            active: None,
            next_handle: 1,
            pending: Vec::new(),
        }
    }

    /// Starts a sequence that will reveal `target_index`.
    ///
    /// Fails without side effects if a sequence is already running or the
    /// arguments are invalid.
    pub fn start(
        &mut self,
        tile_count: usize,
        target_index: usize,
        config: SequenceConfig,
    ) -> Result<SequenceHandle, BlinkError> {
        if self.is_running() {
            return Err(BlinkError::ConflictingOperation);
        }

        let sequence = BlinkSequence::new(tile_count, target_index, config)?;
        let handle = SequenceHandle(self.next_handle);
        self.next_handle += 1;

        info!(
            "Blink sequence {:?} started: {} tiles, target {}",
            handle, tile_count, target_index
        );
        self.pending.push(BlinkEvent::SequenceStarted);
        self.active = Some((handle, sequence));
        Ok(handle)
    }

    /// Cancels the sequence behind `handle`.
    ///
    /// Returns false, doing nothing, if that sequence already ended or the
    /// handle belongs to an older run.
    pub fn stop(&mut self, handle: SequenceHandle) -> bool {
        match &mut self.active {
            Some((active, sequence)) if *active == handle => {
                let stopped = sequence.cancel(&mut self.pending);
                self.active = None;
                if stopped {
                    info!("Blink sequence {:?} cancelled", handle);
                }
                stopped
            }
            _ => false,
        }
    }

    /// Cancels whatever is running. Returns false when idle.
    pub fn stop_active(&mut self) -> bool {
        match self.active_handle() {
            Some(handle) => self.stop(handle),
            None => false,
        }
    }

    /// Advances the active sequence by `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        let Some((handle, sequence)) = &mut self.active else {
            return;
        };

        sequence.advance(delta, &mut self.selector, &mut self.pending);

        if sequence.is_finished() {
            info!(
                "Blink sequence {:?} completed after {} pulses",
                handle,
                sequence.state().pulses_fired
            );
            self.active = None;
        }
    }

    /// Takes all queued events, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, BlinkEvent> {
        self.pending.drain(..)
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_handle(&self) -> Option<SequenceHandle> {
        self.active.as_ref().map(|(handle, _)| *handle)
    }

    /// State of the running sequence, if any.
    pub fn state(&self) -> Option<&SequenceState> {
        self.active.as_ref().map(|(_, sequence)| sequence.state())
    }
}
