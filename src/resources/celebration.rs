use bevy::prelude::*;

use crate::components::celebration::CelebrationBlink;
use crate::error::BlinkError;
use crate::events::CelebrationEvent;
use crate::resources::blink_config::CelebrationConfig;
use crate::utils::tile_selector::TileSelector;

/// Runs celebration bursts, one at a time.
#[derive(Resource, Debug)]
pub struct CelebrationController {
    selector: TileSelector,
    active: Option<CelebrationBlink>,
    pending: Vec<CelebrationEvent>,
}

impl Default for CelebrationController {
    fn default() -> Self {
        Self::new(TileSelector::default())
    }
}

impl CelebrationController {
    pub fn new(selector: TileSelector) -> Self {
        Self {
            selector,
            active: None,
            pending: Vec::new(),
        }
    }

    pub fn start(&mut self, tile_count: usize, config: CelebrationConfig) -> Result<(), BlinkError> {
        if self.active.is_some() {
            return Err(BlinkError::ConflictingOperation);
        }

        let celebration = CelebrationBlink::new(tile_count, config)?;
        info!("Celebration started on {} tiles", tile_count);
        self.pending.push(CelebrationEvent::Started);
        self.active = Some(celebration);
        Ok(())
    }

    /// Cancels the running celebration. Returns false when idle.
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(mut celebration) => celebration.cancel(&mut self.pending),
            None => false,
        }
    }

    pub fn advance(&mut self, delta: f32) {
        let Some(celebration) = &mut self.active else {
            return;
        };

        celebration.advance(delta, &mut self.selector, &mut self.pending);
        if celebration.is_finished() {
            info!("Celebration finished");
            self.active = None;
        }
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CelebrationEvent> {
        self.pending.drain(..)
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}
