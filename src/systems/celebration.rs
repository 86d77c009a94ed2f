// Celebration burst systems.

use bevy::prelude::*;

use crate::error::BlinkError;
use crate::events::{CelebrationEvent, StartCelebration, StopCelebration};
use crate::resources::blink_config::BlinkSettings;
use crate::resources::blink_controller::BlinkController;
use crate::resources::celebration::CelebrationController;
use crate::resources::reward_board::RewardBoard;

/// System that advances the running celebration by the frame delta.
pub fn drive_celebration(time: Res<Time>, mut controller: ResMut<CelebrationController>) {
    controller.advance(time.delta_secs());
}

/// System that starts and stops celebrations on request.
pub fn handle_celebration_requests(
    mut start_requests: EventReader<StartCelebration>,
    mut stop_requests: EventReader<StopCelebration>,
    board: Res<RewardBoard>,
    settings: Res<BlinkSettings>,
    reward: Res<BlinkController>,
    mut controller: ResMut<CelebrationController>,
) {
    for _ in stop_requests.read() {
        controller.stop();
    }

    for _ in start_requests.read() {
        if reward.is_running() {
            warn!("Celebration not started: {}", BlinkError::ConflictingOperation);
            continue;
        }

        match controller.start(board.tile_count, settings.celebration) {
            Ok(()) => controller.advance(0.0),
            Err(e) => warn!("Celebration not started: {}", e),
        }
    }
}

/// System that publishes the events queued by the controller.
pub fn publish_celebration_events(
    mut controller: ResMut<CelebrationController>,
    mut events: EventWriter<CelebrationEvent>,
) {
    for event in controller.drain_events() {
        events.send(event);
    }
}
