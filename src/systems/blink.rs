// Reward sequence systems: requests in, blink events and sound cues out.

use bevy::prelude::*;

use crate::error::BlinkError;
use crate::events::{BlinkEvent, SfxCue, StartRewardSequence, StopRewardSequence};
use crate::resources::blink_config::BlinkSettings;
use crate::resources::blink_controller::BlinkController;
use crate::resources::blink_pitch::BlinkPitch;
use crate::resources::celebration::CelebrationController;
use crate::resources::reward_board::RewardBoard;

/// System that advances the running reward sequence by the frame delta.
///
/// Runs before requests are handled, so a run started this frame is not
/// charged for time that passed before it existed.
pub fn drive_reward_sequence(time: Res<Time>, mut controller: ResMut<BlinkController>) {
    controller.advance(time.delta_secs());
}

/// System that starts and stops the reward sequence on request.
/// Stops are handled first so a stop + start in one frame restarts the run.
pub fn handle_reward_requests(
    mut start_requests: EventReader<StartRewardSequence>,
    mut stop_requests: EventReader<StopRewardSequence>,
    board: Res<RewardBoard>,
    settings: Res<BlinkSettings>,
    celebration: Res<CelebrationController>,
    mut controller: ResMut<BlinkController>,
) {
    for _ in stop_requests.read() {
        if !controller.stop_active() {
            debug!("Stop requested with no reward sequence running");
        }
    }

    for _ in start_requests.read() {
        if !board.is_valid() {
            warn!(
                "Reward board is invalid ({} tiles, rigged index {}), not starting",
                board.tile_count, board.rigged_winner_index
            );
            continue;
        }

        // One sequence per board: a celebration owns the tiles while it runs
        if celebration.is_running() {
            warn!(
                "Reward sequence not started: {}",
                BlinkError::ConflictingOperation
            );
            continue;
        }

        match controller.start(
            board.tile_count,
            board.rigged_winner_index,
            settings.sequence,
        ) {
            // Fire the steps due at t = 0 right away
            Ok(_) => controller.advance(0.0),
            Err(e) => warn!("Reward sequence not started: {}", e),
        }
    }
}

/// System that publishes the events queued by the controller.
pub fn publish_blink_events(
    mut controller: ResMut<BlinkController>,
    mut events: EventWriter<BlinkEvent>,
) {
    for event in controller.drain_events() {
        debug!("Blink event: {:?}", event);
        events.send(event);
    }
}

/// System that turns blink events into pitched sound cues.
pub fn update_blink_pitch(
    mut events: EventReader<BlinkEvent>,
    settings: Res<BlinkSettings>,
    mut pitch: ResMut<BlinkPitch>,
    mut cues: EventWriter<SfxCue>,
) {
    for event in events.read() {
        match event {
            BlinkEvent::SequenceStarted | BlinkEvent::SequenceCompleted { revealed: None } => {
                pitch.reset(&settings.sfx);
            }
            BlinkEvent::TilePulsed { .. } => {
                let value = pitch.next_blink(&settings.sfx);
                cues.send(SfxCue::Blink { pitch: value });
            }
            BlinkEvent::TileRevealed { .. } => {
                cues.send(SfxCue::Selection {
                    pitch: BlinkPitch::SELECTION,
                });
            }
            BlinkEvent::AllTilesReset | BlinkEvent::SequenceCompleted { .. } => {}
        }
    }
}
