//! BlinkPlugin - reward reveal and celebration blinking.
//!
//! Registers the request/notification events, the controllers and the
//! `Update` systems that drive them from `Time`. Insert `BlinkSettings` and
//! `RewardBoard` before adding the plugin to override the defaults.

use bevy::prelude::*;

use crate::events::{
    BlinkEvent, CelebrationEvent, SfxCue, StartCelebration, StartRewardSequence, StopCelebration,
    StopRewardSequence,
};
use crate::resources::blink_config::BlinkSettings;
use crate::resources::blink_controller::BlinkController;
use crate::resources::blink_pitch::BlinkPitch;
use crate::resources::celebration::CelebrationController;
use crate::resources::reward_board::RewardBoard;
use crate::systems::blink::{
    drive_reward_sequence, handle_reward_requests, publish_blink_events, update_blink_pitch,
};
use crate::systems::celebration::{
    drive_celebration, handle_celebration_requests, publish_celebration_events,
};
use crate::systems::tile_overlay::{
    animate_tile_overlays, apply_blink_to_tiles, apply_celebration_to_tiles,
};
use crate::utils::tile_selector::TileSelector;

#[derive(Default)]
pub struct BlinkPlugin {
    /// Seed for tile selection. Falls back to `BlinkSettings::seed`, then OS entropy.
    pub seed: Option<u64>,
}

impl Plugin for BlinkPlugin {
    fn build(&self, app: &mut App) {
        let seed = self.seed.or_else(|| {
            app.world()
                .get_resource::<BlinkSettings>()
                .and_then(|settings| settings.seed)
        });
        if let Some(seed) = seed {
            info!("Blink selection seeded with {}", seed);
        }

        app.init_resource::<BlinkSettings>()
            .init_resource::<RewardBoard>()
            .init_resource::<BlinkPitch>()
            .insert_resource(BlinkController::new(TileSelector::from_optional_seed(seed)))
            .insert_resource(CelebrationController::new(TileSelector::from_optional_seed(
                seed.map(|s| s.wrapping_add(1)),
            )))
            .add_event::<StartRewardSequence>()
            .add_event::<StopRewardSequence>()
            .add_event::<BlinkEvent>()
            .add_event::<StartCelebration>()
            .add_event::<StopCelebration>()
            .add_event::<CelebrationEvent>()
            .add_event::<SfxCue>()
            .add_systems(
                Update,
                (
                    (
                        drive_reward_sequence,
                        handle_reward_requests,
                        publish_blink_events,
                        update_blink_pitch,
                        apply_blink_to_tiles,
                    )
                        .chain(),
                    (
                        drive_celebration,
                        // Reward requests win when both arrive in one frame
                        handle_celebration_requests.after(handle_reward_requests),
                        publish_celebration_events,
                        apply_celebration_to_tiles,
                    )
                        .chain(),
                    animate_tile_overlays
                        .after(apply_blink_to_tiles)
                        .after(apply_celebration_to_tiles),
                ),
            );
    }
}
