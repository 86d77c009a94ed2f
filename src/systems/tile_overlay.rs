// Tile overlay systems. Events naming a tile with no entity are ignored.

use bevy::prelude::*;

use crate::components::tile_overlay::{BoardTile, TileOverlay};
use crate::events::{BlinkEvent, CelebrationEvent};

/// System that applies reward sequence events to tile overlays.
pub fn apply_blink_to_tiles(
    mut events: EventReader<BlinkEvent>,
    mut tiles: Query<(&BoardTile, &mut TileOverlay)>,
) {
    for event in events.read() {
        match *event {
            BlinkEvent::TilePulsed { index, timing } => {
                for (tile, mut overlay) in &mut tiles {
                    if tile.index == index {
                        overlay.pulse(timing);
                    }
                }
            }
            BlinkEvent::AllTilesReset => {
                for (_, mut overlay) in &mut tiles {
                    overlay.reset();
                }
            }
            BlinkEvent::TileRevealed {
                index,
                fade_duration,
            } => {
                for (tile, mut overlay) in &mut tiles {
                    if tile.index == index {
                        overlay.reveal(fade_duration);
                    }
                }
            }
            BlinkEvent::SequenceStarted | BlinkEvent::SequenceCompleted { .. } => {}
        }
    }
}

/// System that applies celebration bursts to tile overlays.
/// A revealed winner keeps its highlight through the celebration.
pub fn apply_celebration_to_tiles(
    mut events: EventReader<CelebrationEvent>,
    mut tiles: Query<(&BoardTile, &mut TileOverlay)>,
) {
    for event in events.read() {
        match event {
            CelebrationEvent::TilesPulsed { indices, timing } => {
                for (tile, mut overlay) in &mut tiles {
                    if indices.contains(&tile.index) && !overlay.is_highlighted() {
                        overlay.pulse(*timing);
                    }
                }
            }
            CelebrationEvent::AllTilesReset => {
                for (_, mut overlay) in &mut tiles {
                    if !overlay.is_highlighted() {
                        overlay.reset();
                    }
                }
            }
            CelebrationEvent::Started | CelebrationEvent::Finished => {}
        }
    }
}

/// System that advances every overlay animation.
pub fn animate_tile_overlays(time: Res<Time>, mut query: Query<&mut TileOverlay>) {
    let dt = time.delta_secs();
    for mut overlay in &mut query {
        overlay.tick(dt);
    }
}
