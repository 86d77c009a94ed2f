use bevy::prelude::*;

use crate::resources::blink_config::PulseTiming;

/// Notifications emitted by a reward blink sequence, in emission order:
/// `SequenceStarted`, `TilePulsed`*, `AllTilesReset`, `TileRevealed`, `SequenceCompleted`.
///
/// A cancelled run ends with `AllTilesReset` then `SequenceCompleted { revealed: None }`.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum BlinkEvent {
    SequenceStarted,
    /// A tile should play one pulse cycle with the run's `timing`.
    TilePulsed { index: usize, timing: PulseTiming },
    /// Every tile should go back to its base look.
    AllTilesReset,
    /// The rigged winner should fade to its persistent highlight over `fade_duration`.
    TileRevealed { index: usize, fade_duration: f32 },
    /// Terminal signal. `revealed` is `None` when the run was stopped early.
    SequenceCompleted { revealed: Option<usize> },
}

/// Request to start the reward sequence on the current `RewardBoard`.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StartRewardSequence;

/// Request to cancel the running reward sequence, if any.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StopRewardSequence;

/// Notifications emitted by a celebration run.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum CelebrationEvent {
    Started,
    /// A burst of distinct tiles should pulse together with `timing`.
    TilesPulsed { indices: Vec<usize>, timing: PulseTiming },
    AllTilesReset,
    Finished,
}

/// Request to start a celebration on the current `RewardBoard`.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StartCelebration;

/// Request to cancel a running celebration.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StopCelebration;

/// Sound cue for an external audio player.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SfxCue {
    /// One blink, at a pitch that rises through the sequence.
    Blink { pitch: f32 },
    /// The winning tile was revealed.
    Selection { pitch: f32 },
}
