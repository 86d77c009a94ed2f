use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use tile_blink::components::tile_overlay::{BoardTile, TileOverlay};
use tile_blink::events::{BlinkEvent, CelebrationEvent, SfxCue, StartCelebration, StartRewardSequence};
use tile_blink::plugins::blink::BlinkPlugin;
use tile_blink::resources::blink_config::BlinkSettings;
use tile_blink::resources::cli::CliArgs;
use tile_blink::resources::reward_board::RewardBoard;

fn main() {
    let cli = CliArgs::parse();

    let settings = cli
        .config_path
        .as_deref()
        .map(BlinkSettings::load_from_file)
        .unwrap_or_default();
    let defaults = RewardBoard::default();
    let board = RewardBoard::new(
        cli.tiles.unwrap_or(defaults.tile_count),
        cli.target.unwrap_or(defaults.rigged_winner_index),
    );
    let seed = cli.seed.or(settings.seed);

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .insert_resource(settings)
        .insert_resource(board)
        .insert_resource(cli)
        .add_plugins(BlinkPlugin { seed })
        .add_systems(Startup, (spawn_board, request_opening).chain())
        .add_systems(Update, (log_board_events, finish_demo))
        .run();
}

fn spawn_board(mut commands: Commands, board: Res<RewardBoard>) {
    for index in 0..board.tile_count {
        commands.spawn((BoardTile { index }, TileOverlay::default()));
    }
    info!(
        "Spawned {} tiles, rigged winner is tile {}",
        board.tile_count, board.rigged_winner_index
    );
}

/// Opens with the entrance celebration when asked, otherwise goes straight to the reward.
fn request_opening(
    cli: Res<CliArgs>,
    mut celebration: EventWriter<StartCelebration>,
    mut reward: EventWriter<StartRewardSequence>,
) {
    if cli.celebrate {
        celebration.send(StartCelebration);
    } else {
        reward.send(StartRewardSequence);
    }
}

fn log_board_events(mut blink: EventReader<BlinkEvent>, mut cues: EventReader<SfxCue>) {
    for event in blink.read() {
        match event {
            BlinkEvent::TilePulsed { index, .. } => info!("Blink tile {}", index),
            BlinkEvent::TileRevealed { index, .. } => info!("Revealed tile {}", index),
            other => info!("{:?}", other),
        }
    }
    for cue in cues.read() {
        debug!("Sound cue {:?}", cue);
    }
}

/// Starts the reward once the entrance celebration is over, and exits after the reveal.
fn finish_demo(
    mut blink: EventReader<BlinkEvent>,
    mut celebration: EventReader<CelebrationEvent>,
    mut start_reward: EventWriter<StartRewardSequence>,
    mut exit: EventWriter<AppExit>,
) {
    for event in celebration.read() {
        if *event == CelebrationEvent::Finished {
            info!("Celebration done");
            start_reward.send(StartRewardSequence);
        }
    }

    for event in blink.read() {
        if let BlinkEvent::SequenceCompleted { revealed } = event {
            info!("Reward sequence over, revealed {:?}", revealed);
            exit.send(AppExit::Success);
        }
    }
}
