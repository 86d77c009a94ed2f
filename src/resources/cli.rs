use std::path::PathBuf;

use bevy::prelude::*;

/// Command-line arguments for the demo binary.
#[derive(Resource, Debug, Default, PartialEq)]
pub struct CliArgs {
    /// Blink settings JSON.
    /// Usage: `tile-blink --config blink.json`
    pub config_path: Option<PathBuf>,

    /// Fixed RNG seed, overriding the one in the settings file.
    /// Usage: `tile-blink --seed 42`
    pub seed: Option<u64>,

    /// Number of tiles on the demo board.
    pub tiles: Option<usize>,

    /// Rigged winner index on the demo board.
    pub target: Option<usize>,

    /// Open with the entrance celebration before the reward.
    pub celebrate: bool,
}

impl CliArgs {
    /// Parse command-line arguments.
    /// Supports:
    /// - `--config <path>`: Load blink settings from a JSON file
    /// - `--seed <u64>`: Replay a fixed selection sequence
    /// - `--tiles <n>` / `--target <i>`: Shape the demo board
    /// - `--celebrate`: Run the entrance celebration before the reward sequence
    pub fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parses arguments, not including the program name.
    pub fn parse_from(args: impl IntoIterator<Item = String>) -> Self {
        let args: Vec<String> = args.into_iter().collect();
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1);
            match args[i].as_str() {
                "--config" => {
                    match value {
                        Some(path) => cli.config_path = Some(PathBuf::from(path)),
                        None => warn!("CLI: --config requires a path argument"),
                    }
                    i += 2;
                }
                "--seed" => {
                    cli.seed = parse_value("--seed", value);
                    i += 2;
                }
                "--tiles" => {
                    cli.tiles = parse_value("--tiles", value);
                    i += 2;
                }
                "--target" => {
                    cli.target = parse_value("--target", value);
                    i += 2;
                }
                "--celebrate" => {
                    cli.celebrate = true;
                    i += 1;
                }
                arg => {
                    if arg.starts_with('-') {
                        warn!("CLI: Unknown argument '{}'", arg);
                    }
                    i += 1;
                }
            }
        }

        cli
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Option<T> {
    let Some(raw) = value else {
        warn!("CLI: {} requires a value", flag);
        return None;
    };

    match raw.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("CLI: Could not parse '{}' for {}", raw, flag);
            None
        }
    }
}
