//! Tuning for blink sequences.
//!
//! Settings are plain data loaded from JSON. `SequenceConfig` is the only
//! type with hard invariants; it is validated both when built in code and
//! when deserialized, so an invalid config can never reach the scheduler.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::BlinkError;
use crate::utils::easing::deceleration_interval;

fn require_positive(field: &str, value: f32) -> Result<(), BlinkError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(BlinkError::invalid(format!("{} must be > 0, got {}", field, value)))
    }
}

fn require_non_negative(field: &str, value: f32) -> Result<(), BlinkError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(BlinkError::invalid(format!("{} must be >= 0, got {}", field, value)))
    }
}

/// Fade-in / hold / fade-out durations of a single tile pulse, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseTiming {
    /// Overlay fading away (tile lighting up).
    pub fade_in: f32,
    /// Time the tile stays lit.
    pub hold: f32,
    /// Overlay fading back.
    pub fade_out: f32,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            fade_in: 0.05,
            hold: 0.1,
            fade_out: 0.08,
        }
    }
}

impl PulseTiming {
    pub const fn new(fade_in: f32, hold: f32, fade_out: f32) -> Self {
        Self {
            fade_in,
            hold,
            fade_out,
        }
    }

    /// Length of one complete pulse cycle.
    pub fn total(&self) -> f32 {
        self.fade_in + self.hold + self.fade_out
    }

    fn validate(&self) -> Result<(), BlinkError> {
        require_non_negative("pulse.fade_in", self.fade_in)?;
        require_non_negative("pulse.hold", self.hold)?;
        require_non_negative("pulse.fade_out", self.fade_out)
    }
}

/// Timing of the reward reveal.
///
/// Invariants: `total_duration > 0`, `0 < start_interval <= end_interval`,
/// `easing_power >= 1`, `final_reveal_delay >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SequenceConfigData", into = "SequenceConfigData")]
pub struct SequenceConfig {
    total_duration: f32,
    start_interval: f32,
    end_interval: f32,
    easing_power: f32,
    final_reveal_delay: f32,
    pulse: PulseTiming,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            total_duration: 3.0,
            start_interval: 0.08,
            end_interval: 0.5,
            easing_power: 2.0,
            final_reveal_delay: 0.75,
            pulse: PulseTiming::default(),
        }
    }
}

impl SequenceConfig {
    /// Builds a validated config with the default pulse timing.
    pub fn new(
        total_duration: f32,
        start_interval: f32,
        end_interval: f32,
        easing_power: f32,
        final_reveal_delay: f32,
    ) -> Result<Self, BlinkError> {
        let config = Self {
            total_duration,
            start_interval,
            end_interval,
            easing_power,
            final_reveal_delay,
            pulse: PulseTiming::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the pulse timing, keeping the config valid.
    pub fn with_pulse(self, pulse: PulseTiming) -> Result<Self, BlinkError> {
        pulse.validate()?;
        Ok(Self { pulse, ..self })
    }

    fn validate(&self) -> Result<(), BlinkError> {
        require_positive("total_duration", self.total_duration)?;
        require_positive("start_interval", self.start_interval)?;
        require_positive("end_interval", self.end_interval)?;
        if self.end_interval < self.start_interval {
            return Err(BlinkError::invalid(format!(
                "end_interval ({}) must be >= start_interval ({})",
                self.end_interval, self.start_interval
            )));
        }
        if !(self.easing_power >= 1.0 && self.easing_power.is_finite()) {
            return Err(BlinkError::invalid(format!(
                "easing_power must be >= 1, got {}",
                self.easing_power
            )));
        }
        require_non_negative("final_reveal_delay", self.final_reveal_delay)?;
        self.pulse.validate()
    }

    pub fn total_duration(&self) -> f32 {
        self.total_duration
    }

    pub fn start_interval(&self) -> f32 {
        self.start_interval
    }

    pub fn end_interval(&self) -> f32 {
        self.end_interval
    }

    pub fn easing_power(&self) -> f32 {
        self.easing_power
    }

    pub fn final_reveal_delay(&self) -> f32 {
        self.final_reveal_delay
    }

    pub fn pulse(&self) -> PulseTiming {
        self.pulse
    }

    /// Wait after the last pulse so it can finish before tiles are reset.
    pub fn cooldown(&self) -> f32 {
        self.pulse.total()
    }

    /// Spacing to the next pulse at the given progress through the blinking phase.
    pub fn interval_at(&self, progress: f32) -> f32 {
        deceleration_interval(
            progress,
            self.start_interval,
            self.end_interval,
            self.easing_power,
        )
    }

    /// Upper bound on the number of pulses before blinking ends.
    pub fn max_pulses(&self) -> usize {
        (self.total_duration / self.start_interval).ceil() as usize + 1
    }
}

/// Serialized form of [`SequenceConfig`]; missing fields take default tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct SequenceConfigData {
    total_duration: f32,
    start_interval: f32,
    end_interval: f32,
    easing_power: f32,
    final_reveal_delay: f32,
    pulse: PulseTiming,
}

impl Default for SequenceConfigData {
    fn default() -> Self {
        SequenceConfig::default().into()
    }
}

impl From<SequenceConfig> for SequenceConfigData {
    fn from(config: SequenceConfig) -> Self {
        Self {
            total_duration: config.total_duration,
            start_interval: config.start_interval,
            end_interval: config.end_interval,
            easing_power: config.easing_power,
            final_reveal_delay: config.final_reveal_delay,
            pulse: config.pulse,
        }
    }
}

impl TryFrom<SequenceConfigData> for SequenceConfig {
    type Error = BlinkError;

    fn try_from(data: SequenceConfigData) -> Result<Self, Self::Error> {
        SequenceConfig::new(
            data.total_duration,
            data.start_interval,
            data.end_interval,
            data.easing_power,
            data.final_reveal_delay,
        )?
        .with_pulse(data.pulse)
    }
}

/// Pitch ramp applied to blink sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkSfxConfig {
    /// Pitch of the first blink in a sequence.
    pub starting_pitch: f32,
    /// Ceiling for the ramp.
    pub max_pitch: f32,
    /// Added after every blink.
    pub pitch_increment: f32,
}

impl Default for BlinkSfxConfig {
    fn default() -> Self {
        Self {
            starting_pitch: 1.0,
            max_pitch: 2.0,
            pitch_increment: 0.05,
        }
    }
}

/// Multi-tile celebration bursts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    /// How long bursts keep firing.
    pub duration: f32,
    /// Shortest wait between bursts.
    pub min_interval: f32,
    /// Longest wait between bursts.
    pub max_interval: f32,
    /// Fewest tiles lit per burst.
    pub min_simultaneous: usize,
    /// Most tiles lit per burst.
    pub max_simultaneous: usize,
    /// Pulse cycle used for every tile in a burst.
    pub pulse: PulseTiming,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            min_interval: 0.1,
            max_interval: 0.2,
            min_simultaneous: 1,
            max_simultaneous: 2,
            pulse: PulseTiming::new(0.03, 0.05, 0.08),
        }
    }
}

impl CelebrationConfig {
    pub fn validate(&self) -> Result<(), BlinkError> {
        require_non_negative("celebration.duration", self.duration)?;
        // A zero interval would never let the clock advance
        require_positive("celebration.min_interval", self.min_interval)?;
        require_positive("celebration.max_interval", self.max_interval)?;
        if self.max_interval < self.min_interval {
            return Err(BlinkError::invalid(
                "celebration.max_interval must be >= celebration.min_interval",
            ));
        }
        if self.min_simultaneous == 0 || self.max_simultaneous < self.min_simultaneous {
            return Err(BlinkError::invalid(format!(
                "celebration burst size must satisfy 1 <= min ({}) <= max ({})",
                self.min_simultaneous, self.max_simultaneous
            )));
        }
        self.pulse.validate()
    }
}

/// All blink tuning, usually loaded once from a JSON file.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkSettings {
    pub sequence: SequenceConfig,
    pub sfx: BlinkSfxConfig,
    pub celebration: CelebrationConfig,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl BlinkSettings {
    /// Parses and validates settings from JSON text.
    pub fn from_json_str(contents: &str) -> Result<Self, BlinkError> {
        let settings: Self =
            serde_json::from_str(contents).map_err(|e| BlinkError::Config(e.to_string()))?;
        settings.celebration.validate()?;
        Ok(settings)
    }

    /// Reads settings from `path`.
    pub fn try_load(path: &Path) -> Result<Self, BlinkError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BlinkError::Config(format!("failed to read {:?}: {}", path, e)))?;
        Self::from_json_str(&contents)
    }

    /// Reads settings from `path`, falling back to defaults on any failure.
    pub fn load_from_file(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                info!("Loaded blink settings from {:?}", path);
                settings
            }
            Err(e) => {
                error!("{}; using default blink settings", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SequenceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_interval(), 0.08);
        assert_eq!(config.end_interval(), 0.5);
        assert!((config.cooldown() - 0.23).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_inverted_intervals() {
        let result = SequenceConfig::new(3.0, 0.5, 0.1, 2.0, 0.0);
        assert!(matches!(result, Err(BlinkError::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(SequenceConfig::new(0.0, 0.1, 0.2, 1.0, 0.0).is_err());
        assert!(SequenceConfig::new(1.0, 0.0, 0.2, 1.0, 0.0).is_err());
        assert!(SequenceConfig::new(1.0, 0.1, 0.2, 0.5, 0.0).is_err());
        assert!(SequenceConfig::new(1.0, 0.1, 0.2, 1.0, -0.1).is_err());
        assert!(SequenceConfig::new(f32::NAN, 0.1, 0.2, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_negative_pulse() {
        let config = SequenceConfig::default();
        assert!(config.with_pulse(PulseTiming::new(-0.1, 0.0, 0.0)).is_err());
        assert!(config.with_pulse(PulseTiming::new(0.0, 0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_equal_intervals_allowed() {
        let config = SequenceConfig::new(1.0, 0.2, 0.2, 1.0, 0.0).unwrap();
        assert_eq!(config.interval_at(0.0), 0.2);
        assert_eq!(config.interval_at(1.0), 0.2);
    }

    #[test]
    fn test_max_pulses() {
        let config = SequenceConfig::new(1.0, 0.25, 0.5, 1.0, 0.0).unwrap();
        assert_eq!(config.max_pulses(), 5);
    }

    #[test]
    fn test_settings_from_partial_json() {
        let json = r#"{
            "sequence": { "total_duration": 2.0, "pulse": { "hold": 0.2 } },
            "seed": 17
        }"#;
        let settings = BlinkSettings::from_json_str(json).unwrap();
        assert_eq!(settings.sequence.total_duration(), 2.0);
        assert_eq!(settings.sequence.start_interval(), 0.08);
        assert_eq!(settings.sequence.pulse().hold, 0.2);
        assert_eq!(settings.sequence.pulse().fade_in, 0.05);
        assert_eq!(settings.seed, Some(17));
        assert_eq!(settings.celebration, CelebrationConfig::default());
    }

    #[test]
    fn test_settings_reject_invalid_sequence() {
        let json = r#"{ "sequence": { "start_interval": 0.9, "end_interval": 0.1 } }"#;
        assert!(BlinkSettings::from_json_str(json).is_err());
    }

    #[test]
    fn test_settings_reject_invalid_celebration() {
        let json = r#"{ "celebration": { "min_simultaneous": 3, "max_simultaneous": 2 } }"#;
        assert!(matches!(
            BlinkSettings::from_json_str(json),
            Err(BlinkError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_settings_reject_malformed_json() {
        assert!(matches!(
            BlinkSettings::from_json_str("{ not json"),
            Err(BlinkError::Config(_))
        ));
    }

    #[test]
    fn test_settings_round_trip_json() {
        let settings = BlinkSettings {
            seed: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(BlinkSettings::from_json_str(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let settings = BlinkSettings::load_from_file(Path::new("/nonexistent/blink.json"));
        assert_eq!(settings, BlinkSettings::default());
    }
}
