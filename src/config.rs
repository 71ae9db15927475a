//! Generator settings.
//!
//! Defaults reproduce the classic 220 Hz tone at 44.1 kHz. Hosts running at a
//! different rate should pass their own sample rate so the pitch is kept.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::{PhaseMode, SineOscillator};
use crate::error::ConfigError;
use crate::{DEFAULT_FREQUENCY, DEFAULT_SAMPLE_RATE};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineConfig {
    /// Host sample rate in Hz
    pub sample_rate: f64,
    /// Initial frequency in Hz
    pub frequency: f64,
    pub phase_mode: PhaseMode,
}

impl SineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_phase_mode(mut self, mode: PhaseMode) -> Self {
        self.phase_mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            log::warn!("rejecting sample rate {}", self.sample_rate);
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        if !self.frequency.is_finite() {
            log::warn!("rejecting frequency {}", self.frequency);
            return Err(ConfigError::NonFiniteFrequency(self.frequency));
        }
        Ok(())
    }

    /// Validate and construct the oscillator.
    pub fn build(&self) -> Result<SineOscillator, ConfigError> {
        self.validate()?;
        log::debug!(
            "sine generator: {} Hz @ {} Hz, {} phase",
            self.frequency,
            self.sample_rate,
            self.phase_mode.as_str()
        );
        Ok(SineOscillator::new(self.frequency, self.sample_rate).with_phase_mode(self.phase_mode))
    }
}

impl Default for SineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            frequency: DEFAULT_FREQUENCY,
            phase_mode: PhaseMode::Unbounded,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let config = SineConfig::new()
            .with_sample_rate(48_000.0)
            .with_frequency(330.0)
            .with_phase_mode(PhaseMode::Wrapped);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""phase_mode":"wrapped""#), "{json}");
        let back: SineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: SineConfig = serde_json::from_str(r#"{"frequency": 440.0}"#).unwrap();
        assert_eq!(config.frequency, 440.0);
        assert_eq!(config.sample_rate, 44_100.0);
        assert_eq!(config.phase_mode, PhaseMode::Unbounded);

        let empty: SineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SineConfig::default());
    }

    #[test]
    fn phase_mode_uses_snake_case_names() {
        let mode: PhaseMode = serde_json::from_str(r#""unbounded""#).unwrap();
        assert_eq!(mode, PhaseMode::Unbounded);
        assert!(serde_json::from_str::<PhaseMode>(r#""Wrapped""#).is_err());
    }
}
