use rtrb::{Producer, PushError};

use crate::control::message::ControlMessage;
use crate::dsp::oscillator::PhaseMode;
use crate::error::ControlError;

/// Control-thread handle for a running generator.
///
/// Every setter validates first and then pushes onto a wait-free queue; it
/// never touches the oscillator directly.
pub struct SineController {
    tx: Producer<ControlMessage>,
}

impl SineController {
    pub fn new(tx: Producer<ControlMessage>) -> Self {
        Self { tx }
    }

    pub fn set_frequency(&mut self, frequency: f64) -> Result<(), ControlError> {
        if !frequency.is_finite() {
            log::warn!("ignoring non-finite frequency {frequency}");
            return Err(ControlError::NonFiniteFrequency(frequency));
        }
        self.send(ControlMessage::SetFrequency(frequency))
    }

    pub fn set_phase_mode(&mut self, mode: PhaseMode) -> Result<(), ControlError> {
        self.send(ControlMessage::SetPhaseMode(mode))
    }

    /// Set a parameter by name from its string form.
    ///
    /// Recognised names:
    /// - `freq` / `frequency`: Hz as a decimal number
    /// - `phase_mode` / `wrap`: `unbounded`|`wrapped`, `true`|`false`, `1`|`0`
    pub fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), ControlError> {
        let msg = parse_parameter(name, value).inspect_err(|err| log::warn!("{err}"))?;
        match msg {
            ControlMessage::SetFrequency(hz) => self.set_frequency(hz),
            ControlMessage::SetPhaseMode(mode) => self.set_phase_mode(mode),
        }
    }

    /// Free slots left in the queue.
    pub fn slots(&self) -> usize {
        self.tx.slots()
    }

    fn send(&mut self, msg: ControlMessage) -> Result<(), ControlError> {
        match self.tx.push(msg) {
            Ok(()) => {
                log::debug!("queued {msg:?}");
                Ok(())
            }
            Err(PushError::Full(dropped)) => {
                log::warn!("control queue full, dropped {dropped:?}");
                Err(ControlError::QueueFull)
            }
        }
    }
}

/// Turn a `(name, value)` string pair into a message.
pub fn parse_parameter(name: &str, value: &str) -> Result<ControlMessage, ControlError> {
    let invalid = || ControlError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    };
    let value = value.trim();

    match name.trim() {
        "freq" | "frequency" => {
            let hz: f64 = value.parse().map_err(|_| invalid())?;
            if !hz.is_finite() {
                return Err(ControlError::NonFiniteFrequency(hz));
            }
            Ok(ControlMessage::SetFrequency(hz))
        }
        "phase_mode" | "wrap" => {
            let mode = match value.to_ascii_lowercase().as_str() {
                "wrapped" | "true" | "1" => PhaseMode::Wrapped,
                "unbounded" | "false" | "0" => PhaseMode::Unbounded,
                _ => return Err(invalid()),
            };
            Ok(ControlMessage::SetPhaseMode(mode))
        }
        other => Err(ControlError::UnknownParameter(other.to_string())),
    }
}
