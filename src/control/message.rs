#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::dsp::oscillator::PhaseMode;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlMessage {
    SetFrequency(f64),
    SetPhaseMode(PhaseMode),
}

pub trait MessageReceiver: Send {
    fn pop(&mut self) -> Option<ControlMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ControlMessage> {
    fn pop(&mut self) -> Option<ControlMessage> {
        Consumer::pop(self).ok()
    }
}

/// Receiver for producers nobody controls at runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMessages;

impl MessageReceiver for NoMessages {
    fn pop(&mut self) -> Option<ControlMessage> {
        None
    }
}
