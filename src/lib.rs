pub mod config; // Generator settings and validation
pub mod control; // Cross-thread parameter changes
pub mod dsp;
pub mod error;
pub mod graph; // Host-facing sample producers

pub use config::SineConfig;
pub use dsp::oscillator::{PhaseMode, SineOscillator};
pub use error::{ConfigError, ControlError};
pub use graph::node::SampleProducer;
pub use graph::sine::SineNode;

pub const DEFAULT_SAMPLE_RATE: f64 = 44_100.0;
pub const DEFAULT_FREQUENCY: f64 = 220.0;
