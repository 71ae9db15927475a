// Purpose: parameter changes from a control thread into the realtime fill.
// The control side validates and queues; the audio side drains at block start.

#[cfg(feature = "rtrb")]
pub mod controller;
pub mod live;
pub mod message;

#[cfg(feature = "rtrb")]
pub use controller::{parse_parameter, SineController};
pub use live::LiveSine;
pub use message::{ControlMessage, MessageReceiver, NoMessages};

#[cfg(feature = "rtrb")]
use crate::{config::SineConfig, error::ConfigError, graph::sine::SineNode};

/// Build a connected controller and realtime producer from a config.
///
/// `capacity` is the number of changes that can be queued between two blocks.
#[cfg(feature = "rtrb")]
pub fn live_sine(
    config: &SineConfig,
    capacity: usize,
) -> Result<(SineController, LiveSine<rtrb::Consumer<ControlMessage>>), ConfigError> {
    let osc = config.build()?;
    let (tx, rx) = rtrb::RingBuffer::<ControlMessage>::new(capacity);
    Ok((SineController::new(tx), LiveSine::new(SineNode::new(osc), rx)))
}

#[cfg(all(test, feature = "rtrb"))]
mod tests {
    use super::*;
    use crate::graph::node::SampleProducer;

    #[test]
    fn pair_is_connected() {
        let (mut ctl, mut live) = live_sine(&SineConfig::default(), 4).unwrap();
        ctl.set_parameter("freq", "110").unwrap();
        let mut buffer = [0.0f32; 4];
        live.fill_buffer(&mut buffer, 2, 2);
        assert_eq!(live.node().oscillator().frequency(), 110.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SineConfig::default().with_sample_rate(0.0);
        assert!(live_sine(&config, 4).is_err());
    }
}
