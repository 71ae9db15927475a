use crate::control::message::{ControlMessage, MessageReceiver, NoMessages};
use crate::graph::node::SampleProducer;
use crate::graph::sine::SineNode;

/// A sine node that picks up parameter changes at block boundaries.
///
/// Pending messages are drained at the top of every `fill_buffer` call, so a
/// change lands on the first frame of the next block and never mid-block.
pub struct LiveSine<R: MessageReceiver = NoMessages> {
    node: SineNode,
    rx: R,
}

impl<R: MessageReceiver> LiveSine<R> {
    pub fn new(node: SineNode, rx: R) -> Self {
        Self { node, rx }
    }

    pub fn node(&self) -> &SineNode {
        &self.node
    }

    /// Apply everything queued so far without rendering.
    pub fn drain_messages(&mut self) -> usize {
        let mut applied = 0;
        while let Some(msg) = self.rx.pop() {
            self.node.apply(msg);
            applied += 1;
        }
        applied
    }

    /// Apply a message directly, bypassing the queue.
    pub fn apply(&mut self, msg: ControlMessage) {
        self.node.apply(msg);
    }
}

impl<R: MessageReceiver> SampleProducer for LiveSine<R> {
    fn fill_buffer(&mut self, buffer: &mut [f32], length: usize, num_chans: usize) -> usize {
        self.drain_messages();
        self.node.fill_buffer(buffer, length, num_chans)
    }
}
