use live_sine::{SampleProducer, SineConfig, SineNode};

fn main() {
    let config = SineConfig::default().with_frequency(220.0);
    let osc = config.build().expect("default config is valid");
    let mut producer: Box<dyn SampleProducer> = Box::new(SineNode::new(osc));

    let frames = 512;
    let mut buffer = vec![0.0f32; frames * 2];
    let rendered = producer.fill_buffer(&mut buffer, frames, 2);

    println!("Rendered {rendered} stereo frames");
    for (i, frame) in buffer.chunks(2).take(4).enumerate() {
        println!("  frame {i}: L={:+.6} R={:+.6}", frame[0], frame[1]);
    }
}
