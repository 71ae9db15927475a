use std::f64::consts::TAU;

use live_sine::{
    control::live_sine, dsp::phase_increment, PhaseMode, SampleProducer, SineConfig, SineNode,
    SineOscillator,
};
use rustfft::{num_complex::Complex, FftPlanner};

/// Frequency of the loudest FFT bin above DC.
fn dominant_frequency(samples: &[f32], sample_rate: f64) -> f64 {
    let mut bins: Vec<Complex<f32>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    FftPlanner::new()
        .plan_fft_forward(bins.len())
        .process(&mut bins);

    let half = bins.len() / 2;
    let (index, _) = bins[1..half]
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
        .unwrap();
    (index + 1) as f64 * sample_rate / samples.len() as f64
}

#[test]
fn default_tone_first_stereo_frame() {
    let mut node = SineNode::default();
    let mut buffer = [0.0f32; 2];
    node.fill_buffer(&mut buffer, 1, 2);

    let expected = (220.0 * TAU / 44_100.0).sin() as f32;
    assert_eq!(buffer[0], buffer[1]);
    assert!((buffer[0] - expected).abs() < 1e-7);
}

#[test]
fn four_stereo_frames_follow_generator() {
    let mut node = SineNode::default();
    let mut reference = SineOscillator::default();
    let mut buffer = [0.0f32; 8];

    assert_eq!(node.fill_buffer(&mut buffer, 4, 2), 4);
    for pair in buffer.chunks(2) {
        assert_eq!(pair[0], pair[1]);
        assert_eq!(pair[0], reference.next_sample());
    }
}

#[test]
fn identical_generators_render_identically() {
    let mut a = SineNode::from_freq(330.0, 48_000.0);
    let mut b = SineNode::from_freq(330.0, 48_000.0);
    let mut buf_a = vec![0.0f32; 1024];
    let mut buf_b = vec![0.0f32; 1024];

    for _ in 0..8 {
        a.fill_buffer(&mut buf_a, 512, 2);
        b.fill_buffer(&mut buf_b, 512, 2);
        assert_eq!(buf_a, buf_b);
    }
}

#[test]
fn long_run_phase_is_not_wrapped() {
    let mut osc = SineOscillator::default();
    let n = 10 * 44_100;
    for _ in 0..n {
        osc.next_sample();
    }
    let expected = n as f64 * phase_increment(220.0, 44_100.0);
    let rel = (osc.phase() - expected).abs() / expected;
    assert!(rel < 1e-9, "phase {} vs {expected}", osc.phase());
}

#[test]
fn samples_stay_in_unit_range() {
    for mode in [PhaseMode::Unbounded, PhaseMode::Wrapped] {
        let mut node = SineNode::new(SineOscillator::new(997.0, 44_100.0).with_phase_mode(mode));
        let mut buffer = vec![0.0f32; 4096 * 2];
        for _ in 0..16 {
            node.fill_buffer(&mut buffer, 4096, 2);
            assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)));
        }
    }
}

#[test]
fn default_pitch_is_220_hz() {
    let mut node = SineNode::default();
    let mut mono = vec![0.0f32; 44_100];
    node.render_mono(&mut mono);

    // One-second window, so bins are 1 Hz apart
    let hz = dominant_frequency(&mono, 44_100.0);
    assert!((hz - 220.0).abs() <= 1.0, "dominant {hz} Hz");
}

#[test]
fn pitch_survives_device_rate() {
    let config = SineConfig::default().with_sample_rate(48_000.0);
    let mut node = SineNode::new(config.build().unwrap());
    let mut mono = vec![0.0f32; 48_000];
    node.render_mono(&mut mono);

    let hz = dominant_frequency(&mono, 48_000.0);
    assert!((hz - 220.0).abs() <= 1.0, "dominant {hz} Hz");
}

#[test]
fn controller_retunes_between_blocks() {
    let (mut controller, mut live) = live_sine(&SineConfig::default(), 8).unwrap();
    let mut buffer = vec![0.0f32; 44_100 * 2];

    controller.set_parameter("freq", "440").unwrap();
    live.fill_buffer(&mut buffer, 44_100, 2);

    let left: Vec<f32> = buffer.chunks(2).map(|frame| frame[0]).collect();
    let hz = dominant_frequency(&left, 44_100.0);
    assert!((hz - 440.0).abs() <= 1.0, "dominant {hz} Hz");
}

#[test]
fn boxed_host_view() {
    let (_controller, live) = live_sine(&SineConfig::default(), 8).unwrap();
    let mut producers: Vec<Box<dyn SampleProducer>> =
        vec![Box::new(SineNode::default()), Box::new(live)];

    let mut outputs = Vec::new();
    for producer in producers.iter_mut() {
        let mut buffer = vec![0.0f32; 256];
        producer.fill_buffer(&mut buffer, 128, 2);
        outputs.push(buffer);
    }
    assert_eq!(outputs[0], outputs[1]);
}
