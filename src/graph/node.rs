/// Number of whole frames a host buffer can hold, capped at `length`.
///
/// Returns 0 for a zero channel count.
#[inline]
pub fn frames_that_fit(buffer_len: usize, length: usize, num_chans: usize) -> usize {
    if num_chans == 0 {
        return 0;
    }
    debug_assert!(
        length
            .checked_mul(num_chans)
            .is_some_and(|needed| buffer_len >= needed),
        "host buffer holds {buffer_len} samples, needs {length} frames of {num_chans} channels"
    );
    length.min(buffer_len / num_chans)
}

/// Core trait a realtime host calls into for audio.
///
/// Producers:
/// - do NOT allocate
/// - do NOT block or log
/// - ONLY write into the buffer they are handed
pub trait SampleProducer: Send {
    /// Fill `length` interleaved frames of `num_chans` channels each.
    ///
    /// The buffer needs room for `length * num_chans` samples. Debug builds
    /// assert on a short buffer; release builds render only the whole frames
    /// that fit. Returns the number of frames rendered.
    fn fill_buffer(&mut self, buffer: &mut [f32], length: usize, num_chans: usize) -> usize;

    /// Render a mono block.
    fn render_mono(&mut self, out: &mut [f32]) -> usize {
        let length = out.len();
        self.fill_buffer(out, length, 1)
    }
}

/// Allow boxed producers to be used as producers (for dynamic dispatch)
impl SampleProducer for Box<dyn SampleProducer> {
    fn fill_buffer(&mut self, buffer: &mut [f32], length: usize, num_chans: usize) -> usize {
        (**self).fill_buffer(buffer, length, num_chans)
    }

    fn render_mono(&mut self, out: &mut [f32]) -> usize {
        (**self).render_mono(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_frames_only() {
        assert_eq!(frames_that_fit(8, 4, 2), 4);
        assert_eq!(frames_that_fit(16, 4, 2), 4);
        assert_eq!(frames_that_fit(12, 4, 3), 4);
    }

    #[test]
    fn zero_channels_fit_nothing() {
        assert_eq!(frames_that_fit(8, 4, 0), 0);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn short_buffer_is_clamped() {
        assert_eq!(frames_that_fit(7, 4, 2), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "host buffer holds")]
    fn short_buffer_trips_debug_assert() {
        frames_that_fit(7, 4, 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "host buffer holds")]
    fn overflowing_request_trips_debug_assert() {
        frames_that_fit(8, usize::MAX, 2);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn overflowing_request_is_clamped() {
        assert_eq!(frames_that_fit(8, usize::MAX, 2), 4);
    }
}
