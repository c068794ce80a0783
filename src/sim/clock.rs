//! Frame clock
//!
//! Turns monotonic wall-clock samples into bounded frame deltas.

use crate::consts::MAX_FRAME_DT;

/// Tracks the previous time sample and yields clamped deltas
#[derive(Debug, Clone, Default)]
pub struct Clock {
    last: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a time sample (seconds) and get the delta since the previous one.
    ///
    /// The first sample yields 0. Stalls longer than `MAX_FRAME_DT` (tab
    /// switches, debugger pauses) are clamped, and a sample that goes
    /// backwards yields 0.
    pub fn advance(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Forget the last sample so the next frame starts from zero
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_is_zero() {
        let mut clock = Clock::new();
        assert_eq!(clock.advance(12.5), 0.0);
    }

    #[test]
    fn test_regular_delta() {
        let mut clock = Clock::new();
        clock.advance(1.0);
        let dt = clock.advance(1.016);
        assert!((dt - 0.016).abs() < 1e-5);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = Clock::new();
        clock.advance(1.0);
        assert_eq!(clock.advance(9.0), MAX_FRAME_DT);
    }

    #[test]
    fn test_backwards_sample_yields_zero() {
        let mut clock = Clock::new();
        clock.advance(5.0);
        assert_eq!(clock.advance(4.0), 0.0);
        // Resumes from the new baseline
        let dt = clock.advance(4.02);
        assert!((dt - 0.02).abs() < 1e-5);
    }

    #[test]
    fn test_reset() {
        let mut clock = Clock::new();
        clock.advance(1.0);
        clock.reset();
        assert_eq!(clock.advance(100.0), 0.0);
    }
}
