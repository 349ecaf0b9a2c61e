//! Frame timing
//!
//! Element velocities are in pixels per millisecond and
//! [`Element::update`](crate::element::Element::update) takes a
//! millisecond delta, so the loop side needs millisecond timing:
//! [`FrameClock`] for variable-step loops, [`FixedStep`] for fixed-rate
//! ones.

use std::time::{Duration, Instant};

/// Variable-step frame clock.
///
/// Call [`tick`](FrameClock::tick) once per frame and feed the returned
/// delta to the elements' `update`.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Milliseconds since the previous tick. The first tick measures from
    /// construction.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f32() * 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-rate stepper for fixed-step loops.
///
/// Blocks in [`wait`](FixedStep::wait) until the next step is due, keeping
/// the loop at the requested rate and counting completed steps.
#[derive(Debug)]
pub struct FixedStep {
    last: Instant,
    step: Duration,
    tick: u64,
}

impl FixedStep {
    /// Create a stepper with the desired steps-per-second rate.
    pub fn new(rate_hz: f32) -> Self {
        Self {
            last: Instant::now(),
            step: Duration::from_secs_f32(1.0 / rate_hz),
            tick: 0,
        }
    }

    /// The fixed delta per step, in milliseconds.
    pub fn step_ms(&self) -> f32 {
        self.step.as_secs_f32() * 1000.0
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Blocks until the next step is due, then advances the step count.
    pub fn wait(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.step {
            std::thread::sleep(self.step - elapsed);
        }
        self.last = Instant::now();
        self.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_measures_elapsed_time() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let dt = clock.tick();
        // sleep guarantees at least the requested duration
        assert!(dt >= 4.0, "dt was {dt}");
    }

    #[test]
    fn test_tick_resets_between_calls() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(20));
        clock.tick();
        let dt = clock.tick();
        assert!(dt < 20.0, "second tick should not include the sleep, was {dt}");
    }

    #[test]
    fn test_step_ms() {
        let step = FixedStep::new(100.0);
        assert!((step.step_ms() - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_wait_counts_and_paces_steps() {
        let mut step = FixedStep::new(500.0); // 2ms per step
        let start = Instant::now();
        step.wait();
        step.wait();
        assert_eq!(step.tick(), 2);
        assert!(start.elapsed() >= Duration::from_millis(3));
    }
}
