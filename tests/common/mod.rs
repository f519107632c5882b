//! Shared test infrastructure for strip-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use strip_animator::{Alliance, AnimationState, Effect, Frame, MAX_HUE, Pixel, TimeSource};

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock clock with controllable time, in seconds
pub struct MockClock {
    current_time: core::cell::Cell<f64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(0.0),
        }
    }

    /// Advance time by the given number of seconds
    pub fn advance(&self, seconds: f64) {
        self.current_time.set(self.current_time.get() + seconds);
    }

    pub fn set_time(&self, seconds: f64) {
        self.current_time.set(seconds);
    }
}

impl TimeSource for MockClock {
    fn now(&self) -> f64 {
        self.current_time.get()
    }
}

// ============================================================================
// Pixel constants
// ============================================================================

/// A color no generator produces, for spotting untouched pixels
pub const SENTINEL: Pixel = Pixel::hsv(1, 2, 3);

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Frame at `now` with no alliance reported
pub fn frame(now: f64) -> Frame {
    Frame::new(now, Alliance::Unknown)
}

/// Renders one frame with throwaway state
pub fn render_once<E: Effect>(effect: &E, pixels: &mut [Pixel], now: f64) {
    let mut state = AnimationState::default();
    effect.render(pixels, &frame(now), &mut state);
}

/// Number of pixels that emit light
pub fn lit_count(pixels: &[Pixel]) -> usize {
    pixels.iter().filter(|px| !px.is_off()).count()
}

/// Run-length encoding of lit (`true`) and unlit (`false`) pixels
pub fn runs(pixels: &[Pixel]) -> Vec<(bool, usize)> {
    let mut runs: Vec<(bool, usize)> = Vec::new();
    for px in pixels {
        let lit = !px.is_off();
        match runs.last_mut() {
            Some((kind, count)) if *kind == lit => *count += 1,
            _ => runs.push((lit, 1)),
        }
    }
    runs
}

/// Every pixel within device range
pub fn assert_in_range(pixels: &[Pixel]) {
    for (i, px) in pixels.iter().enumerate() {
        assert!(px.hue() <= MAX_HUE, "pixel {} has hue {}", i, px.hue());
    }
}

/// Shortest distance between two indices on a ring
pub fn ring_distance(a: usize, b: usize, len: usize) -> usize {
    let d = a.abs_diff(b) % len;
    d.min(len - d)
}
