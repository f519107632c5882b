//! Pattern generators.
//!
//! Each generator is a small `Copy` parameter struct implementing [`Effect`].
//! Rendering mutates the pixel slice in place and may touch the engine's
//! [`AnimationState`]; nothing here allocates or fails. Every generator treats
//! an empty slice as a no-op.

use crate::engine::Alliance;
use crate::pixel::{MAX_HUE, Pixel, fill, wrap_hue};
use crate::state::{AnimationState, DashPhase};
use crate::time::steps;

/// Dimmest brightness a wave comet falls off to.
pub const WAVE_THRESHOLD: u8 = 100;

/// Width in pixels of a wave comet, edge to edge.
pub const WAVE_WIDTH: u8 = 16;

/// Inputs sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Wall-clock time in seconds.
    pub now: f64,
    /// Match alliance reported by the host.
    pub alliance: Alliance,
}

impl Frame {
    pub const fn new(now: f64, alliance: Alliance) -> Self {
        Self { now, alliance }
    }
}

/// Per-tick pixel computation for one pattern.
pub trait Effect {
    /// Renders one frame into `pixels`.
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, state: &mut AnimationState);
}

/// Shortest distance between two positions on a ring of `len` pixels.
#[inline]
fn circular_distance(a: i64, b: i64, len: usize) -> i64 {
    let len = len as i64;
    let d = (a - b).rem_euclid(len);
    d.min(len - d)
}

/// Same color on every pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solid(pub Pixel);

impl Effect for Solid {
    fn render(&self, pixels: &mut [Pixel], _: &Frame, _: &mut AnimationState) {
        fill(pixels, self.0);
    }
}

/// Where a progress bar gets its fill fraction from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    /// Constant fraction; clamped to `0.0..=1.0`.
    Fixed(f32),
    /// Repeatedly fills from empty to full, `per_second` times a second.
    Sweep { per_second: f64 },
}

impl Fill {
    /// Fraction of the strip to light at `now`, always within `0.0..=1.0`.
    pub fn fraction(&self, now: f64) -> f64 {
        let raw = match *self {
            Fill::Fixed(fraction) => fraction as f64,
            Fill::Sweep { per_second } => {
                let cycles = now * per_second;
                cycles - libm::floor(cycles)
            }
        };
        if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
    }
}

/// Lights the leading part of the strip and blanks the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    pub hue: u8,
    pub fill: Fill,
    /// When set, hue drops by one every `step` pixels for a rainbow tint.
    pub gradient_step: Option<u8>,
}

impl ProgressBar {
    pub const fn fixed(hue: u8, fraction: f32) -> Self {
        Self {
            hue,
            fill: Fill::Fixed(fraction),
            gradient_step: None,
        }
    }

    pub const fn gradient(mut self, step: u8) -> Self {
        self.gradient_step = Some(step);
        self
    }
}

impl Effect for ProgressBar {
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, _: &mut AnimationState) {
        fill(pixels, Pixel::OFF);

        let lit = ((pixels.len() as f64 * self.fill.fraction(frame.now)) as usize).min(pixels.len());
        for (i, px) in pixels[..lit].iter_mut().enumerate() {
            let hue = match self.gradient_step {
                Some(step) if step > 0 => wrap_hue(self.hue as i64 - (i / step as usize) as i64),
                _ => self.hue,
            };
            *px = Pixel::lit(hue);
        }
    }
}

/// Whole-strip breathing: one sinusoidal brightness shared by every pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulsing {
    pub hue: u8,
    pub saturation: u8,
    /// Angular speed in radians per second.
    pub speed: f64,
}

impl Pulsing {
    /// Brightness at `now`.
    pub fn value_at(&self, now: f64) -> u8 {
        let value = (libm::sin(now * self.speed) + 1.0) * 127.5;
        if value.is_nan() { 0 } else { value.clamp(0.0, 255.0) as u8 }
    }
}

impl Effect for Pulsing {
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, _: &mut AnimationState) {
        fill(pixels, Pixel::hsv(self.hue, self.saturation, self.value_at(frame.now)));
    }
}

/// Marching dashed line.
///
/// The gap/dash counters live in [`AnimationState`] and carry over between
/// ticks, so the exact phase depends on how many pixels have been drawn so
/// far, not only on the time. Changing the tick rate changes the look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dashes {
    pub hue: u8,
    /// Unlit pixels between dashes.
    pub gap: u16,
    /// Lit pixels per dash.
    pub length: u16,
    /// Rotation of the starting index, in pixels per second.
    pub speed: f64,
}

impl Effect for Dashes {
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, state: &mut AnimationState) {
        let len = pixels.len();
        if len == 0 {
            return;
        }
        if self.length == 0 {
            fill(pixels, Pixel::OFF);
            return;
        }

        let offset = steps(frame.now, self.speed).rem_euclid(len as i64) as usize;
        for i in 0..len {
            pixels[(i + offset) % len] = match state.dash.advance(self.gap, self.length) {
                DashPhase::Gap => Pixel::OFF,
                DashPhase::Dash => Pixel::lit(self.hue),
            };
        }
    }
}

/// A bright spot travelling around the strip with a linear falloff.
///
/// Only pixels brighter than `threshold` are written, so several hotspots can
/// be layered over one background without erasing each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    /// Added to the moving center, in pixels.
    pub center_offset: usize,
    /// Pixels per second.
    pub speed: f64,
    pub hue: u8,
    pub saturation: u8,
    pub threshold: u8,
    pub width: u8,
}

impl Hotspot {
    pub const fn new(center_offset: usize, speed: f64, hue: u8, saturation: u8) -> Self {
        Self {
            center_offset,
            speed,
            hue,
            saturation,
            threshold: WAVE_THRESHOLD,
            width: WAVE_WIDTH,
        }
    }

    /// Center pixel at `now` for a strip of `len` pixels. `len` must be non-zero.
    pub fn center(&self, now: f64, len: usize) -> usize {
        let travelled = steps(now, self.speed).rem_euclid(len as i64) as usize;
        (travelled + self.center_offset) % len
    }

    /// Brightness `distance` pixels away from the center.
    pub fn value_at(&self, distance: usize) -> i64 {
        let falloff = 2 * (255 - self.threshold as i64) / (self.width.max(1) as i64);
        255 - distance as i64 * falloff
    }
}

impl Effect for Hotspot {
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, _: &mut AnimationState) {
        let len = pixels.len();
        if len == 0 {
            return;
        }

        let center = self.center(frame.now, len) as i64;
        for (i, px) in pixels.iter_mut().enumerate() {
            let distance = circular_distance(center, i as i64, len) as usize;
            let value = self.value_at(distance);
            if value > self.threshold as i64 {
                *px = Pixel::hsv(self.hue, self.saturation, value.min(255) as u8);
            }
        }
    }
}

/// Tint of one comet in a [`RollingWave`], relative to the wave's hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comet {
    pub hue_shift: u8,
    pub saturation: u8,
}

impl Comet {
    pub const fn new(hue_shift: u8, saturation: u8) -> Self {
        Self {
            hue_shift,
            saturation,
        }
    }
}

/// Three comets spaced a third of the strip apart over a dim background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingWave {
    pub hue: u8,
    pub speed: f64,
    pub comets: [Comet; 3],
}

impl Effect for RollingWave {
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, state: &mut AnimationState) {
        let len = pixels.len();
        fill(pixels, Pixel::hsv(self.hue, 255, WAVE_THRESHOLD));

        for (k, comet) in self.comets.iter().enumerate() {
            Hotspot::new(
                k * len / 3,
                self.speed,
                wrap_hue(self.hue as i64 + comet.hue_shift as i64),
                comet.saturation,
            )
            .render(pixels, frame, state);
        }
    }
}

/// A band of saturation sweeping along the strip at constant hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tide {
    pub hue: u8,
    /// Lowest saturation the band reaches.
    pub saturation_floor: u8,
    /// Phase advance in saturation steps per second.
    pub rate: f64,
}

impl Effect for Tide {
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, state: &mut AnimationState) {
        let len = pixels.len();
        if len == 0 {
            return;
        }

        let range = 256 - self.saturation_floor as i64;
        let phase = steps(frame.now, self.rate).rem_euclid(range);
        state.saturation_phase = phase as f64;

        for (i, px) in pixels.iter_mut().enumerate() {
            let band = (phase + i as i64 * range / len as i64) % range;
            *px = Pixel::hsv(self.hue, (self.saturation_floor as i64 + band) as u8, 255);
        }
    }
}

/// A hue gradient that swings back and forth instead of rotating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RockingWave {
    /// Span of hues covered by the gradient.
    pub hue_range: u8,
    /// Hue the span starts from.
    pub hue_base: u8,
    /// Phase advance in degrees per second.
    pub rate: f64,
}

impl Effect for RockingWave {
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, state: &mut AnimationState) {
        let len = pixels.len();
        if len == 0 {
            return;
        }

        let phase = steps(frame.now, self.rate).rem_euclid(360);
        state.hue_phase = phase as f64;

        let range = self.hue_range.min(MAX_HUE) as i64;
        if range == 0 {
            fill(pixels, Pixel::lit(self.hue_base));
            return;
        }

        let swing = (libm::sin(phase as f64 * core::f64::consts::PI / 180.0) + 1.0) * range as f64 / 2.0;
        for (i, px) in pixels.iter_mut().enumerate() {
            let spread = (i as i64 * range / len as i64) as f64;
            let hue = libm::floor(swing + spread) as i64 % range;
            *px = Pixel::lit(wrap_hue(hue + self.hue_base as i64));
        }
    }
}

/// Random hue per block of pixels, refreshed at most once per `interval`.
///
/// Between refreshes the buffer is left exactly as it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomSparkle {
    /// Pixels per block; zero is treated as one.
    pub block: usize,
    /// Seconds between refreshes.
    pub interval: f64,
}

impl Effect for RandomSparkle {
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, state: &mut AnimationState) {
        let due = match state.last_update {
            None => true,
            // A clock that went backwards means a new time base.
            Some(last) => frame.now < last || frame.now - last >= self.interval,
        };
        if !due {
            return;
        }

        for block in pixels.chunks_mut(self.block.max(1)) {
            fill(block, Pixel::lit(state.rng.u8(..MAX_HUE)));
        }
        state.last_update = Some(frame.now);
    }
}

/// Two colors on alternating pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stripes {
    pub even: Pixel,
    pub odd: Pixel,
}

impl Effect for Stripes {
    fn render(&self, pixels: &mut [Pixel], _: &Frame, _: &mut AnimationState) {
        for (i, px) in pixels.iter_mut().enumerate() {
            *px = if i % 2 == 0 { self.even } else { self.odd };
        }
    }
}

/// Scattered hues scrolling along the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    /// Pixels per second.
    pub speed: f64,
}

impl Matrix {
    /// Hue of the `i`th pixel before scrolling.
    pub fn hue_at(i: usize) -> u8 {
        let scatter = libm::pow(libm::fabs(libm::sin(1.2 * i as f64)), 1.8);
        wrap_hue(1 + (i as f64 * scatter) as i64)
    }
}

impl Effect for Matrix {
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, _: &mut AnimationState) {
        let len = pixels.len();
        if len == 0 {
            return;
        }

        let offset = steps(frame.now, self.speed).rem_euclid(len as i64) as usize;
        for i in 0..len {
            pixels[(i + offset) % len] = Pixel::lit(Self::hue_at(i));
        }
    }
}

/// Rolling wave themed by the current match alliance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllianceAdaptive {
    pub red: RollingWave,
    pub blue: RollingWave,
    /// Used while the alliance is not known.
    pub unknown: RollingWave,
}

impl AllianceAdaptive {
    /// Wave for the given alliance.
    pub fn wave(&self, alliance: Alliance) -> &RollingWave {
        match alliance {
            Alliance::Red => &self.red,
            Alliance::Blue => &self.blue,
            Alliance::Unknown => &self.unknown,
        }
    }
}

impl Effect for AllianceAdaptive {
    fn render(&self, pixels: &mut [Pixel], frame: &Frame, state: &mut AnimationState) {
        self.wave(frame.alliance).render(pixels, frame, state);
    }
}

/// Cycles through the catalog's composable patterns on fixed wall-clock
/// boundaries.
///
/// This is the only meta pattern: it renders other catalog entries rather
/// than pixels of its own, so it is dispatched by the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slideshow {
    /// Seconds each pattern stays on screen.
    pub period: f64,
}

impl Slideshow {
    /// Position among `count` composable patterns to show at `now`.
    ///
    /// Returns `None` when there is nothing to show.
    pub fn pick(&self, now: f64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        if !(self.period > 0.0) {
            return Some(0);
        }
        Some(steps(now / self.period, 1.0).rem_euclid(count as i64) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_distance_wraps_around_the_ring() {
        assert_eq!(circular_distance(0, 9, 10), 1);
        assert_eq!(circular_distance(9, 0, 10), 1);
        assert_eq!(circular_distance(2, 7, 10), 5);
        assert_eq!(circular_distance(25, 3, 10), 2);
    }

    #[test]
    fn hotspot_falloff_reaches_threshold_within_half_width() {
        let hotspot = Hotspot::new(0, 0.0, 0, 255);
        assert_eq!(hotspot.value_at(0), 255);
        assert!(hotspot.value_at(8) > WAVE_THRESHOLD as i64);
        assert!(hotspot.value_at(9) <= WAVE_THRESHOLD as i64);
    }

    #[test]
    fn fill_fraction_is_clamped() {
        assert_eq!(Fill::Fixed(-0.5).fraction(0.0), 0.0);
        assert_eq!(Fill::Fixed(3.0).fraction(0.0), 1.0);
        assert_eq!(Fill::Fixed(f32::NAN).fraction(0.0), 0.0);
        assert_eq!(Fill::Sweep { per_second: 0.5 }.fraction(3.0), 0.5);
    }

    #[test]
    fn slideshow_pick_handles_degenerate_inputs() {
        let show = Slideshow { period: 6.0 };
        assert_eq!(show.pick(100.0, 0), None);
        assert_eq!(Slideshow { period: 0.0 }.pick(100.0, 4), Some(0));
        assert_eq!(show.pick(13.0, 4), Some(2));
    }

    #[test]
    fn pulsing_value_spans_full_range() {
        let pulse = Pulsing { hue: 0, saturation: 255, speed: 1.0 };
        assert_eq!(pulse.value_at(0.0), 127);
        assert_eq!(pulse.value_at(core::f64::consts::FRAC_PI_2), 255);
        assert_eq!(pulse.value_at(3.0 * core::f64::consts::FRAC_PI_2), 0);
    }
}
