//! Pattern engine: selection, buffer binding and the per-tick render step.
//!
//! Provides [`PatternEngine`], which owns the animation state for exactly one
//! strip and renders the selected catalog entry into it once per tick.

use crate::catalog::{Catalog, Pattern};
use crate::command::EngineAction;
use crate::generator::Frame;
use crate::pixel::{Pixel, PixelBuffer};
use crate::state::AnimationState;
use crate::time::TimeSource;

/// Seed used for random patterns unless configured otherwise.
pub const DEFAULT_SEED: u64 = 0x5EED_1ED5;

/// Match alliance reported by the field management system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alliance {
    Red,
    Blue,
    /// No match data yet.
    #[default]
    Unknown,
}

/// Engine settings fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineConfig {
    /// Render only the first `n` pixels of the bound buffer.
    ///
    /// Useful when the driver allocates more pixels than are physically
    /// attached. Pixels past the limit are never written.
    pub effective_length: Option<usize>,

    /// Seed for random patterns.
    pub seed: u64,
}

impl EngineConfig {
    pub const fn new() -> Self {
        Self {
            effective_length: None,
            seed: DEFAULT_SEED,
        }
    }

    pub const fn effective_length(mut self, pixels: usize) -> Self {
        self.effective_length = Some(pixels);
        self
    }

    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders catalog patterns into one pixel buffer.
///
/// The engine is single-threaded and never blocks: the host calls
/// [`tick`](Self::tick) once per control-loop period, then hands the buffer
/// contents to its strip driver. Switching patterns leaves the animation
/// state untouched, so a reselected pattern resumes smoothly.
///
/// # Type Parameters
/// * `'c` - Lifetime of the catalog reference
/// * `B` - Pixel buffer type
/// * `C` - Catalog capacity
pub struct PatternEngine<'c, B: PixelBuffer, const C: usize> {
    catalog: &'c Catalog<C>,
    buffer: Option<B>,
    selection: usize,
    alliance: Alliance,
    state: AnimationState,
    config: EngineConfig,
}

impl<'c, B: PixelBuffer, const C: usize> PatternEngine<'c, B, C> {
    /// Creates an unbound engine showing the catalog's fallback pattern.
    pub fn new(catalog: &'c Catalog<C>) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    /// Creates an unbound engine with explicit settings.
    pub fn with_config(catalog: &'c Catalog<C>, config: EngineConfig) -> Self {
        Self {
            catalog,
            buffer: None,
            selection: catalog.fallback_index(),
            alliance: Alliance::Unknown,
            state: AnimationState::new(config.seed),
            config,
        }
    }

    /// Handles an action by dispatching to the matching method.
    pub fn handle_action(&mut self, action: EngineAction<'_>) {
        match action {
            EngineAction::Select(id) => self.select(id),
            EngineAction::SetAlliance(alliance) => self.set_alliance(alliance),
            EngineAction::Tick(now) => self.tick(now),
        }
    }

    /// Installs the buffer to render into.
    ///
    /// Returns the previously bound buffer, if any. Animation state is kept.
    pub fn bind(&mut self, buffer: B) -> Option<B> {
        #[cfg(feature = "defmt")]
        defmt::debug!("binding buffer of {} pixels", buffer.len());

        self.buffer.replace(buffer)
    }

    /// Unbinds and returns the buffer. Later ticks do nothing.
    pub fn release(&mut self) -> Option<B> {
        self.buffer.take()
    }

    /// The bound buffer, for the strip driver.
    pub fn buffer(&self) -> Option<&B> {
        self.buffer.as_ref()
    }

    /// Mutable access to the bound buffer.
    pub fn buffer_mut(&mut self) -> Option<&mut B> {
        self.buffer.as_mut()
    }

    /// Pixels of the bound buffer, empty when unbound.
    pub fn pixels(&self) -> &[Pixel] {
        match &self.buffer {
            Some(buffer) => buffer.pixels(),
            None => &[],
        }
    }

    /// Selects a pattern by id.
    ///
    /// Absent or unknown ids select the catalog's fallback. Selecting the
    /// current pattern is a no-op.
    pub fn select(&mut self, id: Option<&str>) {
        let index = id
            .and_then(|id| self.catalog.position(id))
            .unwrap_or(self.catalog.fallback_index());

        if index == self.selection {
            return;
        }

        #[cfg(feature = "defmt")]
        {
            if let Some(pattern) = self.catalog.at(index) {
                defmt::debug!("pattern selected: {}", pattern.id());
            }
        }

        self.selection = index;
    }

    /// The currently selected pattern.
    pub fn selection(&self) -> &'c Pattern {
        let catalog: &'c Catalog<C> = self.catalog;
        catalog.at(self.selection).unwrap_or(catalog.fallback())
    }

    /// Records the alliance reported by the match-data source.
    pub fn set_alliance(&mut self, alliance: Alliance) {
        self.alliance = alliance;
    }

    /// The most recently reported alliance.
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// Renders the selected pattern for time `now` (seconds).
    ///
    /// Does nothing when no buffer is bound or the buffer is empty.
    pub fn tick(&mut self, now: f64) {
        let Some(buffer) = self.buffer.as_mut() else {
            return;
        };

        let pixels = buffer.pixels_mut();
        let len = match self.config.effective_length {
            Some(limit) => limit.min(pixels.len()),
            None => pixels.len(),
        };
        let pixels = &mut pixels[..len];
        if pixels.is_empty() {
            return;
        }

        let Some(pattern) = self.catalog.at(self.selection) else {
            return;
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("tick {} at {}", pattern.id(), now);

        let frame = Frame::new(now, self.alliance);
        pattern
            .generator()
            .render(pixels, &frame, &mut self.state, self.catalog);
    }

    /// Reads `clock` once and renders for that time.
    pub fn tick_from<T: TimeSource>(&mut self, clock: &T) {
        self.tick(clock.now());
    }

    /// Animation state, for inspection.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'c Catalog<C> {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Generator;
    use crate::generator::{Pulsing, Solid};

    const GREEN: Pixel = Pixel::hsv(60, 255, 200);

    fn catalog() -> Catalog<4> {
        Catalog::builder()
            .register("Green", Generator::Solid(Solid(GREEN)))
            .unwrap()
            .register("Pulse", Generator::Pulsing(Pulsing { hue: 0, saturation: 255, speed: 1.0 }))
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn new_engine_selects_fallback_and_is_unbound() {
        let catalog = catalog();
        let engine = PatternEngine::<[Pixel; 8], 4>::new(&catalog);

        assert_eq!(engine.selection().id(), "Green");
        assert!(engine.buffer().is_none());
        assert!(engine.pixels().is_empty());
        assert_eq!(engine.alliance(), Alliance::Unknown);
    }

    #[test]
    fn bind_returns_previous_buffer() {
        let catalog = catalog();
        let mut engine = PatternEngine::<[Pixel; 2], 4>::new(&catalog);

        assert!(engine.bind([Pixel::OFF; 2]).is_none());
        engine.tick(0.0);
        let previous = engine.bind([Pixel::OFF; 2]);
        assert_eq!(previous, Some([GREEN; 2]));
    }

    #[test]
    fn handle_action_dispatches_all_action_types() {
        let catalog = catalog();
        let mut engine = PatternEngine::<[Pixel; 3], 4>::new(&catalog);
        engine.bind([Pixel::OFF; 3]);

        engine.handle_action(EngineAction::Select(Some("Pulse")));
        assert_eq!(engine.selection().id(), "Pulse");

        engine.handle_action(EngineAction::SetAlliance(Alliance::Red));
        assert_eq!(engine.alliance(), Alliance::Red);

        engine.handle_action(EngineAction::Tick(0.0));
        assert!(engine.pixels().iter().all(|px| px.value() == 127));
    }
}
