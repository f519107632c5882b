//! Ordered, named registry of patterns.
//!
//! A [`Catalog`] is assembled once with [`CatalogBuilder`] and is immutable
//! afterwards. Registration order is part of its contract: the slideshow walks
//! the composable entries in exactly that order.

use crate::generator::{
    AllianceAdaptive, Dashes, Effect, Frame, Hotspot, Matrix, ProgressBar, Pulsing, RandomSparkle,
    RockingWave, RollingWave, Slideshow, Solid, Stripes, Tide,
};
use crate::pixel::Pixel;
use crate::state::AnimationState;
use heapless::Vec;

/// Whether an entry draws pixels itself or drives other entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    /// Renders pixels directly; eligible for the slideshow.
    Composable,
    /// Renders other catalog entries; never shown by the slideshow.
    Meta,
}

/// A generator together with its baked-in parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Generator {
    Solid(Solid),
    ProgressBar(ProgressBar),
    Pulsing(Pulsing),
    Dashes(Dashes),
    Hotspot(Hotspot),
    RollingWave(RollingWave),
    Tide(Tide),
    RockingWave(RockingWave),
    RandomSparkle(RandomSparkle),
    Stripes(Stripes),
    Matrix(Matrix),
    AllianceAdaptive(AllianceAdaptive),
    Slideshow(Slideshow),
}

impl Generator {
    /// Role implied by the generator kind.
    pub fn role(&self) -> Role {
        match self {
            Generator::Slideshow(_) => Role::Meta,
            _ => Role::Composable,
        }
    }

    /// The pixel-drawing effect, or `None` for meta generators.
    pub fn as_effect(&self) -> Option<&dyn Effect> {
        let effect: &dyn Effect = match self {
            Generator::Solid(g) => g,
            Generator::ProgressBar(g) => g,
            Generator::Pulsing(g) => g,
            Generator::Dashes(g) => g,
            Generator::Hotspot(g) => g,
            Generator::RollingWave(g) => g,
            Generator::Tide(g) => g,
            Generator::RockingWave(g) => g,
            Generator::RandomSparkle(g) => g,
            Generator::Stripes(g) => g,
            Generator::Matrix(g) => g,
            Generator::AllianceAdaptive(g) => g,
            Generator::Slideshow(_) => return None,
        };
        Some(effect)
    }

    /// Renders one frame, resolving meta generators against `catalog`.
    pub fn render<const C: usize>(
        &self,
        pixels: &mut [Pixel],
        frame: &Frame,
        state: &mut AnimationState,
        catalog: &Catalog<C>,
    ) {
        let effect = match self {
            Generator::Slideshow(show) => show
                .pick(frame.now, catalog.composable().count())
                .and_then(|index| catalog.composable().nth(index))
                .and_then(|pattern| pattern.generator().as_effect()),
            other => other.as_effect(),
        };

        if let Some(effect) = effect {
            effect.render(pixels, frame, state);
        }
    }
}

/// A named catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pattern {
    id: &'static str,
    generator: Generator,
}

impl Pattern {
    pub const fn new(id: &'static str, generator: Generator) -> Self {
        Self { id, generator }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn role(&self) -> Role {
        self.generator.role()
    }
}

/// Catalog construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// More patterns registered than the catalog can hold.
    CatalogFull { capacity: usize },

    /// An id was registered twice.
    DuplicateId(&'static str),

    /// The fallback id names no registered pattern.
    UnknownFallback(&'static str),

    /// No patterns registered.
    Empty,
}

impl core::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CatalogError::CatalogFull { capacity } => {
                write!(f, "catalog is full, capacity is {}", capacity)
            }
            CatalogError::DuplicateId(id) => {
                write!(f, "pattern '{}' is already registered", id)
            }
            CatalogError::UnknownFallback(id) => {
                write!(f, "fallback pattern '{}' is not registered", id)
            }
            CatalogError::Empty => write!(f, "catalog must have at least one pattern"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CatalogError {}

/// Immutable, ordered pattern registry holding at most `C` entries.
#[derive(Debug, Clone)]
pub struct Catalog<const C: usize> {
    patterns: Vec<Pattern, C>,
    fallback: usize,
}

impl<const C: usize> Catalog<C> {
    /// Creates a new catalog builder.
    pub fn builder() -> CatalogBuilder<C> {
        CatalogBuilder::new()
    }

    /// Finds a pattern by id.
    pub fn lookup(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// Index of the pattern with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.id == id)
    }

    /// All patterns in registration order.
    pub fn all(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Pattern at `index`. Callers wrap the index themselves.
    pub fn at(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    /// Patterns the slideshow may show, in registration order.
    pub fn composable(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.patterns
            .iter()
            .filter(|p| p.role() == Role::Composable)
    }

    /// Number of registered patterns. Never zero.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false; building an empty catalog fails.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern used when a selection is absent or unknown.
    pub fn fallback(&self) -> &Pattern {
        &self.patterns[self.fallback]
    }

    pub fn fallback_index(&self) -> usize {
        self.fallback
    }
}

/// Builder for validated catalogs.
#[derive(Debug)]
pub struct CatalogBuilder<const C: usize> {
    patterns: Vec<Pattern, C>,
    fallback: Option<&'static str>,
}

impl<const C: usize> CatalogBuilder<C> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            fallback: None,
        }
    }

    /// Appends a pattern.
    ///
    /// # Errors
    /// * `DuplicateId` - A pattern with this id is already registered
    /// * `CatalogFull` - Capacity `C` is exhausted
    pub fn register(mut self, id: &'static str, generator: Generator) -> Result<Self, CatalogError> {
        if self.patterns.iter().any(|p| p.id == id) {
            return Err(CatalogError::DuplicateId(id));
        }

        self.patterns
            .push(Pattern::new(id, generator))
            .map_err(|_| CatalogError::CatalogFull { capacity: C })?;
        Ok(self)
    }

    /// Designates the fallback pattern. Defaults to the first registered one.
    pub fn fallback(mut self, id: &'static str) -> Self {
        self.fallback = Some(id);
        self
    }

    /// Builds the catalog.
    ///
    /// # Errors
    /// * `Empty` - No patterns were registered
    /// * `UnknownFallback` - The designated fallback was never registered
    pub fn build(self) -> Result<Catalog<C>, CatalogError> {
        if self.patterns.is_empty() {
            return Err(CatalogError::Empty);
        }

        let fallback = match self.fallback {
            None => 0,
            Some(id) => self
                .patterns
                .iter()
                .position(|p| p.id == id)
                .ok_or(CatalogError::UnknownFallback(id))?,
        };

        Ok(Catalog {
            patterns: self.patterns,
            fallback,
        })
    }
}

impl<const C: usize> Default for CatalogBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
