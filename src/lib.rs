#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Pixel`**: One LED's color in device HSV (hue 0-180, saturation and value 0-255)
//! - **`PixelBuffer`**: Trait to implement for whatever your strip driver reads from
//! - **`Effect`**: Per-tick pixel computation implemented by every generator
//! - **`Generator`**: A generator plus its baked-in parameters, as stored in a catalog
//! - **`Catalog`**: Ordered, immutable registry of named patterns
//! - **`PatternEngine`**: Owns the selection, the bound buffer and the `AnimationState`
//! - **`AnimationState`**: Accumulators that keep patterns continuous across ticks
//! - **`TimeSource`**: Trait to implement for your clock
//! - **`EngineAction`**: Commands that can be sent to control an engine
//!
//! Pixels stay in device HSV until transmission. Use [`Pixel::to_rgb8`] (backed by
//! `palette`) when your driver wants RGB.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod catalog;
pub mod command;
pub mod engine;
pub mod generator;
pub mod pixel;
pub mod presets;
pub mod state;
pub mod time;

pub use catalog::{Catalog, CatalogBuilder, CatalogError, Generator, Pattern, Role};
pub use command::EngineAction;
pub use engine::{Alliance, DEFAULT_SEED, EngineConfig, PatternEngine};
pub use generator::{
    AllianceAdaptive, Comet, Dashes, Effect, Fill, Frame, Hotspot, Matrix, ProgressBar, Pulsing,
    RandomSparkle, RockingWave, RollingWave, Slideshow, Solid, Stripes, Tide, WAVE_THRESHOLD,
    WAVE_WIDTH,
};
pub use pixel::{MAX_HUE, Pixel, PixelBuffer};
pub use state::{AnimationState, DashPhase, DashState};
pub use time::TimeSource;
