//! The standard pattern set and the colors it is built from.

use crate::catalog::{Catalog, CatalogError, Generator};
use crate::generator::{
    AllianceAdaptive, Comet, Dashes, Fill, Matrix, ProgressBar, Pulsing, RandomSparkle,
    RockingWave, RollingWave, Slideshow, Solid, Stripes, Tide,
};
use crate::pixel::Pixel;

// Device hues (0-180).
pub const RED: u8 = 0;
pub const YELLOW: u8 = 30;
pub const GREEN: u8 = 60;
pub const BLUE: u8 = 108;

/// Capacity of [`standard_catalog`].
pub const STANDARD_CAPACITY: usize = 16;

/// Id of the slideshow entry, which is also the fallback.
pub const SLIDESHOW: &str = "Slideshow";

/// Seconds each pattern stays up in the slideshow.
pub const SLIDESHOW_PERIOD: f64 = 6.0;

/// Comet speed of the rolling waves, in pixels per second.
pub const WAVE_SPEED: f64 = 20.0;

pub const BLUE_WAVE: RollingWave = RollingWave {
    hue: BLUE,
    speed: WAVE_SPEED,
    comets: [Comet::new(0, 255), Comet::new(0, 220), Comet::new(0, 190)],
};

pub const RED_WAVE: RollingWave = RollingWave {
    hue: RED,
    speed: WAVE_SPEED,
    comets: [Comet::new(0, 255), Comet::new(2, 255), Comet::new(4, 255)],
};

/// Red or blue wave depending on alliance; blue until match data arrives.
pub const AUTOMATIC_WAVE: AllianceAdaptive = AllianceAdaptive {
    red: RED_WAVE,
    blue: BLUE_WAVE,
    unknown: BLUE_WAVE,
};

/// Builds the full pattern set, slideshow first.
///
/// # Errors
/// Never fails in practice; the ids are unique and fit the capacity.
pub fn standard_catalog() -> Result<Catalog<STANDARD_CAPACITY>, CatalogError> {
    Catalog::builder()
        .register(SLIDESHOW, Generator::Slideshow(Slideshow { period: SLIDESHOW_PERIOD }))?
        .register("Green", Generator::Solid(Solid(Pixel::hsv(GREEN, 255, 200))))?
        .register("Red", Generator::Solid(Solid(Pixel::hsv(RED, 255, 200))))?
        .register("AutomaticWave", Generator::AllianceAdaptive(AUTOMATIC_WAVE))?
        .register("BlueWave", Generator::RollingWave(BLUE_WAVE))?
        .register("RedWave", Generator::RollingWave(RED_WAVE))?
        .register(
            "YellowDash",
            Generator::Dashes(Dashes {
                hue: 9,
                gap: 10,
                length: 5,
                speed: 30.0,
            }),
        )?
        .register(
            "ProgressBar",
            Generator::ProgressBar(ProgressBar {
                hue: YELLOW,
                fill: Fill::Sweep { per_second: 0.5 },
                gradient_step: None,
            }),
        )?
        .register(
            "Tide",
            Generator::Tide(Tide {
                hue: BLUE,
                saturation_floor: 0,
                rate: 80.0,
            }),
        )?
        .register("BluePulsing", Generator::Pulsing(pulsing(BLUE)))?
        .register("RedPulsing", Generator::Pulsing(pulsing(RED)))?
        .register(
            "RockingWave",
            Generator::RockingWave(RockingWave {
                hue_range: 180,
                hue_base: 0,
                rate: 80.0,
            }),
        )?
        .register(
            "Random",
            Generator::RandomSparkle(RandomSparkle {
                block: 5,
                interval: 0.05,
            }),
        )?
        .register("GreenPulsing", Generator::Pulsing(pulsing(GREEN)))?
        .register(
            "SeaHawks",
            Generator::Stripes(Stripes {
                even: Pixel::hsv(105, 225, 61),
                odd: Pixel::hsv(47, 178, 169),
            }),
        )?
        .register("Matrix", Generator::Matrix(Matrix { speed: 20.0 }))?
        .fallback(SLIDESHOW)
        .build()
}

const fn pulsing(hue: u8) -> Pulsing {
    Pulsing {
        hue,
        saturation: 255,
        speed: 10.0,
    }
}
