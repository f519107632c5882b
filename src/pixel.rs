//! Pixel representation and the pixel-buffer abstraction.
//!
//! Pixels use the strip driver's HSV convention: hue in `0..=180` (two degrees
//! per step), saturation and value in `0..=255`. Conversion to RGB for the
//! transmitter goes through `palette`.

use palette::{FromColor, Hsv, Srgb};

/// Largest hue a [`Pixel`] can hold.
pub const MAX_HUE: u8 = 180;

/// One addressable LED's color in device HSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pixel {
    hue: u8,
    saturation: u8,
    value: u8,
}

impl Pixel {
    /// Unlit pixel.
    pub const OFF: Pixel = Pixel::hsv(0, 0, 0);

    /// Creates a pixel, clamping hue to [`MAX_HUE`].
    #[inline]
    pub const fn hsv(hue: u8, saturation: u8, value: u8) -> Self {
        let hue = if hue > MAX_HUE { MAX_HUE } else { hue };
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Fully saturated, full brightness pixel of the given hue.
    #[inline]
    pub const fn lit(hue: u8) -> Self {
        Self::hsv(hue, 255, 255)
    }

    #[inline]
    pub const fn hue(&self) -> u8 {
        self.hue
    }

    #[inline]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns true if the pixel emits no light.
    #[inline]
    pub const fn is_off(&self) -> bool {
        self.value == 0
    }

    /// Converts to a `palette` HSV color (hue in degrees, channels 0.0-1.0).
    pub fn to_hsv(self) -> Hsv {
        Hsv::new(
            self.hue as f32 * 2.0,
            self.saturation as f32 / 255.0,
            self.value as f32 / 255.0,
        )
    }

    /// Converts to linear-range RGB (0.0-1.0).
    pub fn to_srgb(self) -> Srgb {
        Srgb::from_color(self.to_hsv())
    }

    /// Converts to 8-bit RGB as sent over the wire by most strip drivers.
    pub fn to_rgb8(self) -> Srgb<u8> {
        self.to_srgb().into_format()
    }
}

/// Wraps an arbitrary integer hue onto the device hue circle.
#[inline]
pub(crate) fn wrap_hue(hue: i64) -> u8 {
    hue.rem_euclid(MAX_HUE as i64) as u8
}

/// Storage the engine renders into.
///
/// Implement this for whatever your strip driver reads from. The length must
/// stay fixed for as long as the buffer is bound to an engine.
pub trait PixelBuffer {
    /// Read access for the transmitter.
    fn pixels(&self) -> &[Pixel];

    /// Write access for the engine.
    fn pixels_mut(&mut self) -> &mut [Pixel];

    /// Number of pixels in the buffer.
    fn len(&self) -> usize {
        self.pixels().len()
    }

    /// Returns true if the buffer holds no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PixelBuffer for [Pixel] {
    fn pixels(&self) -> &[Pixel] {
        self
    }

    fn pixels_mut(&mut self) -> &mut [Pixel] {
        self
    }
}

impl<const N: usize> PixelBuffer for [Pixel; N] {
    fn pixels(&self) -> &[Pixel] {
        self
    }

    fn pixels_mut(&mut self) -> &mut [Pixel] {
        self
    }
}

impl<const N: usize> PixelBuffer for heapless::Vec<Pixel, N> {
    fn pixels(&self) -> &[Pixel] {
        self.as_slice()
    }

    fn pixels_mut(&mut self) -> &mut [Pixel] {
        self.as_mut_slice()
    }
}

impl<B: PixelBuffer + ?Sized> PixelBuffer for &mut B {
    fn pixels(&self) -> &[Pixel] {
        (**self).pixels()
    }

    fn pixels_mut(&mut self) -> &mut [Pixel] {
        (**self).pixels_mut()
    }
}

/// Writes `pixel` to every slot.
#[inline]
pub(crate) fn fill(pixels: &mut [Pixel], pixel: Pixel) {
    for px in pixels.iter_mut() {
        *px = pixel;
    }
}
