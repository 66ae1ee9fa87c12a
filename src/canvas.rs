//! Core canvas: a bounds-checked 2D pixel buffer.
//!
//! [`Canvas`] is the single piece of mutable state every rasterizer
//! draws into. All pixel writes funnel through [`Canvas::set`] or
//! [`Canvas::fill_span`], which clip silently, so out-of-range
//! geometry is harmless no matter which algorithm produced it.

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// A 2D pixel buffer with bounds-checked access.
///
/// Pixels are stored row-major with row 0 at the top. The buffer
/// always holds exactly `width * height` elements.
///
/// # Example
///
/// ```
/// use trazar::canvas::Canvas;
/// use trazar::pixel::Rgb;
///
/// let mut canvas: Canvas<Rgb> = Canvas::new(800, 600).unwrap();
/// canvas.set(10, 10, Rgb::RED);
/// assert_eq!(canvas.get(10, 10), Some(Rgb::RED));
/// assert_eq!(canvas.get(-1, 10), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas<P: Pixel> {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixels in row-major order.
    pixels: Vec<P>,
}

impl<P: Pixel> Canvas<P> {
    /// Create a new canvas with every pixel set to `P::default()`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![P::default(); (width as usize) * (height as usize)],
        })
    }

    /// Create a canvas from an existing row-major pixel buffer, as
    /// supplied by a decoder.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero, or if the buffer
    /// length is not exactly `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<P>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                len: pixels.len(),
                expected,
                width,
                height,
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as `(width, height)`.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check whether `(x, y)` lies inside the canvas.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<P> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.pixels[self.index(x as u32, y as u32)])
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// Does nothing if the coordinates are out of bounds. This is the
    /// uniform clipping policy for the whole crate: rasterizers write
    /// through `set` and never bounds-check on their own.
    pub fn set(&mut self, x: i32, y: i32, value: P) {
        if !self.contains(x, y) {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.pixels[idx] = value;
    }

    /// Fill the inclusive horizontal span from `x1` to `x2` on row `y`.
    ///
    /// Endpoint order does not matter; the span is clipped to the
    /// canvas and out-of-range rows are a no-op.
    pub fn fill_span(&mut self, x1: i32, x2: i32, y: i32, value: P) {
        if y < 0 || y as u32 >= self.height {
            return;
        }

        let lo = x1.min(x2).max(0);
        let hi = x1.max(x2).min(self.width as i32 - 1);
        if lo > hi {
            return;
        }

        let start = self.index(lo as u32, y as u32);
        let end = self.index(hi as u32, y as u32);
        self.pixels[start..=end].fill(value);
    }

    /// Fill the entire canvas with a single value.
    pub fn fill(&mut self, value: P) {
        self.pixels.fill(value);
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[P]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Get a row of pixels as a mutable slice.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [P]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        let width = self.width as usize;
        Some(&mut self.pixels[start..start + width])
    }

    /// Get the raw pixel data as a slice, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    /// Get the raw pixel data as a mutable slice, row-major.
    pub fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.pixels
    }

    /// Replace every pixel with its channel-wise complement.
    pub fn invert(&mut self) {
        for p in &mut self.pixels {
            *p = p.invert();
        }
    }

    /// Mirror the canvas left-to-right.
    pub fn flip_horizontal(&mut self) {
        let width = self.width as usize;
        for row in self.pixels.chunks_exact_mut(width) {
            row.reverse();
        }
    }

    /// Mirror the canvas top-to-bottom.
    pub fn flip_vertical(&mut self) {
        let width = self.width as usize;
        let height = self.height as usize;
        for y in 0..height / 2 {
            let (top, rest) = self.pixels.split_at_mut((height - 1 - y) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut rest[..width]);
        }
    }

    /// Rotate the canvas 90 degrees clockwise, swapping its dimensions.
    pub fn rotate90_cw(&mut self) {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut rotated = vec![P::default(); width * height];

        for y in 0..height {
            for x in 0..width {
                // (x, y) lands at (height - 1 - y, x) in the rotated grid
                rotated[x * height + (height - 1 - y)] = self.pixels[y * width + x];
            }
        }

        self.pixels = rotated;
        std::mem::swap(&mut self.width, &mut self.height);
    }

    /// Convert to a canvas of another pixel format.
    ///
    /// ```
    /// use trazar::canvas::Canvas;
    /// use trazar::pixel::{Gray, Rgb};
    ///
    /// let canvas: Canvas<Rgb> = Canvas::new(4, 4).unwrap();
    /// let gray: Canvas<Gray> = canvas.map(Gray::from);
    /// assert_eq!(gray.size(), (4, 4));
    /// ```
    #[must_use]
    pub fn map<Q: Pixel>(&self, f: impl Fn(P) -> Q) -> Canvas<Q> {
        Canvas {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Row-major index of an in-bounds coordinate.
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
