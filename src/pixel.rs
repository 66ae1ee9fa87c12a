//! Pixel value types and conversions between them.
//!
//! A [`Canvas`](crate::canvas::Canvas) is generic over its pixel value:
//! a 3-channel color triple ([`Rgb`]), a single 8-bit intensity
//! ([`Gray`]), or a plain bit ([`Bit`]). The rasterizers never
//! interpret the value, they only copy it, so one set of drawing
//! algorithms serves all three domains.

/// A value that can be stored in a canvas cell.
///
/// Implementors are small `Copy` types; `Default` is the zero value a
/// freshly created canvas is filled with.
pub trait Pixel: Copy + Default + PartialEq + std::fmt::Debug + 'static {
    /// Channel-wise complement against the type's maximum value.
    #[must_use]
    fn invert(self) -> Self;
}

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
        )
    }
}

impl Pixel for Rgb {
    fn invert(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }
}

/// Single 8-bit intensity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Gray(pub u8);

impl Gray {
    /// Minimum intensity.
    pub const BLACK: Self = Self(0);
    /// Maximum intensity.
    pub const WHITE: Self = Self(255);
}

impl Pixel for Gray {
    fn invert(self) -> Self {
        Self(255 - self.0)
    }
}

/// A single set/unset bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Bit(pub bool);

impl Bit {
    /// Unset bit.
    pub const CLEAR: Self = Self(false);
    /// Set bit.
    pub const SET: Self = Self(true);
}

impl Pixel for Bit {
    fn invert(self) -> Self {
        Self(!self.0)
    }
}

impl From<Rgb> for Gray {
    /// Mean of the three channels.
    fn from(c: Rgb) -> Self {
        Self(((u16::from(c.r) + u16::from(c.g) + u16::from(c.b)) / 3) as u8)
    }
}

impl From<Rgb> for Bit {
    /// Set iff any channel is non-zero.
    fn from(c: Rgb) -> Self {
        Self(c.r != 0 || c.g != 0 || c.b != 0)
    }
}

impl From<Gray> for Bit {
    /// Set iff the intensity is non-zero.
    fn from(g: Gray) -> Self {
        Self(g.0 != 0)
    }
}
