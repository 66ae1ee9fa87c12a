//! # Trazar
//!
//! CPU rasterization library: an in-memory pixel grid plus a set of
//! vector-to-raster conversion algorithms that mutate it.
//!
//! The canvas is generic over its pixel value (RGB triple, 8-bit
//! intensity, or single bit), so one set of drawing algorithms serves
//! every format. Rasterizers never interpret the pixel value; they
//! only copy it. File codecs and CLIs are external collaborators built
//! on top of the bounds-checked `get`/`set`/`from_pixels` surface.
//!
//! ## Quick Start
//!
//! ```
//! use trazar::prelude::*;
//!
//! let mut canvas: Canvas<Rgb> = Canvas::new(200, 200)?;
//! draw_line(&mut canvas, Point::new(0, 0), Point::new(199, 199), Rgb::RED);
//! draw_filled_circle(&mut canvas, Point::new(100, 100), 40, Rgb::BLUE);
//! draw_koch_snowflake(&mut canvas, Point::new(100, 100), 80, 3, Rgb::WHITE);
//! # Ok::<(), trazar::Error>(())
//! ```
//!
//! ## Clipping policy
//!
//! Out-of-range coordinates clip silently, uniformly, for every
//! algorithm: all pixel writes funnel through
//! [`Canvas::set`](canvas::Canvas::set) or the clipped span fill.
//! Degenerate geometry (zero radius, fewer than 3 polygon vertices,
//! zero-size rectangles) is a no-op, never an error.
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous. A rasterizer holds `&mut Canvas`
//! for its whole run; callers needing parallel rendering must draw
//! into disjoint canvases and composite externally.
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a
//!   digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or
//!   hyperbolae with a digital plotter." (midpoint method)
//! - von Koch, H. (1904). "Sur une courbe continue sans tangente."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Pixel value types and conversions between them.
pub mod pixel;

/// Core canvas: a bounds-checked 2D pixel buffer.
pub mod canvas;

/// Geometric primitives (integer raster points).
pub mod geometry;

// ============================================================================
// Rasterization
// ============================================================================

/// Vector-to-raster conversion algorithms.
pub mod raster;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trazar operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```
/// use trazar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Point;
    pub use crate::pixel::{Bit, Gray, Pixel, Rgb};
    pub use crate::raster::{
        draw_circle, draw_filled_circle, draw_filled_polygon, draw_filled_rect,
        draw_filled_triangle, draw_koch_snowflake, draw_line, draw_polygon, draw_rect,
        draw_sierpinski_triangle, draw_triangle, MAX_FRACTAL_DEPTH,
    };
}

// ============================================================================
// Tests
// ============================================================================
