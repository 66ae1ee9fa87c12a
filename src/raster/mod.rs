//! Vector-to-raster conversion algorithms.
//!
//! Every rasterizer is a free function generic over the canvas's pixel
//! type: callers build geometry and a color, the rasterizer mutates
//! the canvas and returns nothing. Out-of-range pixel writes clip
//! silently through [`Canvas::set`](crate::canvas::Canvas::set), so no
//! algorithm carries its own bounds checks.
//!
//! # Algorithms
//!
//! - **Bresenham's line**: integer-exact 8-connected segments
//! - **Midpoint circle**: outlined and filled, 8-way symmetric
//! - **Scanline polygon fill**: edge interpolation (triangle) and
//!   even-odd edge pairing (general polygon)
//! - **Recursive subdivision**: Koch snowflake and Sierpinski triangle
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a
//!   digital plotter."
//! - Foley, van Dam, Feiner, Hughes (1990). *Computer Graphics:
//!   Principles and Practice*, ch. 3 (scan conversion).

mod circle;
mod fractal;
mod line;
mod polygon;
mod rect;

pub use circle::{draw_circle, draw_filled_circle};
pub use fractal::{draw_koch_snowflake, draw_sierpinski_triangle, MAX_FRACTAL_DEPTH};
pub use line::draw_line;
pub use polygon::{draw_filled_polygon, draw_filled_triangle, draw_polygon, draw_triangle};
pub use rect::{draw_filled_rect, draw_rect};
