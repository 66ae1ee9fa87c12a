//! Bresenham line rasterization.

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::pixel::Pixel;

/// Draw a line between two points using Bresenham's algorithm.
///
/// Every pixel on the 8-connected integer approximation of the
/// segment is set, both endpoints included; the pixel count is
/// `max(|dx|, |dy|) + 1`. A degenerate line (`p1 == p2`) sets exactly
/// one pixel. Pixels falling outside the canvas clip silently.
///
/// # References
///
/// - Bresenham, J. E. (1965). "Algorithm for computer control of a
///   digital plotter."
pub fn draw_line<P: Pixel>(canvas: &mut Canvas<P>, p1: Point, p2: Point, color: P) {
    let dx = (p2.x - p1.x).abs();
    let dy = -(p2.y - p1.y).abs();
    let sx = if p1.x < p2.x { 1 } else { -1 };
    let sy = if p1.y < p2.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = p1.x;
    let mut y = p1.y;

    loop {
        canvas.set(x, y, color);

        if x == p2.x && y == p2.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
