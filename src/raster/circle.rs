//! Midpoint circle rasterization.

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::pixel::Pixel;

/// Draw a circle outline using the midpoint circle algorithm.
///
/// Plots the 8 octant reflections of each computed point, producing
/// output symmetric across both axes and both diagonals. Radius 0 sets
/// exactly the center pixel; a negative radius draws nothing.
pub fn draw_circle<P: Pixel>(canvas: &mut Canvas<P>, center: Point, radius: i32, color: P) {
    if radius < 0 {
        return;
    }
    if radius == 0 {
        canvas.set(center.x, center.y, color);
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        canvas.set(center.x + x, center.y + y, color);
        canvas.set(center.x - x, center.y + y, color);
        canvas.set(center.x + x, center.y - y, color);
        canvas.set(center.x - x, center.y - y, color);
        canvas.set(center.x + y, center.y + x, color);
        canvas.set(center.x - y, center.y + x, color);
        canvas.set(center.x + y, center.y - x, color);
        canvas.set(center.x - y, center.y - x, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Draw a filled circle.
///
/// Runs the same decision loop as [`draw_circle`] but fills inclusive
/// horizontal spans between the symmetric x-offsets, so the filled
/// disc and the outline agree exactly on radius-boundary pixels.
pub fn draw_filled_circle<P: Pixel>(canvas: &mut Canvas<P>, center: Point, radius: i32, color: P) {
    if radius < 0 {
        return;
    }
    if radius == 0 {
        canvas.set(center.x, center.y, color);
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        canvas.fill_span(center.x - x, center.x + x, center.y + y, color);
        canvas.fill_span(center.x - x, center.x + x, center.y - y, color);
        canvas.fill_span(center.x - y, center.x + y, center.y + x, color);
        canvas.fill_span(center.x - y, center.x + y, center.y - x, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}
