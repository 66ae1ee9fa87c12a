//! Triangle and polygon rasterization.
//!
//! Outlines compose the line rasterizer; fills are scanline based.
//! The general polygon fill uses the even-odd rule with a half-open
//! edge bracket test, so a vertex lying exactly on a scanline is
//! counted once rather than twice.

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::pixel::Pixel;
use crate::raster::line::draw_line;

/// Draw the outline of a triangle.
pub fn draw_triangle<P: Pixel>(canvas: &mut Canvas<P>, p1: Point, p2: Point, p3: Point, color: P) {
    draw_line(canvas, p1, p2, color);
    draw_line(canvas, p2, p3, color);
    draw_line(canvas, p3, p1, color);
}

/// Draw a filled triangle using scanline edge interpolation.
///
/// Vertices are sorted by ascending y (stable, so equal-y vertices
/// keep their argument order); each scanline interpolates x along the
/// long top-to-bottom edge and the active short edge, then fills the
/// inclusive span between them. Horizontal top or bottom edges are
/// fine: interpolating against a zero-height edge returns that edge's
/// first x unchanged.
pub fn draw_filled_triangle<P: Pixel>(
    canvas: &mut Canvas<P>,
    p1: Point,
    p2: Point,
    p3: Point,
    color: P,
) {
    let mut v = [p1, p2, p3];
    v.sort_by_key(|p| p.y);
    let [top, mid, bot] = v;

    for y in top.y..=bot.y {
        let xa = edge_x_at(top, bot, y);
        let xb = if y < mid.y {
            edge_x_at(top, mid, y)
        } else {
            edge_x_at(mid, bot, y)
        };
        canvas.fill_span(xa, xb, y, color);
    }
}

/// X-coordinate of the edge `a -> b` at scanline `y`, rounded.
///
/// A zero-height edge returns `a.x`.
fn edge_x_at(a: Point, b: Point, y: i32) -> i32 {
    if a.y == b.y {
        return a.x;
    }
    let t = f64::from(y - a.y) / f64::from(b.y - a.y);
    (f64::from(a.x) + t * f64::from(b.x - a.x)).round() as i32
}

/// Draw the outline of a polygon by connecting consecutive vertices
/// and closing the last vertex back to the first.
///
/// Fewer than 3 vertices draws nothing.
pub fn draw_polygon<P: Pixel>(canvas: &mut Canvas<P>, points: &[Point], color: P) {
    if points.len() < 3 {
        return;
    }

    for i in 0..points.len() {
        draw_line(canvas, points[i], points[(i + 1) % points.len()], color);
    }
}

/// A polygon edge, derived from consecutive vertices during filling.
#[derive(Debug, Clone, Copy)]
struct Edge {
    p1: Point,
    p2: Point,
}

impl Edge {
    /// X-intersection with scanline `y` under the half-open bracket
    /// test `(y1 <= y < y2) || (y2 <= y < y1)`.
    ///
    /// Horizontal edges never intersect; a vertex exactly on the
    /// scanline is counted by exactly one of the two edges meeting
    /// there, which is what makes the even-odd pairing sound.
    fn x_at(&self, y: i32) -> Option<f64> {
        let (y1, y2) = (self.p1.y, self.p2.y);
        if !((y1 <= y && y < y2) || (y2 <= y && y < y1)) {
            return None;
        }
        let t = f64::from(y - y1) / f64::from(y2 - y1);
        Some(f64::from(self.p1.x) + t * f64::from(self.p2.x - self.p1.x))
    }
}

/// Draw a filled polygon using even-odd scanline filling.
///
/// The polygon may be non-convex. For every scanline in the polygon's
/// vertical extent, the x-intersections of all bracketing edges are
/// sorted and consecutive pairs are filled as inclusive spans. An odd
/// trailing intersection (degenerate or self-intersecting input)
/// produces no span. Fewer than 3 vertices draws nothing.
pub fn draw_filled_polygon<P: Pixel>(canvas: &mut Canvas<P>, points: &[Point], color: P) {
    if points.len() < 3 {
        return;
    }

    let edges: Vec<Edge> = (0..points.len())
        .map(|i| Edge {
            p1: points[i],
            p2: points[(i + 1) % points.len()],
        })
        .collect();

    // Scanline range: polygon extent intersected with the canvas.
    // Pixel writes clip anyway, this only bounds the work.
    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
    let max_y = points
        .iter()
        .map(|p| p.y)
        .max()
        .unwrap_or(-1)
        .min(canvas.height() as i32 - 1);

    let mut xs: Vec<f64> = Vec::with_capacity(edges.len());
    for y in min_y..=max_y {
        xs.clear();
        xs.extend(edges.iter().filter_map(|e| e.x_at(y)));
        xs.sort_by(f64::total_cmp);

        for pair in xs.chunks_exact(2) {
            canvas.fill_span(pair[0].round() as i32, pair[1].round() as i32, y, color);
        }
    }
}
