//! Recursive fractal curve generators.
//!
//! Both generators are pure recursive decompositions: the subdivision
//! runs in f64 and hands rounded leaf primitives to the line or
//! triangle rasterizer, so trisection error never accumulates across
//! recursion levels. The canvas is the only shared state.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::pixel::Pixel;
use crate::raster::line::draw_line;
use crate::raster::polygon::draw_filled_triangle;

/// Maximum recursion depth accepted by the fractal generators.
///
/// Depth bounds stack usage; exceeding the cap is a caller contract
/// violation and panics.
pub const MAX_FRACTAL_DEPTH: u32 = 16;

/// Subdivided point in f64 coordinates.
type Vertex = (f64, f64);

fn to_point(v: Vertex) -> Point {
    Point::new(v.0.round() as i32, v.1.round() as i32)
}

/// Draw a Koch snowflake of the given radius around `center`.
///
/// The initial equilateral triangle has its vertices on the circle of
/// `radius` around `center`, at 120-degree offsets starting from the
/// upward vertical. Each side is recursively subdivided `depth` times;
/// depth 0 draws the plain triangle, and in general `3 * 4^depth` leaf
/// segments are drawn. Non-positive radius draws nothing.
///
/// # Panics
///
/// Panics if `depth` exceeds [`MAX_FRACTAL_DEPTH`].
pub fn draw_koch_snowflake<P: Pixel>(
    canvas: &mut Canvas<P>,
    center: Point,
    radius: i32,
    depth: u32,
    color: P,
) {
    assert!(
        depth <= MAX_FRACTAL_DEPTH,
        "fractal depth {depth} exceeds MAX_FRACTAL_DEPTH ({MAX_FRACTAL_DEPTH})"
    );
    if radius <= 0 {
        return;
    }

    for (p1, p2) in snowflake_sides(center, radius) {
        koch_segment(p1, p2, depth, &mut |a, b| {
            draw_line(canvas, to_point(a), to_point(b), color);
        });
    }
}

/// The three sides of the initial equilateral triangle.
fn snowflake_sides(center: Point, radius: i32) -> [(Vertex, Vertex); 3] {
    let cx = f64::from(center.x);
    let cy = f64::from(center.y);
    let r = f64::from(radius);

    let vertex = |i: u32| -> Vertex {
        let angle = -FRAC_PI_2 + f64::from(i) * 2.0 * PI / 3.0;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };

    let (a, b, c) = (vertex(0), vertex(1), vertex(2));
    [(a, b), (b, c), (c, a)]
}

/// Recursively subdivide the segment `p1 -> p2`, emitting leaf
/// segments at depth 0.
///
/// One subdivision step trisects the segment and replaces the middle
/// third with two sides of an equilateral bump: the apex is the middle
/// third's vector rotated by -60 degrees about the first trisection
/// point.
fn koch_segment(p1: Vertex, p2: Vertex, depth: u32, emit: &mut impl FnMut(Vertex, Vertex)) {
    if depth == 0 {
        emit(p1, p2);
        return;
    }

    let dx = (p2.0 - p1.0) / 3.0;
    let dy = (p2.1 - p1.1) / 3.0;
    let a = (p1.0 + dx, p1.1 + dy);
    let b = (p1.0 + 2.0 * dx, p1.1 + 2.0 * dy);

    // Rotation by -pi/3: cos is 1/2, sin is -sqrt(3)/2
    let (sin, cos) = (-PI / 3.0).sin_cos();
    let apex = (a.0 + dx * cos - dy * sin, a.1 + dx * sin + dy * cos);

    koch_segment(p1, a, depth - 1, emit);
    koch_segment(a, apex, depth - 1, emit);
    koch_segment(apex, b, depth - 1, emit);
    koch_segment(b, p2, depth - 1, emit);
}

/// Draw a Sierpinski triangle anchored at `start` with the given side
/// width.
///
/// Depth 0 fills the equilateral triangle spanning `start` to
/// `start + (width, 0)` with its apex toward +y; otherwise the
/// generator recurses on three sub-triangles of one-third width,
/// anchored at `start` and at the midpoints of the two edges meeting
/// there. `3^depth` leaf triangles are filled. Non-positive width
/// draws nothing.
///
/// # Panics
///
/// Panics if `depth` exceeds [`MAX_FRACTAL_DEPTH`].
pub fn draw_sierpinski_triangle<P: Pixel>(
    canvas: &mut Canvas<P>,
    start: Point,
    width: i32,
    depth: u32,
    color: P,
) {
    assert!(
        depth <= MAX_FRACTAL_DEPTH,
        "fractal depth {depth} exceeds MAX_FRACTAL_DEPTH ({MAX_FRACTAL_DEPTH})"
    );
    if width <= 0 {
        return;
    }

    sierpinski(
        (f64::from(start.x), f64::from(start.y)),
        f64::from(width),
        depth,
        &mut |a, b, c| {
            draw_filled_triangle(canvas, to_point(a), to_point(b), to_point(c), color);
        },
    );
}

/// Height of an equilateral triangle with the given side.
fn equilateral_height(width: f64) -> f64 {
    3.0_f64.sqrt() / 2.0 * width
}

fn sierpinski(
    anchor: Vertex,
    width: f64,
    depth: u32,
    emit: &mut impl FnMut(Vertex, Vertex, Vertex),
) {
    let (x, y) = anchor;

    if depth == 0 {
        let h = equilateral_height(width);
        emit((x, y), (x + width, y), (x + width / 2.0, y + h));
        return;
    }

    let h = equilateral_height(width);
    let sub = width / 3.0;

    sierpinski((x, y), sub, depth - 1, emit);
    sierpinski((x + width / 2.0, y), sub, depth - 1, emit);
    sierpinski((x + width / 4.0, y + h / 2.0), sub, depth - 1, emit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Rgb;

    fn count_set(canvas: &Canvas<Rgb>, color: Rgb) -> usize {
        canvas.pixels().iter().filter(|&&p| p == color).count()
    }

    fn koch_leaf_count(depth: u32) -> usize {
        let sides = snowflake_sides(Point::new(0, 0), 100);
        let mut count = 0;
        for (p1, p2) in sides {
            koch_segment(p1, p2, depth, &mut |_, _| count += 1);
        }
        count
    }

    #[test]
    fn test_koch_segment_counts() {
        // 3 * 4^depth leaf segments
        assert_eq!(koch_leaf_count(0), 3);
        assert_eq!(koch_leaf_count(1), 12);
        assert_eq!(koch_leaf_count(2), 48);
        assert_eq!(koch_leaf_count(3), 192);
        assert_eq!(koch_leaf_count(4), 768);
    }

    #[test]
    fn test_sierpinski_leaf_counts() {
        // 3^depth leaf triangles
        for depth in 0..5 {
            let mut count = 0;
            sierpinski((0.0, 0.0), 200.0, depth, &mut |_, _, _| count += 1);
            assert_eq!(count, 3usize.pow(depth), "depth {depth}");
        }
    }

    #[test]
    fn test_koch_depth_zero_is_triangle_outline() {
        let mut canvas: Canvas<Rgb> = Canvas::new(200, 200).unwrap();
        draw_koch_snowflake(&mut canvas, Point::new(100, 100), 60, 0, Rgb::RED);

        // The three initial vertices are on the drawn outline
        for (p1, _) in snowflake_sides(Point::new(100, 100), 60) {
            let p = to_point(p1);
            assert_eq!(canvas.get(p.x, p.y), Some(Rgb::RED), "vertex {p:?} not drawn");
        }
        assert!(count_set(&canvas, Rgb::RED) > 0);
        // Interior is untouched
        assert_eq!(canvas.get(100, 100), Some(Rgb::BLACK));
    }

    #[test]
    fn test_koch_deeper_draws_more() {
        let mut shallow: Canvas<Rgb> = Canvas::new(300, 300).unwrap();
        let mut deep: Canvas<Rgb> = Canvas::new(300, 300).unwrap();
        draw_koch_snowflake(&mut shallow, Point::new(150, 150), 90, 0, Rgb::RED);
        draw_koch_snowflake(&mut deep, Point::new(150, 150), 90, 3, Rgb::RED);

        assert!(count_set(&deep, Rgb::RED) > count_set(&shallow, Rgb::RED));
    }

    #[test]
    fn test_koch_degenerate_radius() {
        let mut canvas: Canvas<Rgb> = Canvas::new(50, 50).unwrap();
        draw_koch_snowflake(&mut canvas, Point::new(25, 25), 0, 2, Rgb::RED);
        draw_koch_snowflake(&mut canvas, Point::new(25, 25), -5, 2, Rgb::RED);
        assert_eq!(count_set(&canvas, Rgb::RED), 0);
    }

    #[test]
    #[should_panic(expected = "exceeds MAX_FRACTAL_DEPTH")]
    fn test_koch_depth_over_cap_panics() {
        let mut canvas: Canvas<Rgb> = Canvas::new(10, 10).unwrap();
        draw_koch_snowflake(&mut canvas, Point::new(5, 5), 3, MAX_FRACTAL_DEPTH + 1, Rgb::RED);
    }

    #[test]
    fn test_sierpinski_depth_zero_fills_triangle() {
        let mut canvas: Canvas<Rgb> = Canvas::new(120, 120).unwrap();
        draw_sierpinski_triangle(&mut canvas, Point::new(10, 10), 100, 0, Rgb::RED);

        // Anchor row spans the full width
        assert_eq!(canvas.get(10, 10), Some(Rgb::RED));
        assert_eq!(canvas.get(110, 10), Some(Rgb::RED));
        // Apex at (60, 10 + 87)
        assert_eq!(canvas.get(60, 97), Some(Rgb::RED));
        // Interior filled
        assert_eq!(canvas.get(60, 50), Some(Rgb::RED));
    }

    #[test]
    fn test_sierpinski_depth_one_has_three_clusters() {
        let mut canvas: Canvas<Rgb> = Canvas::new(120, 120).unwrap();
        draw_sierpinski_triangle(&mut canvas, Point::new(10, 10), 90, 1, Rgb::RED);

        // One sub-triangle at the anchor, one at the bottom-edge
        // midpoint, one at the left-edge midpoint
        assert_eq!(canvas.get(12, 11), Some(Rgb::RED));
        assert_eq!(canvas.get(57, 11), Some(Rgb::RED));
        assert_eq!(canvas.get(35, 50), Some(Rgb::RED));
        // Space between the clusters stays empty
        assert_eq!(canvas.get(44, 11), Some(Rgb::BLACK));
    }

    #[test]
    fn test_sierpinski_degenerate_width() {
        let mut canvas: Canvas<Rgb> = Canvas::new(50, 50).unwrap();
        draw_sierpinski_triangle(&mut canvas, Point::new(25, 25), 0, 2, Rgb::RED);
        draw_sierpinski_triangle(&mut canvas, Point::new(25, 25), -9, 2, Rgb::RED);
        assert_eq!(count_set(&canvas, Rgb::RED), 0);
    }

    #[test]
    #[should_panic(expected = "exceeds MAX_FRACTAL_DEPTH")]
    fn test_sierpinski_depth_over_cap_panics() {
        let mut canvas: Canvas<Rgb> = Canvas::new(10, 10).unwrap();
        draw_sierpinski_triangle(&mut canvas, Point::new(0, 0), 8, MAX_FRACTAL_DEPTH + 1, Rgb::RED);
    }
}
