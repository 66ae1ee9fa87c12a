//! Axis-aligned rectangle rasterization.

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::pixel::Pixel;
use crate::raster::line::draw_line;

/// Draw the outline of a `width` x `height` rectangle whose top-left
/// corner is `origin`.
///
/// Zero width or height draws nothing.
pub fn draw_rect<P: Pixel>(canvas: &mut Canvas<P>, origin: Point, width: u32, height: u32, color: P) {
    if width == 0 || height == 0 {
        return;
    }

    let p1 = origin;
    let p2 = Point::new(origin.x + width as i32 - 1, origin.y);
    let p3 = Point::new(origin.x + width as i32 - 1, origin.y + height as i32 - 1);
    let p4 = Point::new(origin.x, origin.y + height as i32 - 1);

    draw_line(canvas, p1, p2, color);
    draw_line(canvas, p2, p3, color);
    draw_line(canvas, p3, p4, color);
    draw_line(canvas, p4, p1, color);
}

/// Draw a filled `width` x `height` rectangle whose top-left corner is
/// `origin`.
///
/// Zero width or height draws nothing; out-of-range rows and columns
/// clip silently.
pub fn draw_filled_rect<P: Pixel>(
    canvas: &mut Canvas<P>,
    origin: Point,
    width: u32,
    height: u32,
    color: P,
) {
    if width == 0 || height == 0 {
        return;
    }

    let x2 = origin.x + width as i32 - 1;
    for y in origin.y..origin.y + height as i32 {
        canvas.fill_span(origin.x, x2, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Rgb;

    fn count_set(canvas: &Canvas<Rgb>, color: Rgb) -> usize {
        canvas.pixels().iter().filter(|&&p| p == color).count()
    }

    /// Concrete scenario: a 3x3 fill at (2,2) sets exactly [2,4]x[2,4].
    #[test]
    fn test_filled_rect_exact_pixels() {
        let mut canvas: Canvas<Rgb> = Canvas::new(10, 10).unwrap();
        draw_filled_rect(&mut canvas, Point::new(2, 2), 3, 3, Rgb::RED);

        for y in 2..=4 {
            for x in 2..=4 {
                assert_eq!(canvas.get(x, y), Some(Rgb::RED));
            }
        }
        assert_eq!(count_set(&canvas, Rgb::RED), 9);
    }

    #[test]
    fn test_rect_outline() {
        let mut canvas: Canvas<Rgb> = Canvas::new(20, 20).unwrap();
        draw_rect(&mut canvas, Point::new(5, 5), 6, 4, Rgb::RED);

        // Corners
        assert_eq!(canvas.get(5, 5), Some(Rgb::RED));
        assert_eq!(canvas.get(10, 5), Some(Rgb::RED));
        assert_eq!(canvas.get(10, 8), Some(Rgb::RED));
        assert_eq!(canvas.get(5, 8), Some(Rgb::RED));
        // Interior untouched
        assert_eq!(canvas.get(7, 6), Some(Rgb::BLACK));
        // Perimeter of a 6x4 rect
        assert_eq!(count_set(&canvas, Rgb::RED), 16);
    }

    #[test]
    fn test_rect_degenerate() {
        let mut canvas: Canvas<Rgb> = Canvas::new(10, 10).unwrap();
        draw_rect(&mut canvas, Point::new(2, 2), 0, 5, Rgb::RED);
        draw_rect(&mut canvas, Point::new(2, 2), 5, 0, Rgb::RED);
        draw_filled_rect(&mut canvas, Point::new(2, 2), 0, 0, Rgb::RED);
        assert_eq!(count_set(&canvas, Rgb::RED), 0);
    }

    #[test]
    fn test_filled_rect_clips() {
        let mut canvas: Canvas<Rgb> = Canvas::new(10, 10).unwrap();
        draw_filled_rect(&mut canvas, Point::new(-3, -3), 6, 6, Rgb::RED);

        assert_eq!(canvas.get(0, 0), Some(Rgb::RED));
        assert_eq!(canvas.get(2, 2), Some(Rgb::RED));
        assert_eq!(canvas.get(3, 3), Some(Rgb::BLACK));
        assert_eq!(count_set(&canvas, Rgb::RED), 9);
    }

    #[test]
    fn test_single_pixel_rect() {
        let mut canvas: Canvas<Rgb> = Canvas::new(10, 10).unwrap();
        draw_filled_rect(&mut canvas, Point::new(4, 4), 1, 1, Rgb::RED);
        assert_eq!(count_set(&canvas, Rgb::RED), 1);
        assert_eq!(canvas.get(4, 4), Some(Rgb::RED));
    }
}
