use crate::domains::field::{Extent, Position2D, ViewBounds};

/// Pixel-space rectangle; `x`/`y` is the top-left corner and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Maps field units onto raster pixels. Field y grows upwards, pixel y downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: ViewBounds,
    pixels_per_unit: u32,
}

impl Viewport {
    pub fn new(bounds: ViewBounds, pixels_per_unit: u32) -> Self {
        Self {
            bounds,
            pixels_per_unit: pixels_per_unit.max(1),
        }
    }

    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    pub fn pixels_per_unit(&self) -> u32 {
        self.pixels_per_unit
    }

    fn scale(&self) -> f64 {
        f64::from(self.pixels_per_unit)
    }

    pub fn width(&self) -> u32 {
        ((self.bounds.max_x - self.bounds.min_x) * self.scale()).round() as u32
    }

    pub fn height(&self) -> u32 {
        ((self.bounds.max_y - self.bounds.min_y) * self.scale()).round() as u32
    }

    pub fn to_pixel(&self, position: Position2D) -> (i64, i64) {
        (
            ((position.x - self.bounds.min_x) * self.scale()).round() as i64,
            ((self.bounds.max_y - position.y) * self.scale()).round() as i64,
        )
    }

    pub fn rect(&self, extent: &Extent) -> PixelRect {
        let (x, y) = self.to_pixel(Position2D {
            x: extent.left,
            y: extent.top,
        });
        PixelRect {
            x,
            y,
            width: (extent.width() * self.scale()).round().max(1.0) as u32,
            height: (extent.height() * self.scale()).round().max(1.0) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_view() -> Viewport {
        Viewport::new(
            ViewBounds { min_x: -2.0, max_x: 10.0, min_y: -2.0, max_y: 10.0 },
            10,
        )
    }

    #[test]
    fn test_dimensions_follow_bounds() {
        let view = square_view();
        assert_eq!((view.width(), view.height()), (120, 120));
    }

    #[test]
    fn test_field_y_axis_is_flipped() {
        let view = square_view();
        assert_eq!(view.to_pixel(Position2D { x: 0.0, y: 8.0 }), (20, 20));
        assert_eq!(view.to_pixel(Position2D { x: 8.0, y: 0.0 }), (100, 100));
    }

    #[test]
    fn test_rect_anchors_at_top_left() {
        let view = square_view();
        let extent = Extent::centered(Position2D { x: 2.0, y: 6.0 }, 2.0);
        assert_eq!(view.rect(&extent), PixelRect { x: 30, y: 30, width: 20, height: 20 });
    }
}
