//! # Page Geometry
//!
//! The visual export renders the live template to a raster and embeds it
//! on a single fixed-size page in A4 proportions. This module computes
//! where the raster lands: scaled to fit, aspect preserved, centered.

/// A4 page size in logical units.
pub const A4_WIDTH: f32 = 595.0;
pub const A4_HEIGHT: f32 = 842.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Placement of a `width`×`height` raster on one A4 page. Degenerate
/// inputs fall back to the full page.
pub fn fit_to_page(width: f32, height: f32) -> PageRect {
    if width <= 0.0 || height <= 0.0 {
        return PageRect {
            x: 0.0,
            y: 0.0,
            width: A4_WIDTH,
            height: A4_HEIGHT,
        };
    }

    let scale = (A4_WIDTH / width).min(A4_HEIGHT / height);
    let scaled_width = width * scale;
    let scaled_height = height * scale;

    PageRect {
        x: (A4_WIDTH - scaled_width) / 2.0,
        y: (A4_HEIGHT - scaled_height) / 2.0,
        width: scaled_width,
        height: scaled_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tall_raster_fills_height() {
        let rect = fit_to_page(500.0, 1000.0);
        assert_eq!(rect.height, A4_HEIGHT);
        assert!(rect.width < A4_WIDTH);
        // Centered horizontally.
        assert!((rect.x * 2.0 + rect.width - A4_WIDTH).abs() < 0.01);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_wide_raster_fills_width() {
        let rect = fit_to_page(1190.0, 842.0);
        assert_eq!(rect.width, A4_WIDTH);
        assert!(rect.height < A4_HEIGHT);
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let rect = fit_to_page(300.0, 400.0);
        let input_ratio = 300.0 / 400.0;
        let output_ratio = rect.width / rect.height;
        assert!((input_ratio - output_ratio).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_input_falls_back_to_full_page() {
        let rect = fit_to_page(0.0, 100.0);
        assert_eq!(rect.width, A4_WIDTH);
        assert_eq!(rect.height, A4_HEIGHT);
    }
}
