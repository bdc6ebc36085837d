// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Bitmap to text-art rasterization.
//!
//! Downsamples an RGBA image into a character grid of half-block cells. A
//! terminal cell is roughly twice as tall as it is wide, so the image is
//! resized to `width x height*2` pixels (fill mode, aspect ratio ignored)
//! and adjacent pixel rows are paired into one cell: the upper pixel becomes
//! the glyph's foreground, the lower one the cell background.

use image::imageops::FilterType;
use image::RgbaImage;
use meridian_core::{Cell, Rgb, TextImage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("bad output dimensions {width}x{height}")]
    BadDimensions { width: u16, height: u16 },
}

/// Converts pixel images into half-block [`TextImage`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct HalfBlockRasterizer;

impl HalfBlockRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Produces a `width` x `height` cell grid from `image`.
    pub fn rasterize(
        &self,
        image: &RgbaImage,
        width: u16,
        height: u16,
    ) -> Result<TextImage, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::BadDimensions { width, height });
        }

        let resized = image::imageops::resize(
            image,
            u32::from(width),
            u32::from(height) * 2,
            FilterType::Triangle,
        );

        let mut rows = Vec::with_capacity(usize::from(height));
        for row in 0..u32::from(height) {
            let mut cells = Vec::with_capacity(usize::from(width));
            for col in 0..u32::from(width) {
                cells.push(Cell {
                    top: pixel_color(&resized, col, row * 2),
                    bottom: pixel_color(&resized, col, row * 2 + 1),
                });
            }
            rows.push(cells);
        }
        Ok(TextImage::from_rows(rows))
    }
}

fn pixel_color(image: &RgbaImage, x: u32, y: u32) -> Rgb {
    let [r, g, b, _] = image.get_pixel(x, y).0;
    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn output_grid_matches_requested_dimensions() {
        let image = RgbaImage::from_pixel(400, 400, Rgba([9, 9, 9, 255]));
        let text = HalfBlockRasterizer::new().rasterize(&image, 80, 24).unwrap();
        assert_eq!(text.width(), 80);
        assert_eq!(text.height(), 24);
    }

    #[test]
    fn zero_sized_grids_are_rejected() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let rasterizer = HalfBlockRasterizer::new();
        assert!(matches!(
            rasterizer.rasterize(&image, 0, 10),
            Err(RasterError::BadDimensions { .. })
        ));
        assert!(matches!(
            rasterizer.rasterize(&image, 10, 0),
            Err(RasterError::BadDimensions { .. })
        ));
    }

    #[test]
    fn adjacent_pixel_rows_pair_into_one_cell() {
        // A 1x2 image rasterized to a single cell keeps each pixel's color.
        let mut image = RgbaImage::new(1, 2);
        image.put_pixel(0, 0, Rgba([200, 0, 0, 255]));
        image.put_pixel(0, 1, Rgba([0, 0, 200, 255]));

        let text = HalfBlockRasterizer::new().rasterize(&image, 1, 1).unwrap();
        let cell = text.rows()[0][0];
        assert_eq!(cell.top, Rgb::new(200, 0, 0));
        assert_eq!(cell.bottom, Rgb::new(0, 0, 200));
    }

    #[test]
    fn solid_input_stays_solid() {
        let image = RgbaImage::from_pixel(64, 64, Rgba([10, 120, 200, 255]));
        let text = HalfBlockRasterizer::new().rasterize(&image, 8, 4).unwrap();
        for row in text.rows() {
            for cell in row {
                assert_eq!(cell.top, Rgb::new(10, 120, 200));
                assert_eq!(cell.bottom, Rgb::new(10, 120, 200));
            }
        }
    }
}
