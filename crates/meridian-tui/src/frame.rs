// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The production frame renderer: tile compositing piped into half-block
//! rasterization.

use meridian_ansi::HalfBlockRasterizer;
use meridian_core::{Coordinate, FrameRenderer, RenderError, TextImage, TileStyle};
use meridian_tiles::TileComposer;

/// Pixel size of the composited canvas before text downsampling. The text
/// grid samples from this fixed square regardless of terminal size.
const CANVAS_WIDTH: u32 = 400;
const CANVAS_HEIGHT: u32 = 400;

pub struct StaticMapRenderer {
    composer: TileComposer,
    rasterizer: HalfBlockRasterizer,
}

impl Default for StaticMapRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticMapRenderer {
    pub fn new() -> Self {
        Self {
            composer: TileComposer::new(),
            rasterizer: HalfBlockRasterizer::new(),
        }
    }
}

impl FrameRenderer for StaticMapRenderer {
    fn render(
        &self,
        center: Coordinate,
        zoom: u8,
        style: TileStyle,
        width: u16,
        height: u16,
    ) -> Result<TextImage, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::BadDimensions { width, height });
        }
        let canvas = self
            .composer
            .compose(center, zoom, style, CANVAS_WIDTH, CANVAS_HEIGHT)
            .map_err(|err| RenderError::Compose(err.to_string()))?;
        self.rasterizer
            .rasterize(&canvas, width, height)
            .map_err(|err| RenderError::Raster(err.to_string()))
    }
}
