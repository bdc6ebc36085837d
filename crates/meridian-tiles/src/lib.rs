// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Slippy-map tile compositing.
//!
//! Fetches the 256x256 web tiles covering a viewport and stitches them into
//! one pixel canvas centered on a coordinate. Tiles wrap around the
//! antimeridian on the x axis; beyond the top and bottom of the Web-Mercator
//! square the canvas keeps its background fill. Any tile failure fails the
//! whole compose; retry policy belongs to the caller, not here.

pub mod mercator;
pub mod provider;

use std::io::Read;
use std::time::Duration;

use image::{Rgba, RgbaImage};
use meridian_core::{Coordinate, TileStyle};
use thiserror::Error;
use tracing::debug;

use mercator::TILE_SIZE;

/// Fill color for canvas areas no tile covers (outside the projected world).
const BACKGROUND: Rgba<u8> = Rgba([38, 38, 38, 255]);

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("empty canvas {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("fetching {url}: {detail}")]
    Fetch { url: String, detail: String },

    #[error("tile server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("decoding tile {url}: {detail}")]
    Decode { url: String, detail: String },
}

/// Downloads and stitches map tiles into a fixed-size canvas.
pub struct TileComposer {
    agent: ureq::Agent,
}

impl Default for TileComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl TileComposer {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!("meridian/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }

    /// Composites the `width` x `height` pixel view centered on `center` at
    /// `zoom`, in the given style.
    pub fn compose(
        &self,
        center: Coordinate,
        zoom: u8,
        style: TileStyle,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, ComposeError> {
        if width == 0 || height == 0 {
            return Err(ComposeError::EmptyCanvas { width, height });
        }

        let (center_x, center_y) = mercator::global_pixel(center, zoom);
        let left = center_x - f64::from(width) / 2.0;
        let top = center_y - f64::from(height) / 2.0;

        let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);

        let tile_span = i64::from(TILE_SIZE);
        let world_tiles = i64::from(mercator::world_tiles(zoom));
        let first_tile_x = (left / f64::from(TILE_SIZE)).floor() as i64;
        let first_tile_y = (top / f64::from(TILE_SIZE)).floor() as i64;
        let last_tile_x = ((left + f64::from(width)) / f64::from(TILE_SIZE)).floor() as i64;
        let last_tile_y = ((top + f64::from(height)) / f64::from(TILE_SIZE)).floor() as i64;

        debug!(
            zoom,
            tiles_x = last_tile_x - first_tile_x + 1,
            tiles_y = last_tile_y - first_tile_y + 1,
            "compositing viewport"
        );

        for tile_y in first_tile_y..=last_tile_y {
            if tile_y < 0 || tile_y >= world_tiles {
                continue;
            }
            for tile_x in first_tile_x..=last_tile_x {
                let wrapped_x = tile_x.rem_euclid(world_tiles) as u32;
                let url = provider::tile_url(style, zoom, wrapped_x, tile_y as u32);
                let tile = self.fetch_tile(&url)?;
                let dest_x = (tile_x * tile_span) as f64 - left;
                let dest_y = (tile_y * tile_span) as f64 - top;
                image::imageops::overlay(
                    &mut canvas,
                    &tile,
                    dest_x.round() as i64,
                    dest_y.round() as i64,
                );
            }
        }

        Ok(canvas)
    }

    fn fetch_tile(&self, url: &str) -> Result<RgbaImage, ComposeError> {
        debug!(url, "fetching tile");
        let response = self.agent.get(url).call().map_err(|err| match err {
            ureq::Error::Status(status, _) => ComposeError::Status {
                status,
                url: url.to_string(),
            },
            ureq::Error::Transport(transport) => ComposeError::Fetch {
                url: url.to_string(),
                detail: transport.to_string(),
            },
        })?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|err| ComposeError::Fetch {
                url: url.to_string(),
                detail: err.to_string(),
            })?;

        let decoded = image::load_from_memory(&bytes).map_err(|err| ComposeError::Decode {
            url: url.to_string(),
            detail: err.to_string(),
        })?;
        Ok(decoded.to_rgba8())
    }
}
