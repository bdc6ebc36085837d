// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Web-Mercator projection math for the slippy-map tile scheme.

use meridian_core::Coordinate;

/// Edge length of one square tile, in pixels.
pub const TILE_SIZE: u32 = 256;

/// Projects a coordinate to global pixel space at a zoom level: `x` grows
/// east from the antimeridian, `y` grows south from the north edge of the
/// Web-Mercator square. `y` is clamped to the square, so polar latitudes
/// (which the projection cannot represent) pin at the world edge.
pub fn global_pixel(coordinate: Coordinate, zoom: u8) -> (f64, f64) {
    let world = world_pixels(zoom);
    let x = (coordinate.lng + 180.0) / 360.0 * world;
    let lat_rad = coordinate.lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * world;
    (x.clamp(0.0, world), y.clamp(0.0, world))
}

/// Pixel width (= height) of the whole world at a zoom level.
pub fn world_pixels(zoom: u8) -> f64 {
    f64::from(TILE_SIZE) * 2f64.powi(i32::from(zoom))
}

/// Number of tiles along one world axis at a zoom level.
pub fn world_tiles(zoom: u8) -> u32 {
    1u32 << u32::from(zoom)
}
