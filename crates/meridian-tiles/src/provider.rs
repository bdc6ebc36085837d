// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Tile server URL schemes, one per [`TileStyle`].
//!
//! Servers with mirror subdomains are sharded deterministically on the tile
//! coordinates so repeated composes of the same viewport hit the same hosts.

use meridian_core::TileStyle;

fn shard(count: u32, x: u32, y: u32) -> &'static str {
    const SHARDS: [&str; 4] = ["a", "b", "c", "d"];
    SHARDS[((x + y) % count) as usize]
}

/// URL of one tile for the given style.
pub fn tile_url(style: TileStyle, zoom: u8, x: u32, y: u32) -> String {
    let abc = shard(3, x, y);
    let abcd = shard(4, x, y);
    match style {
        TileStyle::Wikimedia => {
            format!("https://maps.wikimedia.org/osm-intl/{zoom}/{x}/{y}.png")
        }
        TileStyle::OpenStreetMaps => {
            format!("https://{abc}.tile.openstreetmap.org/{zoom}/{x}/{y}.png")
        }
        TileStyle::OpenTopoMap => {
            format!("https://{abc}.tile.opentopomap.org/{zoom}/{x}/{y}.png")
        }
        TileStyle::OpenCycleMap => {
            format!("https://{abc}.tile.thunderforest.com/cycle/{zoom}/{x}/{y}.png")
        }
        TileStyle::CartoLight => format!(
            "https://cartodb-basemaps-{abcd}.global.ssl.fastly.net/light_all/{zoom}/{x}/{y}.png"
        ),
        TileStyle::CartoDark => format!(
            "https://cartodb-basemaps-{abcd}.global.ssl.fastly.net/dark_all/{zoom}/{x}/{y}.png"
        ),
        TileStyle::StamenToner => {
            format!("https://stamen-tiles-{abcd}.a.ssl.fastly.net/toner/{zoom}/{x}/{y}.png")
        }
        TileStyle::StamenTerrain => {
            format!("https://stamen-tiles-{abcd}.a.ssl.fastly.net/terrain/{zoom}/{x}/{y}.jpg")
        }
        TileStyle::ThunderforestLandscape => {
            format!("https://{abc}.tile.thunderforest.com/landscape/{zoom}/{x}/{y}.png")
        }
        TileStyle::ThunderforestOutdoors => {
            format!("https://{abc}.tile.thunderforest.com/outdoors/{zoom}/{x}/{y}.png")
        }
        TileStyle::ThunderforestTransport => {
            format!("https://{abc}.tile.thunderforest.com/transport/{zoom}/{x}/{y}.png")
        }
        TileStyle::ArcgisWorldImagery => format!(
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{zoom}/{y}/{x}"
        ),
    }
}
