// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Tile style selection.
//!
//! The style names the tile server family a frame is composited from. The
//! core only carries the selection; URL schemes live with the compositor.

/// Available map tile styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileStyle {
    Wikimedia,
    #[default]
    OpenStreetMaps,
    OpenTopoMap,
    OpenCycleMap,
    CartoLight,
    CartoDark,
    StamenToner,
    StamenTerrain,
    ThunderforestLandscape,
    ThunderforestOutdoors,
    ThunderforestTransport,
    ArcgisWorldImagery,
}

impl TileStyle {
    pub const ALL: [TileStyle; 12] = [
        TileStyle::Wikimedia,
        TileStyle::OpenStreetMaps,
        TileStyle::OpenTopoMap,
        TileStyle::OpenCycleMap,
        TileStyle::CartoLight,
        TileStyle::CartoDark,
        TileStyle::StamenToner,
        TileStyle::StamenTerrain,
        TileStyle::ThunderforestLandscape,
        TileStyle::ThunderforestOutdoors,
        TileStyle::ThunderforestTransport,
        TileStyle::ArcgisWorldImagery,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TileStyle::Wikimedia => "wikimedia",
            TileStyle::OpenStreetMaps => "openstreetmap",
            TileStyle::OpenTopoMap => "opentopomap",
            TileStyle::OpenCycleMap => "opencyclemap",
            TileStyle::CartoLight => "carto-light",
            TileStyle::CartoDark => "carto-dark",
            TileStyle::StamenToner => "stamen-toner",
            TileStyle::StamenTerrain => "stamen-terrain",
            TileStyle::ThunderforestLandscape => "thunderforest-landscape",
            TileStyle::ThunderforestOutdoors => "thunderforest-outdoors",
            TileStyle::ThunderforestTransport => "thunderforest-transport",
            TileStyle::ArcgisWorldImagery => "arcgis-world-imagery",
        }
    }
}

impl std::fmt::Display for TileStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TileStyle {
    type Err = String;

    /// Accepts a style name or its numeric index in [`TileStyle::ALL`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if let Ok(index) = wanted.parse::<usize>() {
            return Self::ALL
                .get(index)
                .copied()
                .ok_or_else(|| format!("style index out of range (0-11): {index}"));
        }
        Self::ALL
            .iter()
            .find(|style| style.name() == wanted)
            .copied()
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|s| s.name()).collect();
                format!("unknown style {s:?}; expected one of: {}", names.join(", "))
            })
    }
}
