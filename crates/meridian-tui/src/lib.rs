// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Terminal runtime for the meridian map viewer.
//!
//! Owns the terminal lifecycle, the single-consumer event loop, command
//! dispatch onto the blocking pool, and the ratatui view. The controller
//! and its collaborator contracts live in `meridian-core`; this crate wires
//! them to a real terminal and the production collaborators.

pub mod executor;
pub mod frame;
pub mod map_loop;
pub mod terminal;
pub mod view;

use std::sync::Arc;

use meridian_core::{FrameRenderer, Geocoder};
use meridian_geocode::NominatimClient;

pub use executor::{CommandExecutor, UiMsg};
pub use frame::StaticMapRenderer;
pub use map_loop::run_map_view;

/// The collaborators injected into the event loop.
pub struct MapDependencies {
    pub renderer: Arc<dyn FrameRenderer>,
    pub geocoder: Arc<dyn Geocoder>,
}

impl MapDependencies {
    /// Production wiring: tile compositing over HTTP and the public
    /// Nominatim instance.
    pub fn production() -> Self {
        Self {
            renderer: Arc::new(StaticMapRenderer::new()),
            geocoder: Arc::new(NominatimClient::new()),
        }
    }
}
