// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Viewport state machine and command orchestration for the meridian map
//! viewer.
//!
//! This crate owns the interactive session's only mutable state (the
//! viewport), maps key events to viewport mutations, and serializes the two
//! asynchronous collaborator operations (frame rendering and place-name
//! geocoding) so the displayed output always reflects the latest committed
//! state. The collaborators themselves live behind the [`FrameRenderer`]
//! and [`Geocoder`] traits and are implemented elsewhere.

pub mod command;
pub mod controller;
pub mod error;
pub mod frame_renderer;
pub mod geo;
pub mod geocoder;
pub mod input;
pub mod style;
pub mod text_image;
pub mod viewport;

pub use command::{CommandRequest, CommandResult};
pub use controller::{ControllerState, DisplayText, MapController, Msg};
pub use error::{GeocodeError, RenderError};
pub use frame_renderer::FrameRenderer;
pub use geo::Coordinate;
pub use geocoder::Geocoder;
pub use input::{map_key, InputAction, PanDirection, ViewportAction, ZoomDirection};
pub use style::TileStyle;
pub use text_image::{Cell, Rgb, TextImage, HALF_BLOCK};
pub use viewport::{Viewport, DEFAULT_CENTER, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
