// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error taxonomy for the two collaborator operations.
//!
//! Errors are terminal for the command that produced them and never escape
//! the command boundary; the runtime stringifies them into a failed
//! [`crate::CommandResult`] and the controller shows the text.

use thiserror::Error;

/// Frame rendering failures (tile compositing or text rasterization).
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("bad output dimensions {width}x{height}")]
    BadDimensions { width: u16, height: u16 },

    #[error("tile compositing failed: {0}")]
    Compose(String),

    #[error("rasterization failed: {0}")]
    Raster(String),
}

/// Geocoding failures. Each failure mode is its own kind so callers never
/// have to parse message text.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Transport(String),

    #[error("geocoding service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed geocoding response: {0}")]
    Malformed(String),

    #[error("unparsable coordinate in geocoding response: {0}")]
    BadCoordinate(String),

    #[error("Location not found")]
    NotFound,
}
