// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use crate::error::RenderError;
use crate::geo::Coordinate;
use crate::style::TileStyle;
use crate::text_image::TextImage;

/// The map compositing and text-art collaborator.
///
/// Implementations composite tiles for `(center, zoom, style)` and
/// downsample the result into a `width` x `height` character grid. The call
/// is synchronous so the runtime can run it on a blocking worker; CPU-bound
/// image work plus tile fetches take milliseconds to seconds.
pub trait FrameRenderer: Send + Sync {
    fn render(
        &self,
        center: Coordinate,
        zoom: u8,
        style: TileStyle,
        width: u16,
        height: u16,
    ) -> Result<TextImage, RenderError>;
}
