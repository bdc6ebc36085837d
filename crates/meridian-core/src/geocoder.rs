// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use crate::error::GeocodeError;
use crate::geo::Coordinate;

/// The place-name resolution collaborator.
///
/// Returns the single best match for a free-text query. Zero results is the
/// distinct [`GeocodeError::NotFound`] case, not an empty success. The call
/// is synchronous (a network round trip with unbounded latency) so the
/// runtime runs it on a blocking worker.
pub trait Geocoder: Send + Sync {
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError>;
}
