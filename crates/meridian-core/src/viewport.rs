// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Viewport state and its mutation rules.
//!
//! The viewport is the sole mutable state of a running session: map center,
//! zoom level, and an optional pending place lookup. It is owned by the
//! controller and mutated only through it.

use crate::geo::Coordinate;

pub const MIN_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 16;

/// Scale constant for the per-keystroke pan distance. 1000 produces roughly
/// human-scale steps at zoom 15; the halving-per-zoom-level relationship is
/// what keeps panning speed constant in screen space.
const PAN_SCALE: f64 = 1000.0;

/// Startup position when none is given: Nassau, Bahamas.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 25.0782266,
    lng: -77.3383438,
};
pub const DEFAULT_ZOOM: u8 = 15;

#[derive(Debug, Clone)]
pub struct Viewport {
    center: Coordinate,
    zoom: u8,
    pending_query: Option<String>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_ZOOM)
    }
}

impl Viewport {
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            pending_query: None,
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn pending_query(&self) -> Option<&str> {
        self.pending_query.as_deref()
    }

    /// Degrees moved per keystroke at the current zoom.
    pub fn pan_step(&self) -> f64 {
        (PAN_SCALE / 2f64.powi(i32::from(self.zoom))) / 3.0
    }

    /// Translates the center, then normalizes by wraparound: crossing a
    /// boundary jumps to the opposite one. Not arithmetic modulo.
    pub fn pan_by(&mut self, d_lat: f64, d_lng: f64) {
        self.center.lat += d_lat;
        if self.center.lat > 90.0 {
            self.center.lat = -90.0;
        } else if self.center.lat < -90.0 {
            self.center.lat = 90.0;
        }

        self.center.lng += d_lng;
        if self.center.lng > 180.0 {
            self.center.lng = -180.0;
        } else if self.center.lng < -180.0 {
            self.center.lng = 180.0;
        }
    }

    /// Adjusts zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`. Values outside pin
    /// at the boundary, they do not wrap.
    pub fn zoom_by(&mut self, delta: i8) {
        let zoom = i16::from(self.zoom) + i16::from(delta);
        self.zoom = zoom.clamp(i16::from(MIN_ZOOM), i16::from(MAX_ZOOM)) as u8;
    }

    /// Direct assignment; the input is an already resolved coordinate.
    pub fn set_center(&mut self, center: Coordinate) {
        self.center = center;
    }

    /// Records a pending place lookup, replacing any unresolved one.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.pending_query = Some(query.into());
    }

    /// Takes the pending lookup; called at command dispatch time, after
    /// which the query is no longer considered pending.
    pub fn take_query(&mut self) -> Option<String> {
        self.pending_query.take()
    }
}
