// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Command-line entry point for the meridian map viewer.
//!
//! Parses startup parameters, initializes file logging (the terminal itself
//! belongs to the viewer), wires the production collaborators, and hands
//! control to the event loop.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use meridian_core::{Coordinate, TileStyle, Viewport, DEFAULT_CENTER, DEFAULT_ZOOM};
use meridian_tui::MapDependencies;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "meridian", version, about = "Browse the world map from your terminal")]
struct Cli {
    /// Map tile style, by name or numeric index (0-11).
    #[arg(short, long, default_value_t = TileStyle::default())]
    style: TileStyle,

    /// Initial zoom level (2-16).
    #[arg(short, long, default_value_t = DEFAULT_ZOOM)]
    zoom: u8,

    /// Append logs to this file; without it, logging is off (stdout is
    /// owned by the viewer).
    #[arg(long, env = "MERIDIAN_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Default log filter when --log-file is set; RUST_LOG overrides.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Where to start: "<lat> <lng>" or a free-text place name. Empty
    /// starts at the built-in default position.
    #[arg(allow_negative_numbers = true)]
    target: Vec<String>,
}

impl Cli {
    /// Two parseable floats mean a coordinate; anything else is a place
    /// query for the geocoder.
    fn initial_viewport(&self) -> Viewport {
        if let [lat, lng] = self.target.as_slice() {
            if let (Ok(lat), Ok(lng)) = (lat.parse::<f64>(), lng.parse::<f64>()) {
                return Viewport::new(Coordinate::new(lat, lng), self.zoom);
            }
        }
        let mut viewport = Viewport::new(DEFAULT_CENTER, self.zoom);
        if !self.target.is_empty() {
            viewport.set_query(self.target.join(" "));
        }
        viewport
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let viewport = cli.initial_viewport();
    tracing::info!(
        style = %cli.style,
        zoom = viewport.zoom(),
        query = viewport.pending_query().unwrap_or(""),
        "session starting"
    );
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .build()
        .context("building command runtime")?;

    meridian_tui::run_map_view(
        MapDependencies::production(),
        viewport,
        cli.style,
        runtime.handle().clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("meridian").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn two_floats_start_at_that_coordinate() {
        let cli = parse(&["40.7128", "-74.0060"]);
        let viewport = cli.initial_viewport();
        assert_eq!(viewport.center(), Coordinate::new(40.7128, -74.0060));
        assert_eq!(viewport.pending_query(), None);
    }

    #[test]
    fn words_become_a_place_query() {
        let cli = parse(&["new", "york"]);
        let viewport = cli.initial_viewport();
        assert_eq!(viewport.pending_query(), Some("new york"));
        assert_eq!(viewport.center(), DEFAULT_CENTER);
    }

    #[test]
    fn a_float_and_a_word_fall_back_to_a_query() {
        let cli = parse(&["40.7128", "broadway"]);
        assert_eq!(cli.initial_viewport().pending_query(), Some("40.7128 broadway"));
    }

    #[test]
    fn no_target_starts_at_the_default_position() {
        let cli = parse(&[]);
        let viewport = cli.initial_viewport();
        assert_eq!(viewport.center(), DEFAULT_CENTER);
        assert_eq!(viewport.zoom(), DEFAULT_ZOOM);
        assert_eq!(viewport.pending_query(), None);
    }

    #[test]
    fn style_accepts_names_and_numeric_indices() {
        assert_eq!(parse(&["--style", "carto-dark"]).style, TileStyle::CartoDark);
        assert_eq!(parse(&["-s", "2"]).style, TileStyle::OpenTopoMap);
    }

    #[test]
    fn zoom_flag_is_clamped_by_the_viewport() {
        let cli = parse(&["--zoom", "99"]);
        assert_eq!(cli.initial_viewport().zoom(), meridian_core::MAX_ZOOM);
    }
}
