// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Command dispatch onto the runtime's blocking pool.
//!
//! Both collaborator calls are synchronous, so each dispatched command runs
//! as one `spawn_blocking` task. The task sends its [`CommandResult`] back
//! through the same channel the event loop consumes, which is what
//! serializes result folding with key handling.

use std::sync::Arc;

use crossbeam_channel as chan;
use meridian_core::{CommandRequest, CommandResult, FrameRenderer, Geocoder};
use tracing::debug;

/// Everything the single event inbox can carry.
#[derive(Debug)]
pub enum UiMsg {
    /// User input or resize from the event reader thread.
    Input(crossterm::event::Event),
    /// A dispatched command completed.
    Command(CommandResult),
}

/// Runs controller-issued commands off the loop thread.
pub struct CommandExecutor {
    runtime: tokio::runtime::Handle,
    renderer: Arc<dyn FrameRenderer>,
    geocoder: Arc<dyn Geocoder>,
    tx: chan::Sender<UiMsg>,
}

impl CommandExecutor {
    pub fn new(
        runtime: tokio::runtime::Handle,
        renderer: Arc<dyn FrameRenderer>,
        geocoder: Arc<dyn Geocoder>,
        tx: chan::Sender<UiMsg>,
    ) -> Self {
        Self {
            runtime,
            renderer,
            geocoder,
            tx,
        }
    }

    /// Fire-and-forget: the result comes back through the event inbox. A
    /// send failure means the loop already exited and is ignored.
    pub fn dispatch(&self, request: CommandRequest) {
        match request {
            CommandRequest::Render {
                generation,
                center,
                zoom,
                style,
                width,
                height,
            } => {
                debug!(generation, zoom, %center, "dispatching render");
                let renderer = Arc::clone(&self.renderer);
                let tx = self.tx.clone();
                self.runtime.spawn_blocking(move || {
                    let result = match renderer.render(center, zoom, style, width, height) {
                        Ok(image) => CommandResult::RenderSucceeded { generation, image },
                        Err(err) => CommandResult::RenderFailed {
                            generation,
                            message: err.to_string(),
                        },
                    };
                    let _ = tx.send(UiMsg::Command(result));
                });
            }
            CommandRequest::Geocode { generation, query } => {
                debug!(generation, query = %query, "dispatching geocode");
                let geocoder = Arc::clone(&self.geocoder);
                let tx = self.tx.clone();
                self.runtime.spawn_blocking(move || {
                    let result = match geocoder.resolve(&query) {
                        Ok(coordinate) => CommandResult::GeocodeSucceeded {
                            generation,
                            coordinate,
                        },
                        Err(err) => CommandResult::GeocodeFailed {
                            generation,
                            message: err.to_string(),
                        },
                    };
                    let _ = tx.send(UiMsg::Command(result));
                });
            }
        }
    }
}
