// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The viewport controller state machine.
//!
//! The controller is the single owner of the [`Viewport`]. It consumes one
//! serialized stream of messages (key actions, resizes, command results),
//! decides which command to dispatch next, and holds what the view should
//! currently display. At most one command is in flight at any time; input
//! arriving while a command runs is coalesced latest-wins and re-applied
//! once the in-flight command resolves.
//!
//! Every dispatched command carries a fresh generation. A result whose
//! generation is not the most recently dispatched one is stale and is
//! discarded without touching any state.

use crate::command::{CommandRequest, CommandResult};
use crate::input::{PanDirection, ViewportAction, ZoomDirection};
use crate::style::TileStyle;
use crate::text_image::TextImage;
use crate::viewport::Viewport;

/// Whether a command is in flight, and which kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    AwaitingRender,
    AwaitingGeocode,
}

/// What the view shows, verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayText {
    /// Nothing produced yet (before the first frame resolves).
    Blank,
    /// The last successfully rendered frame.
    Frame(TextImage),
    /// The last error message, shown as-is in place of a frame.
    Notice(String),
}

impl DisplayText {
    pub fn is_blank(&self) -> bool {
        matches!(self, DisplayText::Blank)
    }
}

/// Messages folded into the controller, one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A mapped movement or zoom key.
    Input(ViewportAction),
    /// The display grid changed size.
    Resize { width: u16, height: u16 },
    /// A dispatched command completed.
    Command(CommandResult),
}

/// The state machine. [`update`](MapController::update) is the single
/// serialized event-processing point; a returned [`CommandRequest`] must be
/// dispatched by the caller.
#[derive(Debug)]
pub struct MapController {
    viewport: Viewport,
    state: ControllerState,
    display: DisplayText,
    style: TileStyle,
    width: u16,
    height: u16,
    /// Generation of the most recently dispatched command.
    generation: u64,
    /// Input coalesced while a command is in flight; latest wins.
    pending_input: Option<ViewportAction>,
    /// A resize arrived while busy; re-render on the next idle entry.
    render_deferred: bool,
    /// Set whenever the display changed; cleared by the caller after drawing.
    pub needs_redraw: bool,
}

impl MapController {
    pub fn new(viewport: Viewport, style: TileStyle, width: u16, height: u16) -> Self {
        Self {
            viewport,
            state: ControllerState::Idle,
            display: DisplayText::Blank,
            style,
            width,
            height,
            generation: 0,
            pending_input: None,
            render_deferred: false,
            needs_redraw: false,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn display(&self) -> &DisplayText {
        &self.display
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Kicks off the session: dispatches the startup geocode when a query
    /// was configured, otherwise the initial render. Call once, before
    /// processing any messages.
    pub fn start(&mut self) -> Option<CommandRequest> {
        self.settle()
    }

    pub fn update(&mut self, msg: Msg) -> Option<CommandRequest> {
        match msg {
            Msg::Input(action) => match self.state {
                ControllerState::Idle => Some(self.apply_input(action)),
                // Busy: remember only the newest key.
                _ => {
                    self.pending_input = Some(action);
                    None
                }
            },
            Msg::Resize { width, height } => {
                self.width = width;
                self.height = height;
                match self.state {
                    ControllerState::Idle => {
                        self.state = ControllerState::AwaitingRender;
                        Some(self.render_request())
                    }
                    _ => {
                        self.render_deferred = true;
                        None
                    }
                }
            }
            Msg::Command(result) => {
                if result.generation() != self.generation {
                    // Stale completion from an older dispatch.
                    return None;
                }
                self.fold_result(result)
            }
        }
    }

    fn fold_result(&mut self, result: CommandResult) -> Option<CommandRequest> {
        match result {
            CommandResult::RenderSucceeded { image, .. } => {
                self.display = DisplayText::Frame(image);
                self.needs_redraw = true;
                self.state = ControllerState::Idle;
                self.settle()
            }
            CommandResult::RenderFailed { message, .. } => {
                self.display = DisplayText::Notice(message);
                self.needs_redraw = true;
                self.state = ControllerState::Idle;
                self.settle()
            }
            CommandResult::GeocodeSucceeded { coordinate, .. } => {
                self.viewport.set_center(coordinate);
                self.state = ControllerState::AwaitingRender;
                Some(self.render_request())
            }
            CommandResult::GeocodeFailed { message, .. } => {
                // The error text is the output; no render follows it.
                self.display = DisplayText::Notice(message);
                self.needs_redraw = true;
                self.state = ControllerState::Idle;
                self.settle()
            }
        }
    }

    /// Follow-up work on entering `Idle`, in precedence order: coalesced
    /// input, then a pending place lookup, then a deferred or first-run
    /// render.
    fn settle(&mut self) -> Option<CommandRequest> {
        if let Some(action) = self.pending_input.take() {
            return Some(self.apply_input(action));
        }
        if let Some(query) = self.viewport.take_query() {
            self.state = ControllerState::AwaitingGeocode;
            return Some(CommandRequest::Geocode {
                generation: self.next_generation(),
                query,
            });
        }
        if self.render_deferred || self.display.is_blank() {
            self.render_deferred = false;
            self.state = ControllerState::AwaitingRender;
            return Some(self.render_request());
        }
        None
    }

    /// Applies a movement key and dispatches the follow-up render. Every
    /// recognized key is a hit: the render goes out even when clamping or
    /// wraparound left the state unchanged.
    fn apply_input(&mut self, action: ViewportAction) -> CommandRequest {
        let step = self.viewport.pan_step();
        match action {
            ViewportAction::Pan(PanDirection::North) => self.viewport.pan_by(step, 0.0),
            ViewportAction::Pan(PanDirection::South) => self.viewport.pan_by(-step, 0.0),
            ViewportAction::Pan(PanDirection::East) => self.viewport.pan_by(0.0, step),
            ViewportAction::Pan(PanDirection::West) => self.viewport.pan_by(0.0, -step),
            ViewportAction::Zoom(ZoomDirection::In) => self.viewport.zoom_by(1),
            ViewportAction::Zoom(ZoomDirection::Out) => self.viewport.zoom_by(-1),
        }
        self.state = ControllerState::AwaitingRender;
        self.render_request()
    }

    fn render_request(&mut self) -> CommandRequest {
        CommandRequest::Render {
            generation: self.next_generation(),
            center: self.viewport.center(),
            zoom: self.viewport.zoom(),
            style: self.style,
            width: self.width,
            height: self.height,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
