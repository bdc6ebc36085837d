// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The main event loop.
//!
//! One dedicated reader thread turns `crossterm::event::read()` into
//! messages; command workers send their results into the same inbox. The
//! loop is the single consumer and therefore the only place controller
//! state is touched. Ticks exist so the interrupt flag is observed even
//! while the inbox is quiet; input is preferred over ticks.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use crossbeam_channel as chan;
use crossterm::event::Event;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use meridian_core::{map_key, InputAction, MapController, Msg, TileStyle, Viewport};

use crate::{
    executor::{CommandExecutor, UiMsg},
    terminal::{self, TerminalConfig},
    view, MapDependencies,
};

/// Runs the interactive viewer until a quit key or interrupt.
pub fn run_map_view(
    deps: MapDependencies,
    viewport: Viewport,
    style: TileStyle,
    runtime: tokio::runtime::Handle,
) -> anyhow::Result<()> {
    let running = Arc::new(AtomicBool::new(true));

    terminal::setup_terminal(TerminalConfig::default().with_running_flag(running.clone()))?;
    let mut term = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (width, height) = crossterm::terminal::size()?;
    let mut controller = MapController::new(viewport, style, width, height);

    let (tx_ui, rx_ui) = chan::unbounded::<UiMsg>();
    let executor = CommandExecutor::new(runtime, deps.renderer, deps.geocoder, tx_ui.clone());

    // Event reader thread; exits when the inbox is gone.
    let event_sender = tx_ui;
    thread::spawn(move || {
        while let Ok(event) = crossterm::event::read() {
            if event_sender.send(UiMsg::Input(event)).is_err() {
                break;
            }
        }
    });

    // Coalescing tick channel that never builds a backlog.
    let rx_tick = chan::tick(Duration::from_millis(100));

    if let Some(request) = controller.start() {
        executor.dispatch(request);
    }

    loop {
        if !running.load(Ordering::SeqCst) {
            break;
        }

        chan::select_biased! {
            recv(rx_ui) -> msg => {
                let Ok(msg) = msg else { break };
                match msg {
                    UiMsg::Input(Event::Key(key)) => {
                        debug!(key_code = ?key.code, modifiers = ?key.modifiers, "key event");
                        match map_key(&key) {
                            Some(InputAction::Quit) => break,
                            Some(InputAction::Viewport(action)) => {
                                if let Some(request) = controller.update(Msg::Input(action)) {
                                    executor.dispatch(request);
                                }
                            }
                            None => {}
                        }
                    }
                    UiMsg::Input(Event::Resize(new_width, new_height)) => {
                        let _ = term.autoresize();
                        if let Some(request) = controller.update(Msg::Resize {
                            width: new_width,
                            height: new_height,
                        }) {
                            executor.dispatch(request);
                        }
                        // Redraw the old frame at the new size while the
                        // replacement render is in flight.
                        controller.needs_redraw = true;
                    }
                    UiMsg::Input(_) => {}
                    UiMsg::Command(result) => {
                        if let Some(request) = controller.update(Msg::Command(result)) {
                            executor.dispatch(request);
                        }
                    }
                }

                if controller.needs_redraw {
                    term.draw(|frame| view::render(frame, &controller))?;
                    controller.needs_redraw = false;
                }
            }
            recv(rx_tick) -> _ => {}
        }
    }

    terminal::cleanup_terminal();
    Ok(())
}
