// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Terminal setup and cleanup.
//!
//! Raw mode and the alternate screen are tracked in atomics so cleanup is
//! idempotent and can run from the normal exit path, the Ctrl-C handler, or
//! the panic hook, whichever fires first.

use std::{
    io,
    panic,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use crossterm::{
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

static CLEANUP_DONE: AtomicBool = AtomicBool::new(false);
static RAW_MODE_ENABLED: AtomicBool = AtomicBool::new(false);
static ALTERNATE_SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Terminal setup configuration.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    pub raw_mode: bool,
    pub alternate_screen: bool,
    /// Install Ctrl-C and panic hooks that restore the terminal.
    pub install_signal_handlers: bool,
    /// Cleared by the signal handler to end the event loop.
    pub running_flag: Option<Arc<AtomicBool>>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            raw_mode: true,
            alternate_screen: true,
            install_signal_handlers: true,
            running_flag: None,
        }
    }
}

impl TerminalConfig {
    pub fn with_running_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.running_flag = Some(flag);
        self
    }
}

/// Puts the terminal into viewer mode.
pub fn setup_terminal(config: TerminalConfig) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    if config.raw_mode {
        crossterm::terminal::enable_raw_mode()?;
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);
    }

    if config.alternate_screen {
        stdout.execute(EnterAlternateScreen)?;
        ALTERNATE_SCREEN_ACTIVE.store(true, Ordering::SeqCst);
    }

    if config.install_signal_handlers {
        if let Some(running_flag) = &config.running_flag {
            let r = running_flag.clone();
            ctrlc::set_handler(move || {
                cleanup_terminal();
                r.store(false, Ordering::SeqCst);
            })
            .expect("Error setting Ctrl-C handler");
        } else {
            ctrlc::set_handler(|| {
                cleanup_terminal();
            })
            .expect("Error setting Ctrl-C handler");
        }

        let default_panic = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            cleanup_terminal();
            default_panic(panic_info);
        }));
    }

    Ok(())
}

/// Restores the terminal. Safe to call more than once and from any thread.
pub fn cleanup_terminal() {
    if CLEANUP_DONE.swap(true, Ordering::SeqCst) {
        return;
    }

    let mut stdout = io::stdout();

    if RAW_MODE_ENABLED.load(Ordering::SeqCst) {
        let _ = crossterm::terminal::disable_raw_mode();
        RAW_MODE_ENABLED.store(false, Ordering::SeqCst);
    }

    if ALTERNATE_SCREEN_ACTIVE.load(Ordering::SeqCst) {
        let _ = stdout.execute(LeaveAlternateScreen);
        ALTERNATE_SCREEN_ACTIVE.store(false, Ordering::SeqCst);
    }
}
