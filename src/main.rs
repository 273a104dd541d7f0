//! Terminal word rain (default binary).
//!
//! Streams of colored words fall down the terminal until any key is pressed.
//! Output is plain escape sequences written on top of whatever the terminal
//! already shows; nothing is redrawn that has not moved.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use word_rain::core::{Rain, SampleStore};
use word_rain::engine::Engine;
use word_rain::input::{SignalFlags, TerminalEvents};
use word_rain::term::{restore_terminal_best_effort, TerminalRenderer};
use word_rain::{init_logging, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let samples = SampleStore::load_or_default(args.words.as_deref());
    let rain = Rain::new(samples, args.seed);

    let flags = SignalFlags::new();
    if let Err(err) = flags.register_os_handlers() {
        warn!(error = %err, "signal handlers unavailable; resizes picked up from events only");
    }

    install_panic_hook();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut engine = Engine::new(rain, term, TerminalEvents, flags);
    let result = engine.run();

    // Always try to restore terminal state.
    let restored = engine.backend_mut().exit();
    let reason = result?;
    restored?;

    info!(?reason, "exit");
    Ok(())
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal_best_effort();
        default_hook(info);
    }));
}
