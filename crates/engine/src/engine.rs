//! The fixed-timestep tick loop.
//!
//! One tick: apply a pending resize, spawn, advance and draw, present, sleep
//! out the rest of the tick, then poll input. A resize raised at any point is
//! only acted on at the start of the following tick.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, trace, warn};

use crate::core::{Rain, TickReport};
use crate::input::{EventSource, InputPoller, SignalFlags};
use crate::term::Backend;
use crate::types::TICK_MS;

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// A key was pressed
    KeyPressed,
    /// A termination signal arrived
    Terminated,
}

pub struct Engine<B, S> {
    rain: Rain,
    backend: B,
    input: InputPoller<S>,
    flags: SignalFlags,
    tick: Duration,
}

impl<B, S> Engine<B, S>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    S: EventSource,
{
    pub fn new(rain: Rain, backend: B, source: S, flags: SignalFlags) -> Self {
        Self {
            rain,
            backend,
            input: InputPoller::new(source, flags.clone()),
            flags,
            tick: Duration::from_millis(TICK_MS),
        }
    }

    /// Override the tick period (zero runs as fast as possible)
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn rain(&self) -> &Rain {
        &self.rain
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Query the initial size and clear the screen
    pub fn start(&mut self) -> Result<()> {
        self.refresh_size()
    }

    fn refresh_size(&mut self) -> Result<()> {
        match self.backend.query_size() {
            Some(size) => self.rain.set_size(size),
            None => warn!(previous = ?self.rain.size(), "size unavailable, keeping previous"),
        }
        self.backend.clear().context("clearing screen")?;
        Ok(())
    }

    /// One tick of work, without the sleep or the input poll
    pub fn step(&mut self) -> Result<TickReport> {
        if self.flags.take_resize() {
            self.refresh_size()?;
            info!(size = ?self.rain.size(), "resized");
        }

        let report = self.rain.tick(&mut self.backend).context("drawing rain")?;
        self.backend.present().context("flushing frame")?;
        Ok(report)
    }

    /// Non-blocking check for a reason to stop
    pub fn poll_exit(&mut self) -> Result<Option<ExitReason>> {
        if self.flags.terminate_requested() {
            return Ok(Some(ExitReason::Terminated));
        }
        if self.input.quit_requested().context("polling input")? {
            return Ok(Some(ExitReason::KeyPressed));
        }
        Ok(None)
    }

    /// Run until a key is pressed or termination is requested
    pub fn run(&mut self) -> Result<ExitReason> {
        self.start()?;
        info!(seed = self.rain.seed(), tick_ms = self.tick.as_millis() as u64, "rain started");

        loop {
            let started = Instant::now();
            let report = self.step()?;
            trace!(
                tick = self.rain.ticks(),
                spawned = report.spawned,
                advanced = report.advanced,
                glyphs = report.glyphs,
                retired = report.retired,
                active = self.rain.pool().active_count(),
                "tick"
            );

            if let Some(rest) = self.tick.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }

            if let Some(reason) = self.poll_exit()? {
                info!(?reason, ticks = self.rain.ticks(), "rain stopped");
                return Ok(reason);
            }
        }
    }
}
