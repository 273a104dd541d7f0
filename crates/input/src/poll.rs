//! Non-blocking input polling.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::debug;

use crate::map::{classify, InputSignal};
use crate::signals::SignalFlags;

/// Upper bound on events drained per poll so a flood cannot stall a tick
pub const MAX_EVENTS_PER_POLL: usize = 64;

/// A source of terminal events
pub trait EventSource {
    /// Whether an event is ready, waiting at most `timeout`
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Take the next event; only called after `poll` returned true
    fn read(&mut self) -> io::Result<Event>;
}

/// Events from the controlling terminal via crossterm
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Pre-recorded events, for headless runs and tests.
///
/// Each entry in the script is the batch of events pending at one poll.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    batches: VecDeque<Vec<Event>>,
    current: VecDeque<Event>,
    timeouts: Vec<Duration>,
    batch_open: bool,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch of events delivered together at a later poll
    pub fn push_batch(&mut self, events: Vec<Event>) {
        self.batches.push_back(events);
    }

    /// Queue an empty batch (a poll that finds nothing)
    pub fn push_idle(&mut self) {
        self.batches.push_back(Vec::new());
    }

    /// Every timeout passed to `poll` so far
    pub fn timeouts(&self) -> &[Duration] {
        &self.timeouts
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        self.timeouts.push(timeout);
        if !self.current.is_empty() {
            return Ok(true);
        }
        if self.batch_open {
            // Batch drained; the next poll opens the next batch.
            self.batch_open = false;
            return Ok(false);
        }
        match self.batches.pop_front() {
            Some(batch) if !batch.is_empty() => {
                self.current.extend(batch);
                self.batch_open = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn read(&mut self) -> io::Result<Event> {
        self.current
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::WouldBlock, "no scripted event"))
    }
}

/// Drains pending events once per tick
#[derive(Debug)]
pub struct InputPoller<S> {
    source: S,
    flags: SignalFlags,
}

impl<S: EventSource> InputPoller<S> {
    pub fn new(source: S, flags: SignalFlags) -> Self {
        Self { source, flags }
    }

    /// Drain whatever is pending without waiting.
    ///
    /// Returns true if a key arrived. Resize events raise the shared resize
    /// flag, to be applied at the start of the next tick.
    pub fn quit_requested(&mut self) -> io::Result<bool> {
        let mut quit = false;
        for _ in 0..MAX_EVENTS_PER_POLL {
            if !self.source.poll(Duration::ZERO)? {
                break;
            }
            match classify(&self.source.read()?) {
                Some(InputSignal::Quit) => quit = true,
                Some(InputSignal::Resized { columns, rows }) => {
                    debug!(columns, rows, "resize event");
                    self.flags.raise_resize();
                }
                None => {}
            }
        }
        Ok(quit)
    }
}
