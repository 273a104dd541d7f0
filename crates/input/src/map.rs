//! Classification of terminal events.

use crossterm::event::{Event, KeyEventKind};

/// What an event means to the rain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// Any key (or pasted text): stop
    Quit,
    /// The terminal changed size
    Resized { columns: u16, rows: u16 },
}

/// Map a terminal event to a signal. Key releases, focus and mouse events are
/// ignored.
pub fn classify(event: &Event) -> Option<InputSignal> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(InputSignal::Quit),
        Event::Paste(_) => Some(InputSignal::Quit),
        Event::Resize(columns, rows) => Some(InputSignal::Resized {
            columns: *columns,
            rows: *rows,
        }),
        _ => None,
    }
}
