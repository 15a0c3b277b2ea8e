//! Terminal Surface - crossterm-backed interactive surface
//!
//! Bridges crossterm's event stream to the surface observer model. Key
//! events become keydown dispatches; the terminal's focus-gained and
//! focus-lost reports become focus/blur dispatches.
//!
//! Focus reporting is opt-in at the terminal level, mirrored here as
//! explicit enable/disable operations.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use input_modality::TerminalSurface;
//!
//! TerminalSurface::enable_focus_events()?;
//! let surface = TerminalSurface::new();
//!
//! // Event loop
//! loop {
//!     surface.pump(Duration::from_millis(16))?;
//! }
//! ```

use crossterm::event::{
    DisableFocusChange, EnableFocusChange, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers, poll, read,
};
use crossterm::execute;
use crossterm::tty::IsTty;
use std::cell::{Cell, RefCell};
use std::io::stdout;
use std::time::Duration;

use super::event::{EventKind, KeyboardEvent, Modifiers, StyleRule, SurfaceEvent};
use super::{Observer, ReadyCallback, Surface};

// =============================================================================
// TERMINAL SURFACE
// =============================================================================

/// Interactive surface backed by the controlling terminal.
///
/// The surface becomes ready on its first [`TerminalSurface::pump`]; ready
/// callbacks registered before that are queued. Head rules are stored for
/// the embedding renderer to interpret.
pub struct TerminalSurface {
    ready: Cell<bool>,
    ready_callbacks: RefCell<Vec<ReadyCallback>>,
    observers: RefCell<Vec<(EventKind, Observer)>>,
    head: RefCell<Vec<StyleRule>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            ready: Cell::new(false),
            ready_callbacks: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            head: RefCell::new(Vec::new()),
        }
    }

    /// Ask the terminal to report focus gained/lost events.
    pub fn enable_focus_events() -> std::io::Result<()> {
        execute!(stdout(), EnableFocusChange)
    }

    /// Stop the terminal from reporting focus events.
    pub fn disable_focus_events() -> std::io::Result<()> {
        execute!(stdout(), DisableFocusChange)
    }

    /// Poll the terminal for one event and dispatch it to observers.
    ///
    /// Marks the surface ready on first call. Returns true if an event was
    /// dispatched within the timeout.
    pub fn pump(&self, timeout: Duration) -> std::io::Result<bool> {
        self.mark_ready();

        if !poll(timeout)? {
            return Ok(false);
        }
        match convert_event(read()?) {
            Some(event) => {
                self.dispatch(&event);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Snapshot of the head rules, in insertion order (newest first).
    pub fn head_rules(&self) -> Vec<StyleRule> {
        self.head.borrow().clone()
    }

    fn mark_ready(&self) {
        if self.ready.get() {
            return;
        }
        self.ready.set(true);
        let callbacks = self.ready_callbacks.take();
        for callback in callbacks {
            callback();
        }
    }

    fn dispatch(&self, event: &SurfaceEvent) {
        let kind = event.kind();
        let observers = self.observers.borrow();
        for (observed, handler) in observers.iter() {
            if *observed == kind {
                handler(event);
            }
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn is_interactive(&self) -> bool {
        stdout().is_tty()
    }

    fn on_ready(&self, callback: ReadyCallback) {
        if self.ready.get() {
            callback();
        } else {
            self.ready_callbacks.borrow_mut().push(callback);
        }
    }

    fn add_capturing_observer(&self, kind: EventKind, handler: Observer) {
        self.observers.borrow_mut().push((kind, handler));
    }

    fn insert_head_child(&self, rule: StyleRule) {
        self.head.borrow_mut().insert(0, rule);
    }
}

// =============================================================================
// EVENT CONVERSION
// =============================================================================

/// Convert a crossterm event to a surface event.
///
/// Key releases are not keydowns and yield None. Repeats are delivered:
/// holding Tab keeps re-arming the recent-key window, same as a repeating
/// key would on any other interactive surface.
pub fn convert_event(event: CrosstermEvent) -> Option<SurfaceEvent> {
    match event {
        CrosstermEvent::Key(key) => convert_key_event(key).map(SurfaceEvent::Key),
        CrosstermEvent::FocusGained => Some(SurfaceEvent::Focus),
        CrosstermEvent::FocusLost => Some(SurfaceEvent::Blur),
        _ => None,
    }
}

/// Convert a crossterm KeyEvent to a KeyboardEvent.
///
/// Shift+Tab arrives from terminals as `BackTab`; it is reported as "Tab"
/// with the shift modifier so backwards keyboard navigation counts the same
/// as forwards.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<KeyboardEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let mut modifiers = convert_modifiers(event.modifiers);
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => {
            modifiers.shift = true;
            "Tab".to_string()
        }
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Insert => "Insert".to_string(),
        _ => return None,
    };

    Some(KeyboardEvent { key, modifiers })
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

// =============================================================================
// TESTS
// =============================================================================
