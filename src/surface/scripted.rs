//! Scripted Surface - In-memory surface for tests and headless contexts
//!
//! A surface whose readiness and events are driven by the caller instead of
//! a terminal. Tests script an exact event sequence against it; embedders
//! without an interactive surface use [`ScriptedSurface::headless`] to get
//! the silent no-op initialization path.
//!
//! # Example
//!
//! ```ignore
//! use input_modality::{ScriptedSurface, SurfaceEvent, KeyboardEvent};
//!
//! let surface = ScriptedSurface::new();
//! // ... track_input_modality(...) queues its setup ...
//! surface.ready();
//! surface.emit(SurfaceEvent::Key(KeyboardEvent::new("Tab")));
//! surface.emit(SurfaceEvent::Focus);
//! ```

use std::cell::{Cell, RefCell};

use super::event::{EventKind, StyleRule, SurfaceEvent};
use super::{Observer, ReadyCallback, Surface};

/// Caller-driven surface. Observers are invoked in registration order,
/// which stands in for the capturing phase of a real event tree.
pub struct ScriptedSurface {
    interactive: bool,
    ready: Cell<bool>,
    ready_callbacks: RefCell<Vec<ReadyCallback>>,
    observers: RefCell<Vec<(EventKind, Observer)>>,
    head: RefCell<Vec<StyleRule>>,
}

impl ScriptedSurface {
    /// Create an interactive surface that is not yet ready.
    pub fn new() -> Self {
        Self {
            interactive: true,
            ready: Cell::new(false),
            ready_callbacks: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            head: RefCell::new(Vec::new()),
        }
    }

    /// Create a non-interactive surface. Initializing a tracker against it
    /// attaches nothing.
    pub fn headless() -> Self {
        Self {
            interactive: false,
            ..Self::new()
        }
    }

    /// Mark the surface ready and fire queued ready callbacks, once.
    pub fn ready(&self) {
        if self.ready.get() {
            return;
        }
        self.ready.set(true);
        let callbacks = self.ready_callbacks.take();
        for callback in callbacks {
            callback();
        }
    }

    /// Dispatch an event to every observer registered for its kind.
    pub fn emit(&self, event: SurfaceEvent) {
        let kind = event.kind();
        let observers = self.observers.borrow();
        for (observed, handler) in observers.iter() {
            if *observed == kind {
                handler(&event);
            }
        }
    }

    /// Number of observers registered for `kind`.
    pub fn observer_count(&self, kind: EventKind) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|(observed, _)| *observed == kind)
            .count()
    }

    /// Snapshot of the head rules, in insertion order (newest first).
    pub fn head_rules(&self) -> Vec<StyleRule> {
        self.head.borrow().clone()
    }
}

impl Default for ScriptedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for ScriptedSurface {
    fn is_interactive(&self) -> bool {
        self.interactive
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
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::event::KeyboardEvent;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_on_ready_deferred_until_ready() {
        let surface = ScriptedSurface::new();
        let fired = Rc::new(Cell::new(0));

        let fired_clone = fired.clone();
        surface.on_ready(Box::new(move || fired_clone.set(fired_clone.get() + 1)));
        assert_eq!(fired.get(), 0);

        surface.ready();
        assert_eq!(fired.get(), 1);

        // Ready is one-shot
        surface.ready();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_on_ready_immediate_when_already_ready() {
        let surface = ScriptedSurface::new();
        surface.ready();

        let fired = Rc::new(Cell::new(false));
        let fired_clone = fired.clone();
        surface.on_ready(Box::new(move || fired_clone.set(true)));
        assert!(fired.get());
    }

    #[test]
    fn test_emit_routes_by_kind() {
        let surface = ScriptedSurface::new();
        let keys = Rc::new(Cell::new(0));
        let focuses = Rc::new(Cell::new(0));

        let keys_clone = keys.clone();
        surface.add_capturing_observer(
            EventKind::KeyDown,
            Box::new(move |_| keys_clone.set(keys_clone.get() + 1)),
        );
        let focuses_clone = focuses.clone();
        surface.add_capturing_observer(
            EventKind::Focus,
            Box::new(move |_| focuses_clone.set(focuses_clone.get() + 1)),
        );

        surface.emit(SurfaceEvent::Key(KeyboardEvent::new("a")));
        surface.emit(SurfaceEvent::Focus);
        surface.emit(SurfaceEvent::Blur);

        assert_eq!(keys.get(), 1);
        assert_eq!(focuses.get(), 1);
    }

    #[test]
    fn test_insert_head_child_prepends() {
        let surface = ScriptedSurface::new();
        surface.insert_head_child(StyleRule::new("first", "a"));
        surface.insert_head_child(StyleRule::new("second", "b"));

        let rules = surface.head_rules();
        assert_eq!(rules[0].id, "second");
        assert_eq!(rules[1].id, "first");
    }

    #[test]
    fn test_headless_is_not_interactive() {
        assert!(!ScriptedSurface::headless().is_interactive());
        assert!(ScriptedSurface::new().is_interactive());
    }
}
