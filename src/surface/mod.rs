//! Surface Module - The document-like environment abstraction
//!
//! The tracker never talks to a terminal (or any concrete environment)
//! directly. It talks to a [`Surface`]: a minimal capability interface over
//! an interactive surface with a root element. Three capabilities are all
//! the tracker needs:
//!
//! - a **ready** lifecycle signal (attach nothing before the surface is
//!   fully constructed);
//! - **capturing-phase observer** registration for keydown/focus/blur on
//!   the root;
//! - **head child insertion** for the optional focus-ring-suppression rule.
//!
//! Implementations:
//!
//! - [`terminal::TerminalSurface`] - crossterm-backed, for real terminals
//! - [`scripted::ScriptedSurface`] - caller-driven, for tests and
//!   headless contexts

pub mod event;
pub mod scripted;
pub mod terminal;

pub use event::{EventKind, KeyboardEvent, Modifiers, StyleRule, SurfaceEvent};
pub use scripted::ScriptedSurface;
pub use terminal::TerminalSurface;

/// Callback fired once when the surface becomes ready.
pub type ReadyCallback = Box<dyn FnOnce()>;

/// Capturing-phase event observer.
pub type Observer = Box<dyn Fn(&SurfaceEvent)>;

/// Minimal capability interface over a document-like interactive surface.
///
/// All methods take `&self`: surfaces hand out no mutable access and manage
/// their registries behind interior mutability, since observers are
/// registered and dispatched on the same thread.
pub trait Surface {
    /// Whether an interactive surface is actually present. When false
    /// (headless execution), initializers attach nothing.
    fn is_interactive(&self) -> bool;

    /// Run `callback` once the surface has finished initial construction.
    /// If it already has, run it immediately.
    fn on_ready(&self, callback: ReadyCallback);

    /// Attach a capturing-phase observer for `kind` events on the surface
    /// root. Observers persist for the surface's lifetime; there is no
    /// unsubscribe.
    fn add_capturing_observer(&self, kind: EventKind, handler: Observer);

    /// Insert a style rule as the FIRST head child, so rules inserted later
    /// take precedence over it.
    fn insert_head_child(&self, rule: StyleRule);
}
