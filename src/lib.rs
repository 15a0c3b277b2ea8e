//! # input-modality
//!
//! Keyboard input modality tracking for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! shared reactive state.
//!
//! ## What it does
//!
//! Infers whether the user's most recent focus movement was keyboard-driven
//! and exposes that as one shared flag. Focus-ring rendering keys off the
//! flag: show the ring for keyboard users, hide it for pointer users.
//!
//! The heuristic is deliberately small: remember the most recent qualifying
//! keydown for ~100ms, promote the flag to keyboard on a focus event inside
//! that window, clear it on every blur.
//!
//! ```text
//! keydown ──> recent-key marker (100ms debounce)
//! focus   ──> marker live & key allowed? ──> modality = keyboard
//! blur    ──> modality = not-keyboard
//! ```
//!
//! ## Modules
//!
//! - [`state`] - The injectable [`ModalityState`] handle consumers read
//! - [`surface`] - The document-like environment abstraction and its
//!   terminal/scripted implementations
//! - [`schedule`] - Single-slot deferred task driving the 100ms expiry
//! - [`tracker`] - The initialization entry point and its observers

pub mod schedule;
pub mod state;
pub mod surface;
pub mod tracker;

// Re-export commonly used items
pub use schedule::{Clock, DebounceSlot, ManualClock, MonotonicClock};

pub use state::{InputModality, ModalityState};

pub use surface::{
    EventKind, KeyboardEvent, Modifiers, ScriptedSurface, StyleRule, Surface, SurfaceEvent,
    TerminalSurface,
};

pub use tracker::{
    DISABLE_FOCUS_RING_STYLE_ID, MODALITY_KEYS, RECENT_KEY_WINDOW, TrackOptions,
    track_input_modality,
};
