//! Modality Tracker - Infer keyboard modality from event timing
//!
//! Tracks whether the user is currently navigating with the keyboard, using
//! one heuristic: a focus change that lands within [`RECENT_KEY_WINDOW`] of
//! a qualifying keydown was keyboard-driven. Everything else is not.
//!
//! Three capturing observers on the surface root do all the work:
//!
//! - **keydown** remembers the event and arms a 100ms expiry (each keydown
//!   replaces the previous expiry, so the marker survives rapid typing);
//! - **focus** sets the shared flag to keyboard iff the marker is live and
//!   its key is in [`MODALITY_KEYS`];
//! - **blur** clears the flag unconditionally.
//!
//! The tracker only writes the shared [`ModalityState`]. Reflecting the
//! flag onto the root element (the `modality=keyboard` attribute consumers
//! select on) is the embedder's job.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use input_modality::{
//!     DebounceSlot, ModalityState, TerminalSurface, TrackOptions,
//!     track_input_modality,
//! };
//!
//! let surface = Rc::new(TerminalSurface::new());
//! let state = ModalityState::new();
//! let slot = Rc::new(DebounceSlot::monotonic());
//!
//! track_input_modality(surface.clone(), state.clone(), slot.clone(), TrackOptions::default());
//!
//! // Event loop: pump the surface, expire the debounce
//! loop {
//!     surface.pump(std::time::Duration::from_millis(16))?;
//!     slot.run_due();
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::DebounceSlot;
use crate::state::{InputModality, ModalityState};
use crate::surface::{EventKind, KeyboardEvent, StyleRule, Surface, SurfaceEvent};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Only keys listed here will change modality to keyboard.
pub const MODALITY_KEYS: &[&str] = &["Tab"];

/// How long a keydown stays "recent" with no further keydowns.
pub const RECENT_KEY_WINDOW: Duration = Duration::from_millis(100);

/// Fixed marker on the injected focus-ring-suppression rule.
pub const DISABLE_FOCUS_RING_STYLE_ID: &str = "disable-focus-ring";

/// Suppress the focus indicator for everything under a root that does not
/// carry the keyboard modality marker. Inserted as the first head child so
/// any later rule overrides it.
const DISABLE_FOCUS_RING_RULE: &str = "body:not([modality=keyboard]) :focus { outline: none; }";

// =============================================================================
// OPTIONS
// =============================================================================

/// Configuration for [`track_input_modality`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackOptions {
    /// Inject a rule suppressing the default focus indicator whenever the
    /// root is not marked with keyboard modality. Default: true.
    pub disable_focus_ring_by_default: bool,
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            disable_focus_ring_by_default: true,
        }
    }
}

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Start tracking input modality on `surface`, reporting into `state`.
///
/// Returns immediately without attaching anything if the surface is not
/// interactive (headless execution). Otherwise, observer attachment and the
/// optional rule injection are deferred until the surface signals ready.
///
/// `slot` holds the pending marker-expiry task; the embedder's event loop
/// should pump it with `run_due` (the focus observer also expires a stale
/// marker before reading it, so a slow pump cannot widen the window).
///
/// Not idempotent: calling this twice attaches a second set of observers
/// and may insert a duplicate suppression rule. Initialize once per
/// surface.
pub fn track_input_modality<S: Surface + 'static>(
    surface: Rc<S>,
    state: ModalityState,
    slot: Rc<DebounceSlot>,
    options: TrackOptions,
) {
    if !surface.is_interactive() {
        return;
    }

    let setup_surface = surface.clone();
    surface.on_ready(Box::new(move || {
        set_up_observers(&setup_surface, state, slot, options);
    }));
}

fn set_up_observers<S: Surface>(
    surface: &Rc<S>,
    state: ModalityState,
    slot: Rc<DebounceSlot>,
    options: TrackOptions,
) {
    if options.disable_focus_ring_by_default {
        surface.insert_head_child(StyleRule::new(
            DISABLE_FOCUS_RING_STYLE_ID,
            DISABLE_FOCUS_RING_RULE,
        ));
    }

    let recent_keyboard_event: Rc<RefCell<Option<KeyboardEvent>>> = Rc::new(RefCell::new(None));

    // keydown: remember the event, re-arm the expiry
    let recent = recent_keyboard_event.clone();
    let expiry_slot = slot.clone();
    surface.add_capturing_observer(
        EventKind::KeyDown,
        Box::new(move |event| {
            let SurfaceEvent::Key(key_event) = event else {
                return;
            };
            *recent.borrow_mut() = Some(key_event.clone());

            let recent = recent.clone();
            expiry_slot.schedule(
                RECENT_KEY_WINDOW,
                Box::new(move || {
                    *recent.borrow_mut() = None;
                }),
            );
        }),
    );

    // focus: keyboard modality iff a qualifying keydown is still recent
    let recent = recent_keyboard_event.clone();
    let focus_state = state.clone();
    surface.add_capturing_observer(
        EventKind::Focus,
        Box::new(move |_| {
            // A marker past its deadline must not count, even if the event
            // loop has not pumped the slot yet.
            slot.run_due();

            let qualifies = recent
                .borrow()
                .as_ref()
                .is_some_and(|event| MODALITY_KEYS.contains(&event.key.as_str()));
            if qualifies {
                focus_state.set_input_modality(Some(InputModality::Keyboard));
            }
        }),
    );

    // blur: unconditionally not-keyboard
    surface.add_capturing_observer(
        EventKind::Blur,
        Box::new(move |_| {
            state.set_input_modality(None);
        }),
    );
}

// =============================================================================
// TESTS
// =============================================================================
