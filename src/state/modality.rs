//! Modality State - Shared "last input channel" flag
//!
//! Holds the one piece of shared state this crate exists to maintain:
//! whether the most recent deliberate focus movement came from the keyboard.
//! Consumers read it to decide whether focus indicators should be visible.
//!
//! The flag lives in a [`ModalityState`] handle rather than a module-level
//! singleton. Handles are cheap to clone and every clone shares the same
//! underlying signal, so the tracker and any number of consumers can hold
//! their own copy.
//!
//! # Example
//!
//! ```ignore
//! use input_modality::ModalityState;
//!
//! let state = ModalityState::new();
//! let for_renderer = state.clone();
//!
//! // ... tracker mutates `state` on focus/blur ...
//!
//! if for_renderer.is_keyboard() {
//!     // draw the focus ring
//! }
//! ```

use spark_signals::{Signal, signal};

// =============================================================================
// TYPES
// =============================================================================

/// The inferred input channel behind the most recent focus movement.
///
/// Only keyboard is ever inferred positively; everything else (mouse, touch,
/// pointer) is represented as the absence of a modality (`None` in the flag).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputModality {
    Keyboard,
}

// =============================================================================
// STATE HANDLE
// =============================================================================

/// Shared handle to the current input modality flag.
///
/// Clones share state: a flag update through one handle is visible through
/// all of them. Single-threaded by design (the signal is not `Send`), same
/// as the rest of the event dispatch it participates in.
#[derive(Clone)]
pub struct ModalityState {
    input_modality: Signal<Option<InputModality>>,
}

impl ModalityState {
    /// Create a fresh state handle. The flag starts unset (not-keyboard).
    pub fn new() -> Self {
        Self {
            input_modality: signal(None),
        }
    }

    /// Get the current modality flag.
    pub fn input_modality(&self) -> Option<InputModality> {
        self.input_modality.get()
    }

    /// Set the modality flag. `None` means not-keyboard.
    pub fn set_input_modality(&self, modality: Option<InputModality>) {
        self.input_modality.set(modality);
    }

    /// Check whether the current modality is keyboard.
    pub fn is_keyboard(&self) -> bool {
        self.input_modality.get() == Some(InputModality::Keyboard)
    }

    /// Get the underlying signal for reactive tracking (effects, deriveds).
    pub fn signal(&self) -> Signal<Option<InputModality>> {
        self.input_modality.clone()
    }
}

impl Default for ModalityState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ModalityState::new();
        assert_eq!(state.input_modality(), None);
        assert!(!state.is_keyboard());
    }

    #[test]
    fn test_set_and_get() {
        let state = ModalityState::new();

        state.set_input_modality(Some(InputModality::Keyboard));
        assert_eq!(state.input_modality(), Some(InputModality::Keyboard));
        assert!(state.is_keyboard());

        state.set_input_modality(None);
        assert_eq!(state.input_modality(), None);
        assert!(!state.is_keyboard());
    }

    #[test]
    fn test_clones_share_state() {
        let state = ModalityState::new();
        let other = state.clone();

        state.set_input_modality(Some(InputModality::Keyboard));
        assert!(other.is_keyboard());

        other.set_input_modality(None);
        assert!(!state.is_keyboard());
    }

    #[test]
    fn test_signal_accessor_shares_state() {
        let state = ModalityState::new();
        let sig = state.signal();

        state.set_input_modality(Some(InputModality::Keyboard));
        assert_eq!(sig.get(), Some(InputModality::Keyboard));
    }
}
