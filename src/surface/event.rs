//! Surface event types
//!
//! The events a surface delivers to capturing observers, and the style rule
//! artifact the tracker may inject into the surface head.

// =============================================================================
// MODIFIERS
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with alt
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

// =============================================================================
// KEYBOARD EVENT
// =============================================================================

/// A key-down event as delivered to keydown observers.
///
/// Key identifiers follow DOM-style names ("Tab", "Enter", "ArrowUp",
/// single characters), which is what the allowed-key list is checked
/// against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "Tab")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

// =============================================================================
// SURFACE EVENTS
// =============================================================================

/// The event channels a capturing observer can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    Focus,
    Blur,
}

/// An event dispatched by a surface to its observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A key went down
    Key(KeyboardEvent),
    /// The root gained focus
    Focus,
    /// The root lost focus
    Blur,
}

impl SurfaceEvent {
    /// The channel this event is delivered on.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Key(_) => EventKind::KeyDown,
            Self::Focus => EventKind::Focus,
            Self::Blur => EventKind::Blur,
        }
    }
}

// =============================================================================
// STYLE RULE
// =============================================================================

/// A styling directive inserted into the surface head.
///
/// The surface stores rules for its consumers to interpret; the id is a
/// fixed marker so a consumer (or a repeated initializer) can recognize a
/// rule it has seen before.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    /// Fixed identifying marker
    pub id: String,
    /// Rule text, in the selector syntax of the host surface
    pub content: String,
}

impl StyleRule {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind() {
        assert_eq!(
            SurfaceEvent::Key(KeyboardEvent::new("a")).kind(),
            EventKind::KeyDown
        );
        assert_eq!(SurfaceEvent::Focus.kind(), EventKind::Focus);
        assert_eq!(SurfaceEvent::Blur.kind(), EventKind::Blur);
    }

    #[test]
    fn test_modifiers_constructors() {
        assert_eq!(Modifiers::none(), Modifiers::default());
        assert!(Modifiers::ctrl().ctrl);
        assert!(Modifiers::shift().shift);
        assert!(!Modifiers::shift().ctrl);
    }

    #[test]
    fn test_keyboard_event_with_modifiers() {
        let event = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
        assert_eq!(event.key, "Tab");
        assert!(event.modifiers.shift);
    }
}
