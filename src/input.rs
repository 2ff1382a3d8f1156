//! Normalized input events.
//!
//! Keyboard, mouse and touch all reduce to one of these before reaching a
//! session. Hit testing and coordinate conversion stay in the front-end.

/// All possible input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press from keyboard.
    Key(char),
    /// A click/tap on a registered target, identified by a semantic action ID.
    /// See [`crate::pizza::actions`] for the constants.
    Click(u16),
}
