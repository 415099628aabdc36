use crate::models::Size;

/// Notifications from the display server. The panel core reacts to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// The window manager's client list changed; reconcile the registry.
    ClientListChanged,
    /// The host resized the panel; relayout without reconciling.
    PanelResized(Size),
    /// The panel needs a repaint from current state.
    PanelExposed,
    /// Left button press at panel-relative coordinates.
    MouseClick(i32, i32),
}
