use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_event::DisplayEvent;
use crate::errors::Result;
use crate::models::DockEntry;
use crate::models::Handle;
use crate::models::WindowHandle;
use crate::models::WindowState;
use crate::models::WindowType;
use std::future::Future;
use std::pin::Pin;

#[cfg(test)]
mod mock_display_server;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The window-manager-facing side of the panel.
///
/// Backends own the connection to the display, translate its events into
/// [`DisplayEvent`]s, answer the metadata queries reconciliation needs, and
/// paint whatever layout the core pushes at them.
pub trait DisplayServer<H: Handle> {
    fn new(config: &impl Config) -> Self;

    /// Drain whatever events the backend has pending.
    fn get_next_events(&mut self) -> Vec<DisplayEvent>;

    /// The window manager's current top-level client list. Order and
    /// duplicates are the window manager's business; callers treat the list
    /// as a set.
    fn managed_windows(&self) -> Vec<WindowHandle<H>>;

    /// Display name for a window. Errors when the handle went stale.
    fn window_name(&self, handle: WindowHandle<H>) -> Result<String>;

    /// The window's `_NET_WM_WINDOW_TYPE` atom list.
    fn window_types(&self, handle: WindowHandle<H>) -> Result<Vec<WindowType>>;

    /// The window's `_NET_WM_STATE` atom list.
    fn window_states(&self, handle: WindowHandle<H>) -> Result<Vec<WindowState>>;

    /// Push the laid-out visible entries to the screen. Called at most once
    /// per event-loop iteration.
    fn update_entries(&mut self, _entries: Vec<&DockEntry<H>>) {}

    fn execute_action(&mut self, _act: DisplayAction<H>) -> Option<DisplayEvent> {
        None
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);
}
