use crate::models::Handle;
use crate::models::WindowHandle;
use serde::{Deserialize, Serialize};

/// These are responses from the panel core.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum DisplayAction<H: Handle> {
    /// Ask the window manager to raise and focus this window.
    #[serde(bound = "")]
    ActivateWindow(WindowHandle<H>),
}
