//! The EWMH window taxonomies the panel classifies against.
//!
//! Specifications can be found here:
//! <https://specifications.freedesktop.org/wm-spec/1.3/ar01s05.html>

use serde::{Deserialize, Serialize};

/// `_NET_WM_WINDOW_TYPE` values.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    Normal,
}

/// `_NET_WM_STATE` values.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowState {
    Modal,
    Sticky,
    MaximizedVert,
    MaximizedHorz,
    Shaded,
    SkipTaskbar,
    SkipPager,
    Hidden,
    Fullscreen,
    Above,
    Below,
}
