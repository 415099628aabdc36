//! Dock entry information.
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;
use std::hash::Hash;

use super::{BBox, Size, WindowState, WindowType};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize
    + DeserializeOwned
    + Debug
    + Clone
    + Copy
    + PartialEq
    + Eq
    + Hash
    + Default
    + Send
    + 'static
{
}

/// A backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour
/// with the compiler, so as suggested by [this `serde` issue][serde-issue],
/// just adding `#[serde(bound = "")]` everywhere the generic is declared
/// fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// Taskbar eligibility from a window's EWMH properties: a normal window that
/// does not ask to be skipped.
#[must_use]
pub fn taskbar_visible(types: &[WindowType], states: &[WindowState]) -> bool {
    types.contains(&WindowType::Normal) && !states.contains(&WindowState::SkipTaskbar)
}

/// One tracked window: the unit the panel lays out and paints.
///
/// Entries are owned by [`crate::State`] for their whole lifetime; they are
/// created when a handle shows up in the window manager's client list and
/// torn down when it disappears from it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DockEntry<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub name: Option<String>,
    visible: bool,
    /// Position and size assigned by the last layout pass. Zero until the
    /// entry has been through one.
    pub geometry: BBox,
    /// Cap on the space this entry will accept from the layout.
    pub desired: Size,
}

impl<H: Handle> DockEntry<H> {
    #[must_use]
    pub fn new(handle: WindowHandle<H>, name: Option<String>, desired: Size) -> Self {
        Self {
            handle,
            name,
            visible: false,
            geometry: BBox::default(),
            desired,
        }
    }

    pub fn set_visible(&mut self, value: bool) {
        self.visible = value;
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Label shown on the strip. Entries whose name could not be resolved
    /// render an empty label rather than being dropped.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Whether the entry's laid-out strip covers the given x coordinate.
    #[must_use]
    pub fn contains_x(&self, x: i32) -> bool {
        x >= self.geometry.x && x < self.geometry.x + self.geometry.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_windows_are_visible() {
        assert!(taskbar_visible(&[WindowType::Normal], &[]));
    }

    #[test]
    fn skip_taskbar_hides_a_normal_window() {
        assert!(!taskbar_visible(
            &[WindowType::Normal],
            &[WindowState::SkipTaskbar]
        ));
    }

    #[test]
    fn non_normal_windows_are_hidden() {
        assert!(!taskbar_visible(&[WindowType::Dialog], &[]));
        assert!(!taskbar_visible(&[], &[]));
    }

    #[test]
    fn extra_states_do_not_affect_visibility() {
        assert!(taskbar_visible(
            &[WindowType::Normal],
            &[WindowState::Sticky, WindowState::Above]
        ));
    }

    #[test]
    fn hit_testing_uses_the_assigned_geometry() {
        let mut subject =
            DockEntry::new(WindowHandle::<MockHandle>(1), None, Size::new(256, 256));
        subject.geometry = BBox {
            x: 100,
            y: 0,
            width: 96,
            height: 30,
        };
        assert!(subject.contains_x(100));
        assert!(subject.contains_x(195));
        assert!(!subject.contains_x(196));
        assert!(!subject.contains_x(99));
    }
}
