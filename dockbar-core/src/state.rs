//! Panel state: the entry registry and its layout.

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::layouts;
use crate::models::DockEntry;
use crate::models::Handle;
use crate::models::Size;
use std::collections::VecDeque;

/// Owns every tracked window for its whole lifetime.
///
/// Entries stay in discovery order; the order carries no meaning beyond
/// keeping the layout stable across reconciles.
#[derive(Debug)]
pub struct State<H: Handle> {
    pub entries: Vec<DockEntry<H>>,
    /// Current panel dimensions, updated by resize events.
    pub panel: Size,
    pub entry_gutter: i32,
    pub entry_desired_size: Size,
    pub actions: VecDeque<DisplayAction<H>>,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            entries: Default::default(),
            panel: Size::new(0, config.panel_height()),
            entry_gutter: config.entry_gutter(),
            entry_desired_size: config.entry_desired_size(),
            actions: Default::default(),
        }
    }

    /// The subset of entries eligible for layout, in discovery order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &DockEntry<H>> {
        self.entries.iter().filter(|e| e.visible())
    }

    /// Recompute every visible entry's geometry for the current panel size.
    pub fn update_layout(&mut self) {
        let panel = self.panel;
        let gutter = self.entry_gutter;
        let mut visible: Vec<&mut DockEntry<H>> =
            self.entries.iter_mut().filter(|e| e.visible()).collect();
        layouts::update(panel, gutter, &mut visible);
    }

    /// The visible entry whose strip covers the given panel x coordinate.
    pub fn entry_at(&self, x: i32) -> Option<&DockEntry<H>> {
        self.visible_entries().find(|e| e.contains_x(x))
    }

    /// The panel always asks its host for all available space.
    #[must_use]
    pub const fn desired_panel_size() -> Size {
        Size::fill()
    }
}
