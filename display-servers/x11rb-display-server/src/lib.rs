//! x11rb backend for dockbar

use std::future::Future;
use std::pin::Pin;

use dockbar_core::errors::Result as CoreResult;
use dockbar_core::models::{DockEntry, Handle, Size, WindowHandle, WindowState, WindowType};
use dockbar_core::{Config, DisplayAction, DisplayEvent, DisplayServer};
use serde::{Deserialize, Serialize};
use x11rb::protocol::xproto;

use crate::xwrap::XWrap;

mod draw;
mod error;
mod event_translate;
mod xatom;
mod xwrap;

/// Handle backed by an X11 window id.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct X11rbWindowHandle(pub xproto::Window);
impl Handle for X11rbWindowHandle {}

pub struct X11rbDisplayServer {
    xw: XWrap,
    initial_events: Vec<DisplayEvent>,
}

impl DisplayServer<X11rbWindowHandle> for X11rbDisplayServer {
    fn new(config: &impl Config) -> Self {
        let mut xwrap = XWrap::new();
        xwrap.init(config).expect("XWrap initialisation failed.");

        // Seed the panel's real size, then reconcile as if the client list
        // had just changed.
        let (width, height) = xwrap.panel_size;
        Self {
            xw: xwrap,
            initial_events: vec![
                DisplayEvent::PanelResized(Size::new(i32::from(width), i32::from(height))),
                DisplayEvent::ClientListChanged,
            ],
        }
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        let mut events = std::mem::take(&mut self.initial_events);

        loop {
            match self.xw.poll_next_event() {
                Ok(Some(ev)) => {
                    if let Some(ev) = event_translate::translate(&ev, &mut self.xw) {
                        events.push(ev);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = ?e, "An error occurred when polling for events.");
                    break;
                }
            }
        }

        events
    }

    fn managed_windows(&self) -> Vec<WindowHandle<X11rbWindowHandle>> {
        match self.xw.get_client_list() {
            Ok(list) => list
                .into_iter()
                .map(|w| WindowHandle(X11rbWindowHandle(w)))
                .collect(),
            Err(e) => {
                tracing::error!(error = ?e, "Error when reading the client list.");
                Vec::new()
            }
        }
    }

    fn window_name(&self, handle: WindowHandle<X11rbWindowHandle>) -> CoreResult<String> {
        Ok(self.xw.get_window_name(handle.0 .0)?)
    }

    fn window_types(&self, handle: WindowHandle<X11rbWindowHandle>) -> CoreResult<Vec<WindowType>> {
        Ok(self.xw.get_window_types(handle.0 .0)?)
    }

    fn window_states(
        &self,
        handle: WindowHandle<X11rbWindowHandle>,
    ) -> CoreResult<Vec<WindowState>> {
        Ok(self.xw.get_window_states(handle.0 .0)?)
    }

    fn update_entries(&mut self, entries: Vec<&DockEntry<X11rbWindowHandle>>) {
        if let Err(e) = self.xw.draw_entries(&entries) {
            tracing::error!(error = ?e, "Error when painting the panel.");
        }
    }

    fn execute_action(&mut self, act: DisplayAction<X11rbWindowHandle>) -> Option<DisplayEvent> {
        tracing::trace!("DisplayAction: {:?}", act);
        let result = match act {
            DisplayAction::ActivateWindow(h) => self.xw.activate_window(h.0 .0),
        };
        if let Err(e) = result {
            tracing::error!(error = ?e, "Error when processing a display action.");
        }
        None
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        let task_notify = self.xw.task_notify.clone();
        Box::pin(async move {
            task_notify.notified().await;
        })
    }

    fn flush(&self) {
        if let Err(e) = self.xw.flush() {
            tracing::error!(error = ?e, "Error when flushing the connection.");
        }
    }
}
