use dockbar_core::models::Size;
use dockbar_core::DisplayEvent;
use x11rb::protocol::{xproto, Event};

use crate::xwrap::XWrap;

/// Translate an X event into a panel event, if it concerns us.
pub(crate) fn translate(event: &Event, xw: &mut XWrap) -> Option<DisplayEvent> {
    match event {
        Event::PropertyNotify(ev) => from_property_notify(ev, xw),
        Event::ConfigureNotify(ev) => from_configure_notify(ev, xw),
        Event::Expose(ev) if ev.window == xw.panel && ev.count == 0 => {
            Some(DisplayEvent::PanelExposed)
        }
        Event::ButtonPress(ev) if ev.event == xw.panel && ev.detail == 1 => Some(
            DisplayEvent::MouseClick(ev.event_x.into(), ev.event_y.into()),
        ),
        _ => None,
    }
}

fn from_property_notify(ev: &xproto::PropertyNotifyEvent, xw: &XWrap) -> Option<DisplayEvent> {
    // Only the root window's client list matters here. Per-window property
    // changes (name, state) are not re-synced after an entry is created.
    if ev.window == xw.root && ev.atom == xw.atoms.NetClientList {
        return Some(DisplayEvent::ClientListChanged);
    }
    None
}

fn from_configure_notify(ev: &xproto::ConfigureNotifyEvent, xw: &mut XWrap) -> Option<DisplayEvent> {
    if ev.window != xw.panel {
        return None;
    }
    if let Err(err) = xw.resize_panel(ev.width, ev.height) {
        tracing::error!(error = ?err, "Error when resizing the panel back buffer.");
    }
    Some(DisplayEvent::PanelResized(Size::new(
        ev.width.into(),
        ev.height.into(),
    )))
}
