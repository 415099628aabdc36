use crate::config::Config;
use crate::display_event::DisplayEvent;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Process one display event.
    /// Returns true if the layout needs to be recomputed and repainted.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        match event {
            DisplayEvent::ClientListChanged => self.client_list_changed_handler(),
            DisplayEvent::PanelResized(size) => self.panel_resized_handler(size),
            DisplayEvent::PanelExposed => self.panel_exposed_handler(),
            DisplayEvent::MouseClick(x, y) => self.mouse_click_handler(x, y),
        }
    }
}
