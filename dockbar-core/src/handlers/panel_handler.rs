use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager, Size};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// The host resized the panel: relayout, no reconciliation.
    pub fn panel_resized_handler(&mut self, size: Size) -> bool {
        if self.state.panel == size {
            return false;
        }
        self.state.panel = size;
        true
    }

    /// The panel needs repainting. The layout is deterministic, so
    /// recomputing it on the way to the repaint is harmless.
    pub fn panel_exposed_handler(&mut self) -> bool {
        true
    }

    /// A click on the panel activates the window whose strip was hit.
    /// Clicks in the gutter between strips fall through.
    pub fn mouse_click_handler(&mut self, x: i32, _y: i32) -> bool {
        if let Some(handle) = self.state.entry_at(x).map(|e| e.handle) {
            let act = DisplayAction::ActivateWindow(handle);
            self.state.actions.push_back(act);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::display_action::DisplayAction;
    use crate::models::{Manager, MockHandle, Size, WindowHandle, WindowType};

    type TestManager = Manager<
        MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<MockHandle>,
    >;

    fn manager_with_windows(count: i32) -> TestManager {
        let mut manager = TestManager::new_test();
        for handle in 0..count {
            manager
                .display_server
                .add_window(handle, "win", vec![WindowType::Normal], vec![]);
        }
        manager.client_list_changed_handler();
        manager
    }

    #[test]
    fn resizing_to_the_same_size_needs_no_layout() {
        let mut manager = TestManager::new_test();
        assert!(manager.panel_resized_handler(Size::new(300, 30)));
        assert!(!manager.panel_resized_handler(Size::new(300, 30)));
        assert!(manager.panel_resized_handler(Size::new(400, 30)));
    }

    #[test]
    fn clicks_resolve_to_the_strip_under_the_cursor() {
        let mut manager = manager_with_windows(3);
        manager.panel_resized_handler(Size::new(300, 30));
        manager.state.update_layout();

        manager.mouse_click_handler(150, 10);
        let DisplayAction::ActivateWindow(handle) =
            manager.state.actions.pop_front().expect("queued action");
        assert_eq!(handle, WindowHandle(1));
    }

    #[test]
    fn clicks_in_the_gutter_fall_through() {
        let mut manager = manager_with_windows(3);
        manager.panel_resized_handler(Size::new(300, 30));
        manager.state.update_layout();

        // Strips are 96 wide on a 100 pixel pitch; x=98 lands in the gutter.
        manager.mouse_click_handler(98, 10);
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn clicks_on_an_empty_panel_do_nothing() {
        let mut manager = TestManager::new_test();
        manager.panel_resized_handler(Size::new(300, 30));
        manager.state.update_layout();
        manager.mouse_click_handler(10, 10);
        assert!(manager.state.actions.is_empty());
    }
}
