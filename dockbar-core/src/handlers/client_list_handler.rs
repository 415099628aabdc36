use std::collections::HashSet;

use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::{taskbar_visible, DockEntry, Handle, Manager, WindowHandle};
use crate::utils::helpers;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Reconcile the registry against the window manager's client list.
    ///
    /// The list is authoritative but unordered and may repeat handles, so it
    /// is treated as a set. Additions are processed before removals. Returns
    /// true when the registry changed, so the caller runs exactly one layout
    /// pass per reconcile no matter how many windows came or went.
    pub fn client_list_changed_handler(&mut self) -> bool {
        let external = self.display_server.managed_windows();

        let mut changed = false;
        for &handle in &external {
            match self.state.entries.iter().position(|e| e.handle == handle) {
                Some(index) => {
                    // An entry built from a stale handle (no name) retries
                    // its queries until the window answers or leaves the
                    // list.
                    if self.state.entries[index].name.is_none() {
                        let retry = self.build_entry(handle);
                        if retry.name.is_some() {
                            tracing::debug!("window {:?} answered on retry", handle);
                            let visible = retry.visible();
                            let entry = &mut self.state.entries[index];
                            entry.name = retry.name;
                            entry.set_visible(visible);
                            changed = true;
                        }
                    }
                }
                None => {
                    let entry = self.build_entry(handle);
                    tracing::debug!(
                        "now tracking window {:?} (visible: {})",
                        handle,
                        entry.visible()
                    );
                    self.state.entries.push(entry);
                    changed = true;
                }
            }
        }

        let external: HashSet<WindowHandle<H>> = external.into_iter().collect();
        let removed =
            helpers::vec_extract(&mut self.state.entries, |e| !external.contains(&e.handle));
        for entry in &removed {
            tracing::debug!("dropped window {:?}", entry.handle);
        }

        changed || !removed.is_empty()
    }

    /// Build an entry from the window manager's current properties.
    ///
    /// A handle that went stale between listing and querying yields an
    /// unnamed, invisible entry instead of aborting the pass; the next
    /// reconcile corrects or removes it.
    fn build_entry(&self, handle: WindowHandle<H>) -> DockEntry<H> {
        let name = match self.display_server.window_name(handle) {
            Ok(name) => Some(name),
            Err(err) => {
                tracing::debug!("no name for {:?}: {}", handle, err);
                None
            }
        };
        let mut entry = DockEntry::new(handle, name, self.state.entry_desired_size);
        let visible = match (
            self.display_server.window_types(handle),
            self.display_server.window_states(handle),
        ) {
            (Ok(types), Ok(states)) => taskbar_visible(&types, &states),
            (Err(err), _) | (_, Err(err)) => {
                tracing::debug!("no classification for {:?}: {}", handle, err);
                false
            }
        };
        entry.set_visible(visible);
        entry
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Manager, MockHandle, WindowHandle, WindowState, WindowType};

    fn handles(manager: &TestManager) -> Vec<WindowHandle<MockHandle>> {
        manager.state.entries.iter().map(|e| e.handle).collect()
    }

    type TestManager = Manager<
        MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<MockHandle>,
    >;

    #[test]
    fn new_handles_become_entries_in_discovery_order() {
        let mut manager = TestManager::new_test();
        manager
            .display_server
            .add_window(1, "editor", vec![WindowType::Normal], vec![]);
        manager
            .display_server
            .add_window(2, "terminal", vec![WindowType::Normal], vec![]);

        assert!(manager.client_list_changed_handler());
        assert_eq!(handles(&manager), vec![WindowHandle(1), WindowHandle(2)]);
    }

    #[test]
    fn reconciling_twice_changes_nothing_the_second_time() {
        let mut manager = TestManager::new_test();
        manager
            .display_server
            .add_window(1, "editor", vec![WindowType::Normal], vec![]);

        assert!(manager.client_list_changed_handler());
        assert!(!manager.client_list_changed_handler());
        assert_eq!(handles(&manager), vec![WindowHandle(1)]);
    }

    #[test]
    fn duplicate_handles_in_the_client_list_create_one_entry() {
        let mut manager = TestManager::new_test();
        manager
            .display_server
            .add_window(7, "browser", vec![WindowType::Normal], vec![]);
        manager
            .display_server
            .add_window(7, "browser again", vec![WindowType::Normal], vec![]);

        assert!(manager.client_list_changed_handler());
        assert_eq!(handles(&manager), vec![WindowHandle(7)]);
    }

    #[test]
    fn vanished_handles_are_dropped_even_several_at_once() {
        let mut manager = TestManager::new_test();
        for handle in 1..=3 {
            manager
                .display_server
                .add_window(handle, "win", vec![WindowType::Normal], vec![]);
        }
        manager.client_list_changed_handler();

        manager.display_server.remove_window(1);
        manager.display_server.remove_window(3);
        assert!(manager.client_list_changed_handler());
        assert_eq!(handles(&manager), vec![WindowHandle(2)]);
    }

    #[test]
    fn the_registry_mirrors_the_client_list_as_a_set() {
        let mut manager = TestManager::new_test();
        for handle in 1..=4 {
            manager
                .display_server
                .add_window(handle, "win", vec![WindowType::Normal], vec![]);
        }
        manager.client_list_changed_handler();

        manager.display_server.remove_window(2);
        manager
            .display_server
            .add_window(9, "late", vec![WindowType::Normal], vec![]);
        assert!(manager.client_list_changed_handler());
        assert_eq!(
            handles(&manager),
            vec![
                WindowHandle(1),
                WindowHandle(3),
                WindowHandle(4),
                WindowHandle(9)
            ]
        );
    }

    #[test]
    fn skip_taskbar_and_non_normal_windows_are_tracked_but_hidden() {
        let mut manager = TestManager::new_test();
        manager
            .display_server
            .add_window(1, "normal", vec![WindowType::Normal], vec![]);
        manager.display_server.add_window(
            2,
            "shy",
            vec![WindowType::Normal],
            vec![WindowState::SkipTaskbar],
        );
        manager
            .display_server
            .add_window(3, "popup", vec![WindowType::Dialog], vec![]);
        manager.client_list_changed_handler();

        let visible: Vec<_> = manager.state.visible_entries().map(|e| e.handle).collect();
        assert_eq!(visible, vec![WindowHandle(1)]);
        assert_eq!(manager.state.entries.len(), 3);
    }

    #[test]
    fn stale_handles_become_unnamed_invisible_entries() {
        let mut manager = TestManager::new_test();
        manager.display_server.add_stale_window(5);

        assert!(manager.client_list_changed_handler());
        let entry = &manager.state.entries[0];
        assert_eq!(entry.name, None);
        assert!(!entry.visible());

        // The window is gone from the list on the next pass.
        manager.display_server.remove_window(5);
        assert!(manager.client_list_changed_handler());
        assert!(manager.state.entries.is_empty());
    }

    #[test]
    fn stale_entries_are_corrected_once_the_window_answers() {
        let mut manager = TestManager::new_test();
        manager.display_server.add_stale_window(5);
        manager.client_list_changed_handler();

        manager.display_server.remove_window(5);
        manager
            .display_server
            .add_window(5, "late bloomer", vec![WindowType::Normal], vec![]);
        assert!(manager.client_list_changed_handler());

        let entry = &manager.state.entries[0];
        assert_eq!(entry.name.as_deref(), Some("late bloomer"));
        assert!(entry.visible());
        assert_eq!(manager.state.entries.len(), 1);
    }
}
