use super::Config;
use super::DisplayEvent;
use super::DisplayServer;
use crate::errors::{DockError, Result};
use crate::models::Handle;
use crate::models::WindowHandle;
use crate::models::WindowState;
use crate::models::WindowType;

/// Scripted stand-in for a real backend; tests drive the client list by hand.
#[derive(Clone)]
pub struct MockDisplayServer<H: Handle> {
    pub windows: Vec<MockWindow<H>>,
}

#[derive(Clone)]
pub struct MockWindow<H: Handle> {
    pub handle: WindowHandle<H>,
    pub name: String,
    pub types: Vec<WindowType>,
    pub states: Vec<WindowState>,
    /// Pretend the window vanished between listing and querying.
    pub stale: bool,
}

impl<H: Handle> MockDisplayServer<H> {
    pub fn add_window(
        &mut self,
        handle: H,
        name: &str,
        types: Vec<WindowType>,
        states: Vec<WindowState>,
    ) {
        self.windows.push(MockWindow {
            handle: WindowHandle(handle),
            name: name.to_string(),
            types,
            states,
            stale: false,
        });
    }

    /// A handle that shows up in the client list but answers no queries.
    pub fn add_stale_window(&mut self, handle: H) {
        self.windows.push(MockWindow {
            handle: WindowHandle(handle),
            name: String::new(),
            types: vec![],
            states: vec![],
            stale: true,
        });
    }

    pub fn remove_window(&mut self, handle: H) {
        self.windows.retain(|w| w.handle != WindowHandle(handle));
    }

    fn find(&self, handle: WindowHandle<H>) -> Result<&MockWindow<H>> {
        self.windows
            .iter()
            .find(|w| w.handle == handle && !w.stale)
            .ok_or_else(|| DockError::StaleWindow(format!("{handle:?}")))
    }
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Self {
        Self { windows: vec![] }
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        vec![]
    }

    fn managed_windows(&self) -> Vec<WindowHandle<H>> {
        self.windows.iter().map(|w| w.handle).collect()
    }

    fn window_name(&self, handle: WindowHandle<H>) -> Result<String> {
        Ok(self.find(handle)?.name.clone())
    }

    fn window_types(&self, handle: WindowHandle<H>) -> Result<Vec<WindowType>> {
        Ok(self.find(handle)?.types.clone())
    }

    fn window_states(&self, handle: WindowHandle<H>) -> Result<Vec<WindowState>> {
        Ok(self.find(handle)?.states.clone())
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        unimplemented!()
    }

    fn flush(&self) {}
}
