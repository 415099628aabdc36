use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::{Handle, Manager};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Run the panel until the process is killed.
    ///
    /// One iteration drains a batch of display events, dispatches them, runs
    /// at most one layout pass no matter how many events asked for one,
    /// pushes the result to the display server, and then performs whatever
    /// actions the handlers queued.
    pub async fn start_event_loop(mut self) -> Result<()> {
        // Backends seed initial events (panel size, first reconcile); pick
        // those up before waiting on the socket.
        let mut event_buffer = self.display_server.get_next_events();
        loop {
            self.display_server.flush();

            let mut needs_update = false;
            tokio::select! {
                () = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                else => {
                    event_buffer
                        .drain(..)
                        .for_each(|event| needs_update = self.display_event_handler(event) || needs_update);
                }
            }

            if needs_update {
                self.state.update_layout();
                let entries = self.state.visible_entries().collect();
                self.display_server.update_entries(entries);
            }

            while let Some(act) = self.state.actions.pop_front() {
                if let Some(event) = self.display_server.execute_action(act) {
                    event_buffer.push(event);
                }
            }
        }
    }
}
