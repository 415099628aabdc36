use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Handle;
use crate::state::State;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    pub fn new(config: C) -> Self {
        let display_server = SERVER::new(&config);

        Self {
            state: State::new(&config),
            config,
            display_server,
        }
    }
}

#[cfg(test)]
impl<H: Handle>
    Manager<H, crate::config::TestConfig, crate::display_servers::MockDisplayServer<H>>
{
    pub fn new_test() -> Self {
        Self::new(crate::config::TestConfig::default())
    }
}
