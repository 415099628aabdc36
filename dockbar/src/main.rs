//! Starts the dockbar panel.

use anyhow::Result;
use clap::Parser;
use dockbar_core::Manager;
use x11rb_display_server::{X11rbDisplayServer, X11rbWindowHandle};

mod config;
mod logging;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct DockbarCli {
    /// Path to an alternate configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Log level used when RUST_LOG is not set.
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = DockbarCli::parse();

    logging::setup_logging(cli.log_level.as_deref());
    tracing::info!("dockbar booting...");

    // The backend spawns its socket watcher on the runtime, so enter it
    // before constructing the manager.
    let rt = tokio::runtime::Runtime::new()?;
    let _rt_guard = rt.enter();

    let config = config::load(cli.config.as_deref());

    let manager = Manager::<X11rbWindowHandle, config::Config, X11rbDisplayServer>::new(config);
    rt.block_on(manager.start_event_loop())?;

    tracing::info!("Completed");
    Ok(())
}
