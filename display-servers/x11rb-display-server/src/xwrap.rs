//! Thin wrapper around the x11rb connection: the panel window, EWMH
//! property reads, and the readable-socket notification used by the event
//! loop.

use std::os::unix::io::AsRawFd;
use std::sync::Arc;
use std::time::Duration;

use ab_glyph::FontVec;
use dockbar_core::models::{WindowState, WindowType};
use dockbar_core::{Config, State};
use tokio::sync::{oneshot, Notify};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{self, EventMask};
use x11rb::protocol::Event;
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use crate::error::Result;
use crate::xatom::AtomCollection;

pub(crate) const MAX_PROPERTY_VALUE_LEN: u32 = 4096;

#[derive(Clone, Copy, Default)]
pub(crate) struct Colors {
    pub background: u32,
    pub text: u32,
    pub highlight: u32,
}

/// Contains Xserver information and origins.
pub(crate) struct XWrap {
    pub(crate) conn: RustConnection,
    pub(crate) root: xproto::Window,
    pub(crate) depth: u8,
    pub(crate) atoms: AtomCollection,
    pub(crate) panel: xproto::Window,
    pub(crate) pixmap: xproto::Pixmap,
    pub(crate) gc: xproto::Gcontext,
    pub(crate) panel_size: (u16, u16),
    pub(crate) colors: Colors,
    pub(crate) font: Option<FontVec>,
    pub(crate) font_size: f32,
    pub(crate) render_buf: Vec<u8>,
    screen: xproto::Screen,
    _task_guard: oneshot::Receiver<()>,
    pub(crate) task_notify: Arc<Notify>,
}

impl XWrap {
    /// # Panics
    ///
    /// Panics if unable to contact the X server.
    #[must_use]
    pub fn new() -> Self {
        const SERVER: mio::Token = mio::Token(0);
        let (conn, screen_num) =
            RustConnection::connect(None).expect("Couldn't not connect to X server");
        let fd = conn.stream().as_raw_fd();

        let (guard, _task_guard) = oneshot::channel();
        let notify = Arc::new(Notify::new());
        let task_notify = notify.clone();

        let mut poll = mio::Poll::new().expect("Unable to boot Mio");
        let mut events = mio::Events::with_capacity(1);
        poll.registry()
            .register(
                &mut mio::unix::SourceFd(&fd),
                SERVER,
                mio::Interest::READABLE,
            )
            .expect("Unable to boot Mio");
        let timeout = Duration::from_millis(100);
        tokio::task::spawn_blocking(move || loop {
            if guard.is_closed() {
                return;
            }

            if let Err(err) = poll.poll(&mut events, Some(timeout)) {
                tracing::warn!("X socket poll failed with {:?}", err);
                continue;
            }

            events
                .iter()
                .filter(|event| SERVER == event.token())
                .for_each(|_| notify.notify_one());
        });

        let atoms = AtomCollection::new(&conn)
            .expect("Unable to intern atoms")
            .reply()
            .expect("Unable to intern atoms");
        let screen = conn.setup().roots[screen_num].clone();
        let root = screen.root;
        let depth = screen.root_depth;

        Self {
            conn,
            root,
            depth,
            atoms,
            panel: x11rb::NONE,
            pixmap: x11rb::NONE,
            gc: x11rb::NONE,
            panel_size: (0, 0),
            colors: Colors::default(),
            font: None,
            font_size: 13.0,
            render_buf: Vec::new(),
            screen,
            _task_guard,
            task_notify,
        }
    }

    /// Create and map the panel window along the bottom screen edge, and
    /// subscribe to the root window's property changes so client-list
    /// updates reach us.
    pub fn init(&mut self, config: &impl Config) -> Result<()> {
        self.colors = Colors {
            background: config.background_color(),
            text: config.text_color(),
            highlight: config.highlight_color(),
        };
        self.font_size = config.font_size();
        self.font = config.font_path().and_then(|path| {
            let data = match std::fs::read(&path) {
                Ok(data) => data,
                Err(err) => {
                    tracing::error!("Unable to read font {}: {}", path.display(), err);
                    return None;
                }
            };
            match FontVec::try_from_vec(data) {
                Ok(font) => Some(font),
                Err(err) => {
                    tracing::error!("Unable to parse font {}: {}", path.display(), err);
                    None
                }
            }
        });
        if self.font.is_none() {
            tracing::warn!("No usable label font, strips will render without text");
        }

        // The dock asks for all available space; the fill sentinel means the
        // whole screen edge at the configured height.
        let desired = State::<crate::X11rbWindowHandle>::desired_panel_size();
        let width = if desired.w < 0 {
            self.screen.width_in_pixels
        } else {
            desired.w as u16
        };
        let height = config.panel_height().max(1) as u16;
        let y = self.screen.height_in_pixels.saturating_sub(height) as i16;

        self.panel = self.conn.generate_id()?;
        self.gc = self.conn.generate_id()?;
        self.pixmap = self.conn.generate_id()?;
        self.panel_size = (width, height);

        let values = xproto::CreateWindowAux::new()
            .background_pixel(self.colors.background)
            .event_mask(EventMask::EXPOSURE | EventMask::BUTTON_PRESS | EventMask::STRUCTURE_NOTIFY);
        xproto::create_window(
            &self.conn,
            self.depth,
            self.panel,
            self.root,
            0,
            y,
            width,
            height,
            0,
            xproto::WindowClass::INPUT_OUTPUT,
            self.screen.root_visual,
            &values,
        )?;

        self.conn.change_property8(
            xproto::PropMode::REPLACE,
            self.panel,
            xproto::AtomEnum::WM_NAME,
            xproto::AtomEnum::STRING,
            b"dockbar",
        )?;
        self.conn.change_property32(
            xproto::PropMode::REPLACE,
            self.panel,
            self.atoms.NetWMWindowType,
            xproto::AtomEnum::ATOM,
            &[self.atoms.NetWMWindowTypeDock],
        )?;
        // Visible on every desktop.
        self.conn.change_property32(
            xproto::PropMode::REPLACE,
            self.panel,
            self.atoms.NetWMDesktop,
            xproto::AtomEnum::CARDINAL,
            &[0xFFFF_FFFF],
        )?;
        // Reserve our strip along the bottom edge.
        let strut = [0, 0, 0, u32::from(height), 0, 0, 0, 0, 0, 0, 0, u32::from(width)];
        self.conn.change_property32(
            xproto::PropMode::REPLACE,
            self.panel,
            self.atoms.NetWMStrutPartial,
            xproto::AtomEnum::CARDINAL,
            &strut,
        )?;

        xproto::create_pixmap(&self.conn, self.depth, self.pixmap, self.panel, width, height)?;
        xproto::create_gc(
            &self.conn,
            self.gc,
            self.panel,
            &xproto::CreateGCAux::new()
                .foreground(self.colors.text)
                .background(self.colors.background),
        )?;

        // Client-list changes arrive as property notifies on the root.
        xproto::change_window_attributes(
            &self.conn,
            self.root,
            &xproto::ChangeWindowAttributesAux::new().event_mask(EventMask::PROPERTY_CHANGE),
        )?;

        xproto::map_window(&self.conn, self.panel)?;
        self.conn.flush()?;
        Ok(())
    }

    /// Returns the root window's `_NET_CLIENT_LIST`.
    pub fn get_client_list(&self) -> Result<Vec<xproto::Window>> {
        let reply = xproto::get_property(
            &self.conn,
            false,
            self.root,
            self.atoms.NetClientList,
            xproto::AtomEnum::WINDOW,
            0,
            MAX_PROPERTY_VALUE_LEN / 4,
        )?
        .reply()?;

        Ok(reply.value32().map(|v| v.collect()).unwrap_or_default())
    }

    /// Returns a windows name.
    pub fn get_window_name(&self, window: xproto::Window) -> Result<String> {
        if let Ok(text) = self.get_text_prop(window, self.atoms.NetWMName) {
            if !text.is_empty() {
                return Ok(text);
            }
        }
        // fallback to legacy name
        self.get_window_legacy_name(window)
    }

    /// Returns a `WM_NAME` (not `_NET`windows name).
    pub fn get_window_legacy_name(&self, window: xproto::Window) -> Result<String> {
        self.get_text_prop(window, xproto::AtomEnum::WM_NAME.into())
    }

    /// Returns the `_NET_WM_WINDOW_TYPE` array of a window, mapped to the
    /// core taxonomy. The whole array matters, not just the first atom.
    pub fn get_window_types(&self, window: xproto::Window) -> Result<Vec<WindowType>> {
        let atoms = self.get_atom_array(window, self.atoms.NetWMWindowType)?;
        Ok(self.atoms.window_types(&atoms))
    }

    /// Returns the `_NET_WM_STATE` array of a window, mapped to the core
    /// taxonomy.
    pub fn get_window_states(&self, window: xproto::Window) -> Result<Vec<WindowState>> {
        let atoms = self.get_atom_array(window, self.atoms.NetWMState)?;
        Ok(self.atoms.window_states(&atoms))
    }

    /// Ask the window manager to raise and focus a window. Source
    /// indication 2 identifies us as a pager/taskbar per EWMH.
    pub fn activate_window(&self, window: xproto::Window) -> Result<()> {
        let event = xproto::ClientMessageEvent::new(
            32,
            window,
            self.atoms.NetActiveWindow,
            [2, x11rb::CURRENT_TIME, 0, 0, 0],
        );
        xproto::send_event(
            &self.conn,
            false,
            self.root,
            EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
            event,
        )?;
        self.conn.flush()?;
        Ok(())
    }

    /// Re-create the back buffer for a new panel size.
    pub fn resize_panel(&mut self, width: u16, height: u16) -> Result<()> {
        if (width, height) == self.panel_size {
            return Ok(());
        }
        self.panel_size = (width, height);
        xproto::free_pixmap(&self.conn, self.pixmap)?;
        self.pixmap = self.conn.generate_id()?;
        xproto::create_pixmap(&self.conn, self.depth, self.pixmap, self.panel, width, height)?;
        Ok(())
    }

    /// Returns the next `Event` of the xserver, if any.
    pub fn poll_next_event(&self) -> Result<Option<Event>> {
        Ok(self.conn.poll_for_event()?)
    }

    /// Flush the xserver.
    pub fn flush(&self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }

    fn get_text_prop(&self, window: xproto::Window, atom: xproto::Atom) -> Result<String> {
        let reply = xproto::get_property(
            &self.conn,
            false,
            window,
            atom,
            xproto::AtomEnum::ANY,
            0,
            MAX_PROPERTY_VALUE_LEN / 4,
        )?
        .reply()?;

        Ok(String::from_utf8(reply.value)?)
    }

    fn get_atom_array(
        &self,
        window: xproto::Window,
        atom: xproto::Atom,
    ) -> Result<Vec<xproto::Atom>> {
        let reply = xproto::get_property(
            &self.conn,
            false,
            window,
            atom,
            xproto::AtomEnum::ATOM,
            0,
            MAX_PROPERTY_VALUE_LEN / 4,
        )?
        .reply()?;

        Ok(reply.value32().map(|v| v.collect()).unwrap_or_default())
    }
}
