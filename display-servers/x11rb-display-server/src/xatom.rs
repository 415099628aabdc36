use dockbar_core::models::{WindowState, WindowType};
use x11rb::{atom_manager, protocol::xproto};

atom_manager! {
    /// A collection of Atoms.
    pub AtomCollection:

    /// A handle to a response from the X11 server.
    AtomCollectionCookie {
        NetActiveWindow: b"_NET_ACTIVE_WINDOW" as &[u8],
        NetClientList: b"_NET_CLIENT_LIST",
        NetWMName: b"_NET_WM_NAME",
        NetWMDesktop: b"_NET_WM_DESKTOP",
        NetWMStrutPartial: b"_NET_WM_STRUT_PARTIAL",

        NetWMState: b"_NET_WM_STATE",
        NetWMStateModal: b"_NET_WM_STATE_MODAL",
        NetWMStateSticky: b"_NET_WM_STATE_STICKY",
        NetWMStateMaximizedVert: b"_NET_WM_STATE_MAXIMIZED_VERT",
        NetWMStateMaximizedHorz: b"_NET_WM_STATE_MAXIMIZED_HORZ",
        NetWMStateShaded: b"_NET_WM_STATE_SHADED",
        NetWMStateSkipTaskbar: b"_NET_WM_STATE_SKIP_TASKBAR",
        NetWMStateSkipPager: b"_NET_WM_STATE_SKIP_PAGER",
        NetWMStateHidden: b"_NET_WM_STATE_HIDDEN",
        NetWMStateFullscreen: b"_NET_WM_STATE_FULLSCREEN",
        NetWMStateAbove: b"_NET_WM_STATE_ABOVE",
        NetWMStateBelow: b"_NET_WM_STATE_BELOW",

        NetWMWindowType: b"_NET_WM_WINDOW_TYPE",
        NetWMWindowTypeDesktop: b"_NET_WM_WINDOW_TYPE_DESKTOP",
        NetWMWindowTypeDock: b"_NET_WM_WINDOW_TYPE_DOCK",
        NetWMWindowTypeToolbar: b"_NET_WM_WINDOW_TYPE_TOOLBAR",
        NetWMWindowTypeMenu: b"_NET_WM_WINDOW_TYPE_MENU",
        NetWMWindowTypeUtility: b"_NET_WM_WINDOW_TYPE_UTILITY",
        NetWMWindowTypeSplash: b"_NET_WM_WINDOW_TYPE_SPLASH",
        NetWMWindowTypeDialog: b"_NET_WM_WINDOW_TYPE_DIALOG",
        NetWMWindowTypeNormal: b"_NET_WM_WINDOW_TYPE_NORMAL",

        UTF8String: b"UTF8_STRING",
    }
}

impl AtomCollection {
    /// Map a `_NET_WM_WINDOW_TYPE` atom array to the core taxonomy.
    /// Atoms we do not model are skipped.
    pub fn window_types(&self, atoms: &[xproto::Atom]) -> Vec<WindowType> {
        atoms
            .iter()
            .filter_map(|a| match a {
                x if x == &self.NetWMWindowTypeDesktop => Some(WindowType::Desktop),
                x if x == &self.NetWMWindowTypeDock => Some(WindowType::Dock),
                x if x == &self.NetWMWindowTypeToolbar => Some(WindowType::Toolbar),
                x if x == &self.NetWMWindowTypeMenu => Some(WindowType::Menu),
                x if x == &self.NetWMWindowTypeUtility => Some(WindowType::Utility),
                x if x == &self.NetWMWindowTypeSplash => Some(WindowType::Splash),
                x if x == &self.NetWMWindowTypeDialog => Some(WindowType::Dialog),
                x if x == &self.NetWMWindowTypeNormal => Some(WindowType::Normal),
                _ => None,
            })
            .collect()
    }

    /// Map a `_NET_WM_STATE` atom array to the core taxonomy.
    /// Atoms we do not model are skipped.
    pub fn window_states(&self, atoms: &[xproto::Atom]) -> Vec<WindowState> {
        atoms
            .iter()
            .filter_map(|a| match a {
                x if x == &self.NetWMStateModal => Some(WindowState::Modal),
                x if x == &self.NetWMStateSticky => Some(WindowState::Sticky),
                x if x == &self.NetWMStateMaximizedVert => Some(WindowState::MaximizedVert),
                x if x == &self.NetWMStateMaximizedHorz => Some(WindowState::MaximizedHorz),
                x if x == &self.NetWMStateShaded => Some(WindowState::Shaded),
                x if x == &self.NetWMStateSkipTaskbar => Some(WindowState::SkipTaskbar),
                x if x == &self.NetWMStateSkipPager => Some(WindowState::SkipPager),
                x if x == &self.NetWMStateHidden => Some(WindowState::Hidden),
                x if x == &self.NetWMStateFullscreen => Some(WindowState::Fullscreen),
                x if x == &self.NetWMStateAbove => Some(WindowState::Above),
                x if x == &self.NetWMStateBelow => Some(WindowState::Below),
                _ => None,
            })
            .collect()
    }
}
