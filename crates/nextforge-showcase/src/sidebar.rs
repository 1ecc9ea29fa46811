#![forbid(unsafe_code)]

//! Mobile drawer state for the category and component sidebars.
//!
//! On desktop widths both sidebars are always visible and the drawer flags
//! are cleared. Below the breakpoint each sidebar is a drawer; while either
//! is open the page behind it must not scroll.

/// Viewport width (px) at and above which the layout is "desktop".
pub const DESKTOP_BREAKPOINT: u32 = 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    left_open: bool,
    right_open: bool,
    is_desktop: bool,
}

impl SidebarState {
    pub fn new(viewport_width: u32) -> Self {
        let mut state = Self::default();
        state.on_resize(viewport_width);
        state
    }

    /// Re-evaluate the layout after a viewport change.
    pub fn on_resize(&mut self, viewport_width: u32) {
        self.is_desktop = viewport_width >= DESKTOP_BREAKPOINT;
        if self.is_desktop {
            self.close_all();
        }
    }

    pub fn open_left(&mut self) {
        self.left_open = true;
    }

    pub fn open_right(&mut self) {
        self.right_open = true;
    }

    pub fn close_left(&mut self) {
        self.left_open = false;
    }

    pub fn close_right(&mut self) {
        self.right_open = false;
    }

    /// Backdrop click: dismiss both drawers.
    pub fn close_all(&mut self) {
        self.left_open = false;
        self.right_open = false;
    }

    pub fn left_open(&self) -> bool {
        self.left_open
    }

    pub fn right_open(&self) -> bool {
        self.right_open
    }

    pub fn is_desktop(&self) -> bool {
        self.is_desktop
    }

    /// Whether the backdrop overlay is shown.
    pub fn overlay_visible(&self) -> bool {
        self.left_open || self.right_open
    }

    /// Body scroll lock: only on mobile with a drawer open.
    pub fn scroll_locked(&self) -> bool {
        !self.is_desktop && self.overlay_visible()
    }
}
