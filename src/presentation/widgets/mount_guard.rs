use std::cell::OnceCell;

/// Reports whether the host can display a widget yet. Pre-rendering hosts
/// answer false until the page becomes interactive.
pub trait RenderHost {
    fn has_render_surface(&self) -> bool;
}

/// Delays building a widget until the host has a surface to draw on.
///
/// Renders nothing before that. Once mounted the widget stays mounted.
pub struct MountGuard<W> {
    widget: OnceCell<W>,
}

impl<W> MountGuard<W> {
    pub fn new() -> Self {
        Self {
            widget: OnceCell::new(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.widget.get().is_some()
    }

    /// Builds the widget on first call; later calls return the same one.
    pub fn mount<F>(&self, init: F) -> &W
    where
        F: FnOnce() -> W,
    {
        self.widget.get_or_init(init)
    }

    pub fn mount_on<H, F>(&self, host: &H, init: F) -> Option<&W>
    where
        H: RenderHost + ?Sized,
        F: FnOnce() -> W,
    {
        if self.is_mounted() || host.has_render_surface() {
            Some(self.mount(init))
        } else {
            None
        }
    }

    pub fn render(&self) -> Option<&W> {
        self.widget.get()
    }

    pub fn render_mut(&mut self) -> Option<&mut W> {
        self.widget.get_mut()
    }
}

impl<W> Default for MountGuard<W> {
    fn default() -> Self {
        Self::new()
    }
}
