mod floating_widget;
mod inline_panel;
mod mount_guard;
mod shell_view;

pub use floating_widget::{CLOSE_LABEL, FloatingView, FloatingWidget, LAUNCHER_LABEL};
pub use inline_panel::{InlinePanel, PANEL_SUBTITLE};
pub use mount_guard::{MountGuard, RenderHost};
pub use shell_view::{ASSISTANT_TITLE, INPUT_PLACEHOLDER, Key, MessageView, ShellView};
