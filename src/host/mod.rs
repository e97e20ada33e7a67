//! Capabilities the image viewer host provides to plugins
//!
//! Plugins never talk to a toolkit directly. A host adapter implements these
//! traits; `memory` holds an in-memory implementation for tests and dry runs.

pub mod memory;

use crate::domain::pager::{ScrollRange, Size, ZoomMode};
use crate::domain::widget::{Widget, WidgetId};

pub use memory::{MemoryApp, MemoryWindow};

/// Application-wide keyboard accelerator table
pub trait AccelHost {
    /// Detailed names of every action the application knows (`win.delete`, ...)
    fn list_actions(&self) -> Vec<String>;

    /// Accelerators currently bound to an action
    fn accels_for_action(&self, action: &str) -> Vec<String>;

    /// Replace the accelerators bound to an action
    fn set_accels_for_action(&mut self, action: &str, accels: &[String]);
}

/// A viewer window and its actions
pub trait WindowHost {
    fn has_action(&self, name: &str) -> bool;

    fn add_action(&mut self, name: &str);

    fn remove_action(&mut self, name: &str);

    fn activate_action(&mut self, name: &str);

    fn change_action_state(&mut self, name: &str, state: bool);

    /// The application owning this window
    fn application(&mut self) -> &mut dyn AccelHost;
}

/// The zoomable, scrollable image view inside a window
pub trait ScrollView {
    /// Root of the view's widget tree
    fn root(&self) -> &dyn Widget;

    fn zoom_mode(&self) -> ZoomMode;

    fn set_zoom_mode(&mut self, mode: ZoomMode);

    fn set_zoom(&mut self, zoom: f64);

    /// Whether the view shows scrollbars at all
    fn scrollbars_visible(&self) -> bool;

    /// Allocated size of the view
    fn allocated_size(&self) -> Size;

    /// Pixel size of the current image, if one is loaded
    fn image_size(&self) -> Option<Size>;

    fn widget_visible(&self, id: WidgetId) -> bool;

    fn widget_size(&self, id: WidgetId) -> Size;

    fn scroll_range(&self, id: WidgetId) -> ScrollRange;

    fn set_scroll_value(&mut self, id: WidgetId, value: f64);
}
