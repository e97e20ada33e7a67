//! Open every new viewer window in fullscreen mode

use super::{PluginInfo, WindowPlugin};
use crate::domain::accels::Bindings;
use crate::error::{EogtricksError, Result};
use crate::host::WindowHost;

pub const FULLSCREEN_ACTION_NAME: &str = "view-fullscreen";

#[derive(Debug, Clone, Copy, Default)]
pub struct FullscreenPlugin;

impl WindowPlugin for FullscreenPlugin {
    type Activation = ();

    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "fullscreen-windows",
            description: "Open new windows in fullscreen mode".to_string(),
            bindings: Bindings::new(),
        }
    }

    /// Switch the window to fullscreen through its stateful action, so the
    /// image is refitted and the edge revealers keep working.
    fn activate(&self, window: &mut dyn WindowHost) -> Result<()> {
        if !window.has_action(FULLSCREEN_ACTION_NAME) {
            return Err(EogtricksError::MissingAction(FULLSCREEN_ACTION_NAME.to_string()));
        }

        tracing::debug!("Activated. Setting {} to true.", FULLSCREEN_ACTION_NAME);
        window.change_action_state(FULLSCREEN_ACTION_NAME, true);
        Ok(())
    }

    fn deactivate(&self, _window: &mut dyn WindowHost, _activation: ()) {}
}
