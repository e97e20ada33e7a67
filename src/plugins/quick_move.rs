//! Quick move: pick a target folder once, then send images there

use super::{detailed_name, ActionRegistration, PluginInfo, WindowPlugin};
use crate::domain::accels::bindings;
use crate::error::{EogtricksError, Result};
use crate::host::WindowHost;
use crate::infrastructure::Config;
use std::path::Path;

pub const ACTION_NAME: &str = "new-quick-move-folder";
const ACCELS: &[&str] = &["N"];

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickMovePlugin;

impl WindowPlugin for QuickMovePlugin {
    type Activation = QuickMoveActivation;

    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "quickmove",
            description: "Choose a target folder and move images into it".to_string(),
            bindings: bindings(&[(detailed_name(ACTION_NAME).as_str(), ACCELS)]),
        }
    }

    fn activate(&self, window: &mut dyn WindowHost) -> Result<QuickMoveActivation> {
        tracing::debug!("Activated. Adding action win.{}", ACTION_NAME);
        Ok(QuickMoveActivation {
            registration: ActionRegistration::register(window, &[(ACTION_NAME, ACCELS)]),
        })
    }

    fn deactivate(&self, window: &mut dyn WindowHost, activation: QuickMoveActivation) {
        tracing::debug!("Deactivated. Removing action win.{}", ACTION_NAME);
        activation.registration.unregister(window);
    }
}

/// Quick move in one window
#[derive(Debug, Clone)]
pub struct QuickMoveActivation {
    registration: ActionRegistration,
}

impl QuickMoveActivation {
    /// Dispatch the plugin's action. The host asks the user for a folder
    /// and passes it as `chosen`; the caller saves `config` afterwards.
    pub fn handle_action(&self, action: &str, config: &mut Config, chosen: &Path) -> Result<()> {
        match action {
            ACTION_NAME => choose_target(config, chosen),
            other => Err(EogtricksError::MissingAction(other.to_string())),
        }
    }
}

/// Make `folder` the quick move target. It must be an existing directory.
pub fn choose_target(config: &mut Config, folder: &Path) -> Result<()> {
    if !folder.is_dir() {
        return Err(EogtricksError::Config(format!(
            "Not a directory: {}",
            folder.display()
        )));
    }
    tracing::info!("Quick move target is now {}", folder.display());
    config.quick_move_target = Some(folder.to_path_buf());
    Ok(())
}
