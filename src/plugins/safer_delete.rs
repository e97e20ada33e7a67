//! Make Delete a permanent delete only with an explicit menu choice
//!
//! `<Shift>Delete` moves to the trash instead of deleting for good, and
//! the permanent delete action loses its accelerator.

use super::{AppPlugin, PluginInfo};
use crate::domain::accels::{bindings, replace_bindings, restore, Bindings, SavedAccels};
use crate::error::Result;
use crate::host::AccelHost;

#[derive(Debug, Clone, Copy, Default)]
pub struct SaferDeletePlugin;

impl SaferDeletePlugin {
    pub fn improved_bindings() -> Bindings {
        bindings(&[
            ("win.delete", &[]),
            ("win.move-trash", &["<Shift>Delete"]),
        ])
    }
}

impl AppPlugin for SaferDeletePlugin {
    type Activation = SavedAccels;

    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "safer-delete",
            description: "Shift+Delete moves to trash; permanent delete has no key".to_string(),
            bindings: Self::improved_bindings(),
        }
    }

    fn activate(&self, app: &mut dyn AccelHost) -> Result<SavedAccels> {
        let saved = replace_bindings(app, &Self::improved_bindings())?;
        tracing::debug!("Activated. Now using {:?}.", Self::improved_bindings());
        Ok(saved)
    }

    fn deactivate(&self, app: &mut dyn AccelHost, activation: SavedAccels) {
        tracing::debug!("Deactivated. Reverting to {:?}.", activation.previous());
        restore(app, activation);
    }
}
