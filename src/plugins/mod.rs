//! The viewer plugins
//!
//! Each plugin is a small configuration value. Activating it against a host
//! returns an activation record holding everything deactivation needs, so
//! no plugin keeps mutable lifecycle state of its own.

pub mod fullscreen;
pub mod pager;
pub mod quick_move;
pub mod safer_delete;
pub mod tag_editor;

use crate::domain::accels::Bindings;
use crate::error::Result;
use crate::host::{AccelHost, WindowHost};
use crate::infrastructure::Config;

pub use fullscreen::FullscreenPlugin;
pub use pager::{PagerActivation, PagerPlugin};
pub use quick_move::{QuickMoveActivation, QuickMovePlugin};
pub use safer_delete::SaferDeletePlugin;
pub use tag_editor::{TagEdit, TagEditorPlugin};

/// Description of a plugin for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub description: String,
    /// Key bindings the plugin installs while active
    pub bindings: Bindings,
}

/// A plugin activated once per viewer window
pub trait WindowPlugin {
    type Activation;

    fn info(&self) -> PluginInfo;

    fn activate(&self, window: &mut dyn WindowHost) -> Result<Self::Activation>;

    fn deactivate(&self, window: &mut dyn WindowHost, activation: Self::Activation);
}

/// A plugin activated once for the whole application
pub trait AppPlugin {
    type Activation;

    fn info(&self) -> PluginInfo;

    fn activate(&self, app: &mut dyn AccelHost) -> Result<Self::Activation>;

    fn deactivate(&self, app: &mut dyn AccelHost, activation: Self::Activation);
}

/// Window actions added by a plugin, with the accelerators bound to them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRegistration {
    actions: Vec<String>,
}

impl ActionRegistration {
    /// Add each action to `window` and bind its accelerators.
    pub fn register(window: &mut dyn WindowHost, actions: &[(&str, &[&str])]) -> Self {
        let mut registered = Vec::with_capacity(actions.len());
        for (name, accels) in actions {
            tracing::debug!("Adding action win.{}", name);
            window.add_action(name);
            if !accels.is_empty() {
                let accels: Vec<String> = accels.iter().map(|a| a.to_string()).collect();
                window
                    .application()
                    .set_accels_for_action(&detailed_name(name), &accels);
            }
            registered.push(name.to_string());
        }
        ActionRegistration {
            actions: registered,
        }
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Remove every registered action from `window`.
    pub fn unregister(self, window: &mut dyn WindowHost) {
        for name in self.actions {
            tracing::debug!("Removing action win.{}", name);
            window.remove_action(&name);
        }
    }
}

/// `win.`-prefixed name used by the accelerator table
pub fn detailed_name(action: &str) -> String {
    format!("win.{}", action)
}

/// Every plugin in this collection, built from `config`
pub fn catalog(config: &Config) -> Vec<PluginInfo> {
    vec![
        TagEditorPlugin.info(),
        FullscreenPlugin.info(),
        PagerPlugin::from_config(config).info(),
        QuickMovePlugin.info(),
        SaferDeletePlugin.info(),
    ]
}
