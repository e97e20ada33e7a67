//! In-memory host for tests and dry runs

use super::{AccelHost, WindowHost};
use std::collections::{BTreeMap, BTreeSet};

/// Accelerator table kept in a map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryApp {
    pub accels: BTreeMap<String, Vec<String>>,
}

impl MemoryApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to seed an action's bindings
    #[must_use]
    pub fn with_action(mut self, action: &str, accels: &[&str]) -> Self {
        self.accels.insert(
            action.to_string(),
            accels.iter().map(|a| a.to_string()).collect(),
        );
        self
    }
}

impl AccelHost for MemoryApp {
    fn list_actions(&self) -> Vec<String> {
        self.accels.keys().cloned().collect()
    }

    fn accels_for_action(&self, action: &str) -> Vec<String> {
        self.accels.get(action).cloned().unwrap_or_default()
    }

    fn set_accels_for_action(&mut self, action: &str, accels: &[String]) {
        self.accels.insert(action.to_string(), accels.to_vec());
    }
}

/// Window with a set of actions, recording what was activated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryWindow {
    pub actions: BTreeSet<String>,
    pub states: BTreeMap<String, bool>,
    pub activated: Vec<String>,
    pub app: MemoryApp,
}

impl MemoryWindow {
    pub fn new(app: MemoryApp) -> Self {
        MemoryWindow {
            app,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_action(mut self, name: &str) -> Self {
        self.actions.insert(name.to_string());
        self
    }
}

impl WindowHost for MemoryWindow {
    fn has_action(&self, name: &str) -> bool {
        self.actions.contains(name)
    }

    fn add_action(&mut self, name: &str) {
        self.actions.insert(name.to_string());
    }

    fn remove_action(&mut self, name: &str) {
        self.actions.remove(name);
    }

    fn activate_action(&mut self, name: &str) {
        self.activated.push(name.to_string());
    }

    fn change_action_state(&mut self, name: &str, state: bool) {
        self.states.insert(name.to_string(), state);
    }

    fn application(&mut self) -> &mut dyn AccelHost {
        &mut self.app
    }
}
