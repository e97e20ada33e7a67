//! Keyboard accelerator overlays
//!
//! Plugins put their own bindings on top of the host's table and must be
//! able to put the table back exactly as it was. Whatever is needed for that
//! is returned as a [`SavedAccels`] record rather than kept in the plugin.

use crate::error::{EogtricksError, Result};
use crate::host::AccelHost;
use std::collections::{BTreeMap, HashSet};

/// Detailed action name → accelerators
pub type Bindings = BTreeMap<String, Vec<String>>;

/// Build a [`Bindings`] map from string slices.
pub fn bindings(entries: &[(&str, &[&str])]) -> Bindings {
    entries
        .iter()
        .map(|(action, accels)| {
            (
                action.to_string(),
                accels.iter().map(|a| a.to_string()).collect(),
            )
        })
        .collect()
}

/// Previous accelerators of every action an overlay changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedAccels {
    previous: Bindings,
}

impl SavedAccels {
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }

    pub fn previous(&self) -> &Bindings {
        &self.previous
    }
}

/// Bind `overlay`, first taking its keys away from any other action that
/// uses them. Returns what must be restored later.
pub fn install_shadowing(host: &mut dyn AccelHost, overlay: &Bindings) -> SavedAccels {
    let shadowed: HashSet<&str> = overlay
        .values()
        .flat_map(|keys| keys.iter().map(String::as_str))
        .collect();

    let mut previous = Bindings::new();
    for action in host.list_actions() {
        let old_keys = host.accels_for_action(&action);
        let new_keys: Vec<String> = old_keys
            .iter()
            .filter(|key| !shadowed.contains(key.as_str()))
            .cloned()
            .collect();
        if new_keys == old_keys {
            continue;
        }
        host.set_accels_for_action(&action, &new_keys);
        previous.insert(action, old_keys);
    }
    tracing::debug!(?previous, "Preserved");

    for (action, keys) in overlay {
        host.set_accels_for_action(action, keys);
    }
    tracing::debug!(?overlay, "Added bindings");

    SavedAccels { previous }
}

/// Undo [`install_shadowing`]: clear the overlay's bindings and give the
/// shadowed keys back.
pub fn remove_shadowing(host: &mut dyn AccelHost, overlay: &Bindings, saved: SavedAccels) {
    for action in overlay.keys() {
        host.set_accels_for_action(action, &[]);
    }
    tracing::debug!(?overlay, "Removed bindings");

    restore(host, saved);
}

/// Replace the bindings of existing actions. Every action in `replacement`
/// must already be known to the host.
pub fn replace_bindings(
    host: &mut dyn AccelHost,
    replacement: &Bindings,
) -> Result<SavedAccels> {
    let known = host.list_actions();
    if let Some(missing) = replacement.keys().find(|action| !known.contains(*action)) {
        return Err(EogtricksError::MissingAction(missing.clone()));
    }

    let mut previous = Bindings::new();
    for (action, accels) in replacement {
        previous.insert(action.clone(), host.accels_for_action(action));
        host.set_accels_for_action(action, accels);
    }
    tracing::debug!(?replacement, "Now using");

    Ok(SavedAccels { previous })
}

/// Put back every binding recorded in `saved`.
pub fn restore(host: &mut dyn AccelHost, saved: SavedAccels) {
    for (action, accels) in &saved.previous {
        host.set_accels_for_action(action, accels);
    }
    tracing::debug!(previous = ?saved.previous, "Restored");
}
