//! Foldout expansion state
//!
//! Each foldout descriptor owns a two-state machine (`Collapsed`/`Expanded`)
//! that only changes on a toggle. States live in an explicit store keyed by
//! descriptor id, so they survive target swaps and can be persisted as TOML.

use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::DescriptorId;

/// Expansion state of one foldout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoldoutState {
    Collapsed,
    #[default]
    Expanded,
}

impl FoldoutState {
    /// The state after one toggle
    pub fn toggled(self) -> Self {
        match self {
            FoldoutState::Collapsed => FoldoutState::Expanded,
            FoldoutState::Expanded => FoldoutState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == FoldoutState::Expanded
    }

    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            FoldoutState::Expanded
        } else {
            FoldoutState::Collapsed
        }
    }
}

/// Errors reading or writing a persisted store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed expansion state: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize expansion state: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Keyed store of foldout expansion states
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpansionStore {
    #[serde(default)]
    states: HashMap<DescriptorId, FoldoutState>,
}

impl ExpansionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a foldout; unknown foldouts are expanded
    pub fn state(&self, id: &DescriptorId) -> FoldoutState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// State of a foldout, with an explicit default for unknown ids
    pub fn state_or(&self, id: &DescriptorId, default_expanded: bool) -> FoldoutState {
        self.states
            .get(id)
            .copied()
            .unwrap_or_else(|| FoldoutState::from_expanded(default_expanded))
    }

    pub fn is_expanded(&self, id: &DescriptorId) -> bool {
        self.state(id).is_expanded()
    }

    /// Flip a foldout and return its new state
    pub fn toggle(&mut self, id: &DescriptorId) -> FoldoutState {
        self.toggle_or(id, true)
    }

    /// Flip a foldout whose unrecorded state is `default_expanded`
    pub fn toggle_or(&mut self, id: &DescriptorId, default_expanded: bool) -> FoldoutState {
        let next = self.state_or(id, default_expanded).toggled();
        self.states.insert(id.clone(), next);
        next
    }

    pub fn set(&mut self, id: &DescriptorId, state: FoldoutState) {
        self.states.insert(id.clone(), state);
    }

    /// Number of foldouts with a recorded state
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Load a store from a TOML file; a missing file yields an empty store
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save the store as TOML, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foldout_starts_expanded_and_toggles() {
        let mut store = ExpansionStore::new();
        let stats = DescriptorId::new("Turret", "stats");

        assert_eq!(store.state(&stats), FoldoutState::Expanded);
        assert_eq!(store.toggle(&stats), FoldoutState::Collapsed);
        assert!(!store.is_expanded(&stats));
        assert_eq!(store.toggle(&stats), FoldoutState::Expanded);
        assert!(store.is_expanded(&stats));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        for initial in [FoldoutState::Collapsed, FoldoutState::Expanded] {
            let mut store = ExpansionStore::new();
            let id = DescriptorId::new("Spawner", "waves");
            store.set(&id, initial);
            store.toggle(&id);
            store.toggle(&id);
            assert_eq!(store.state(&id), initial);
        }
    }

    #[test]
    fn test_toggle_is_keyed() {
        let mut store = ExpansionStore::new();
        let stats = DescriptorId::new("Turret", "stats");
        let aim = DescriptorId::new("Turret", "aim");
        store.toggle(&stats);
        assert!(store.is_expanded(&aim));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_state_or_default() {
        let store = ExpansionStore::new();
        let id = DescriptorId::new("Turret", "stats");
        assert_eq!(store.state_or(&id, false), FoldoutState::Collapsed);
        assert_eq!(store.state_or(&id, true), FoldoutState::Expanded);
    }

    #[test]
    fn test_toggle_or_starts_from_default() {
        let mut store = ExpansionStore::new();
        let dial = DescriptorId::new("Gauge", "dial");
        assert_eq!(store.toggle_or(&dial, false), FoldoutState::Expanded);
        assert_eq!(store.toggle_or(&dial, false), FoldoutState::Collapsed);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("expansion.toml");

        let mut store = ExpansionStore::new();
        store.toggle(&DescriptorId::new("Turret", "stats"));
        store.set(&DescriptorId::new("Turret", "aim"), FoldoutState::Expanded);
        store.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[states]"));
        assert!(content.contains("Turret::stats"));
        assert!(content.contains("collapsed"));

        let loaded = ExpansionStore::load(&path).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExpansionStore::load(&dir.path().join("absent.toml")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expansion.toml");
        std::fs::write(&path, "states = 3").unwrap();
        assert!(matches!(
            ExpansionStore::load(&path),
            Err(StoreError::Parse(_))
        ));
    }
}
