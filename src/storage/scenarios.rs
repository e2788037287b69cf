//! Saved scenarios
//!
//! A scenario is a named disabled set. Each one lives under the key
//! `scenario.<name>.disabled` as a JSON array of rule ids.

use crate::error::{ForecastError, ForecastResult};
use crate::models::DisabledSet;

use super::kv::KeyValueStore;

const KEY_PREFIX: &str = "scenario.";
const KEY_SUFFIX: &str = ".disabled";

/// Scenario persistence over any key-value store
pub struct ScenarioStore<S> {
    store: S,
}

impl<S: KeyValueStore> ScenarioStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Storage key for a scenario name
    pub fn key(name: &str) -> String {
        format!("{}{}{}", KEY_PREFIX, name, KEY_SUFFIX)
    }

    fn validate_name(name: &str) -> ForecastResult<&str> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ForecastError::Validation(
                "scenario name cannot be empty".into(),
            ));
        }
        if name.contains('.') || name.chars().any(char::is_whitespace) {
            return Err(ForecastError::Validation(format!(
                "scenario name '{}' may not contain dots or whitespace",
                name
            )));
        }
        Ok(name)
    }

    /// Load a scenario; an unknown name yields an empty set
    pub fn load(&self, name: &str) -> ForecastResult<DisabledSet> {
        let name = Self::validate_name(name)?;
        match self.store.get(&Self::key(name))? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                ForecastError::Storage(format!("Scenario '{}' is corrupt: {}", name, e))
            }),
            None => Ok(DisabledSet::new()),
        }
    }

    /// Load a scenario that must already exist
    pub fn require(&self, name: &str) -> ForecastResult<DisabledSet> {
        let name = Self::validate_name(name)?;
        if self.store.get(&Self::key(name))?.is_none() {
            return Err(ForecastError::scenario_not_found(name));
        }
        self.load(name)
    }

    pub fn save(&self, name: &str, disabled: &DisabledSet) -> ForecastResult<()> {
        let name = Self::validate_name(name)?;
        let raw = serde_json::to_string(disabled)?;
        self.store.set(&Self::key(name), &raw)?;
        tracing::debug!(scenario = name, disabled = disabled.len(), "Saved scenario");
        Ok(())
    }

    /// Add ids to a scenario, creating it if needed
    pub fn disable<I, T>(&self, name: &str, ids: I) -> ForecastResult<DisabledSet>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut disabled = self.load(name)?;
        for id in ids {
            disabled.insert(id.as_ref());
        }
        self.save(name, &disabled)?;
        Ok(disabled)
    }

    /// Remove ids from a scenario
    pub fn enable<I, T>(&self, name: &str, ids: I) -> ForecastResult<DisabledSet>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut disabled = self.require(name)?;
        for id in ids {
            disabled.remove(id.as_ref());
        }
        self.save(name, &disabled)?;
        Ok(disabled)
    }

    /// Delete a scenario, returning whether it existed
    pub fn clear(&self, name: &str) -> ForecastResult<bool> {
        let name = Self::validate_name(name)?;
        let removed = self.store.remove(&Self::key(name))?;
        tracing::debug!(scenario = name, removed, "Cleared scenario");
        Ok(removed)
    }

    /// Names of all saved scenarios
    pub fn names(&self) -> ForecastResult<Vec<String>> {
        Ok(self
            .store
            .keys()?
            .into_iter()
            .filter_map(|key| {
                key.strip_prefix(KEY_PREFIX)
                    .and_then(|rest| rest.strip_suffix(KEY_SUFFIX))
                    .map(str::to_string)
            })
            .collect())
    }
}
