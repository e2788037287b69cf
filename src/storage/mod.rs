//! Storage layer for cashflow
//!
//! JSON file persistence with atomic writes, a small key-value interface over
//! it, and named scenarios built on that interface. The forecast engine never
//! touches storage; callers load a disabled set and pass it in.

pub mod file_io;
pub mod kv;
pub mod scenarios;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use scenarios::ScenarioStore;

use crate::config::paths::ForecastPaths;
use crate::error::ForecastResult;

/// Open the scenario store under the configured base directory
pub fn open_scenarios(paths: &ForecastPaths) -> ForecastResult<ScenarioStore<JsonFileStore>> {
    Ok(ScenarioStore::new(JsonFileStore::open(
        paths.scenarios_file(),
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_scenarios_uses_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ForecastPaths::with_base_dir(temp_dir.path().to_path_buf());

        let scenarios = open_scenarios(&paths).unwrap();
        scenarios.disable("lean", ["savings"]).unwrap();

        assert!(temp_dir.path().join("scenarios.json").exists());
    }
}
