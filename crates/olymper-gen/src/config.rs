/// Generator configuration: where tests land and how they are named.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigSource, GenError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Directory receiving `NN` test files in file mode.
    pub tests_dir: PathBuf,
    /// Human-readable per-test description log.
    pub info_file: PathBuf,
    /// Zero-padded width of test file names.
    pub test_num_width: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            tests_dir: PathBuf::from("tests"),
            info_file: PathBuf::from("tests.info"),
            test_num_width: 2,
        }
    }
}

impl GenConfig {
    /// Load from a JSON file; missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, GenError> {
        let wrap = |source: ConfigSource| GenError::Config {
            path: path.to_path_buf(),
            source,
        };
        let text = std::fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        serde_json::from_str(&text).map_err(|e| wrap(e.into()))
    }
}
