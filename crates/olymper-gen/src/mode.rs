use std::path::{Path, PathBuf};

use crate::config::GenConfig;
use crate::error::GenError;

/// Where generated tests go. Fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// One file per test, `<dir>/<NN>`, plus the info log.
    Files { dir: PathBuf, width: usize },
    /// All tests on stdout, each preceded by a start-of-test marker.
    Framed,
    /// A single unframed test on stdout.
    Single,
}

impl OutputMode {
    /// Map the numeric CLI code (0, 1, 2) to a mode.
    pub fn from_code(code: u8, config: &GenConfig) -> Result<Self, GenError> {
        match code {
            0 => Ok(Self::Files {
                dir: config.tests_dir.clone(),
                width: config.test_num_width,
            }),
            1 => Ok(Self::Framed),
            2 => Ok(Self::Single),
            other => Err(GenError::InvalidMode(other)),
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single)
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::Single
    }
}

/// `<dir>/<n>` with `n` zero-padded to `width` digits.
pub fn test_path(dir: &Path, width: usize, n: usize) -> PathBuf {
    dir.join(format!("{n:0width$}"))
}

/// Line announcing test `n` in framed mode.
pub fn frame_marker(n: usize) -> String {
    format!("=== test {n} ===\n")
}
