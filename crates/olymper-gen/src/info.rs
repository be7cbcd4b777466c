use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GenError;

/// Per-test description log for problem setters.
///
/// The first record truncates the file; later records append. The file is
/// reopened for every record, so a crashed run still leaves a readable log.
#[derive(Debug, Clone)]
pub struct InfoLog {
    path: PathBuf,
    started: bool,
}

impl InfoLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            started: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `NNN: <line>` describing test `test_num`.
    pub fn record(&mut self, test_num: usize, line: fmt::Arguments<'_>) -> Result<(), GenError> {
        let io_err = |source| GenError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = if self.started {
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(&self.path)
                .map_err(io_err)?
        } else {
            File::create(&self.path).map_err(io_err)?
        };
        self.started = true;
        writeln!(file, "{test_num:03}: {line}").map_err(io_err)
    }
}
