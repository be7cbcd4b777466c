//! Run context: the state one generator invocation threads through its
//! builders and the output sink.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use olymper_testlib::Random;

use crate::case::TestCase;
use crate::config::GenConfig;
use crate::error::GenError;
use crate::info::InfoLog;
use crate::mode::{frame_marker, test_path, OutputMode};

pub struct RunContext<W: Write = io::Stdout> {
    mode: OutputMode,
    rng: Random,
    test_num: usize,
    /// Present only in file mode.
    info: Option<InfoLog>,
    out: W,
}

impl RunContext<io::Stdout> {
    pub fn new(mode: OutputMode, config: &GenConfig, rng: Random) -> Self {
        Self::with_writer(mode, config, rng, io::stdout())
    }
}

impl<W: Write> RunContext<W> {
    /// Same as [`RunContext::new`] but stdout-bound output goes to `out`.
    pub fn with_writer(mode: OutputMode, config: &GenConfig, rng: Random, out: W) -> Self {
        let info = match mode {
            OutputMode::Files { .. } => Some(InfoLog::new(config.info_file.clone())),
            OutputMode::Framed | OutputMode::Single => None,
        };
        Self {
            mode,
            rng,
            test_num: 0,
            info,
            out,
        }
    }

    pub fn mode(&self) -> &OutputMode {
        &self.mode
    }

    pub fn rng(&mut self) -> &mut Random {
        &mut self.rng
    }

    /// Number of tests emitted so far.
    pub fn test_num(&self) -> usize {
        self.test_num
    }

    /// Describe the upcoming test in the info log. No-op outside file mode.
    pub fn note(&mut self, line: fmt::Arguments<'_>) -> Result<(), GenError> {
        match self.info.as_mut() {
            Some(info) => info.record(self.test_num + 1, line),
            None => Ok(()),
        }
    }

    /// Serialize `case` as the next test.
    pub fn emit(&mut self, case: &impl TestCase) -> Result<(), GenError> {
        self.test_num += 1;
        let n = self.test_num;
        match &self.mode {
            OutputMode::Files { dir, width } => {
                let path = test_path(dir, *width, n);
                let io_err = |source| GenError::Io {
                    path: path.clone(),
                    source,
                };
                let mut writer = BufWriter::new(File::create(&path).map_err(io_err)?);
                case.write_to(&mut writer).map_err(io_err)?;
                writer.flush().map_err(io_err)?;
                let name = format!("{n:0width$}", width = *width);
                tracing::info!(path = %path.display(), "{name}: generated");
            }
            OutputMode::Framed => {
                self.out
                    .write_all(frame_marker(n).as_bytes())
                    .map_err(GenError::Stdout)?;
                case.write_to(&mut self.out).map_err(GenError::Stdout)?;
                self.out.flush().map_err(GenError::Stdout)?;
            }
            OutputMode::Single => {
                case.write_to(&mut self.out).map_err(GenError::Stdout)?;
                self.out.flush().map_err(GenError::Stdout)?;
            }
        }
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}
