//! Command line shared by every generator: `prog [mode] [seed...]`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use olymper_testlib::Random;

use crate::config::GenConfig;
use crate::context::RunContext;
use crate::error::GenError;
use crate::logging::init_logging;
use crate::mode::OutputMode;

#[derive(Parser, Debug, Clone)]
#[command(about = "Test generator")]
pub struct GenArgs {
    /// 0 = tests/NN files, 1 = framed tests on stdout, 2 = one test on stdout.
    #[arg(value_parser = clap::value_parser!(u8).range(0..=2), default_value_t = 2)]
    pub mode: u8,

    /// Extra words mixed into the random seed. Other hyphenated words go after `--`.
    #[arg(allow_negative_numbers = true)]
    pub seed: Vec<String>,

    /// JSON file overriding test folder layout.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GenArgs {
    /// Words the random stream is seeded from: mode first, then seed words.
    pub fn seed_words(&self) -> Vec<String> {
        std::iter::once(self.mode.to_string())
            .chain(self.seed.iter().cloned())
            .collect()
    }

    pub fn load_config(&self) -> Result<GenConfig, GenError> {
        match &self.config {
            Some(path) => GenConfig::from_json_file(path),
            None => Ok(GenConfig::default()),
        }
    }

    pub fn into_context(self) -> Result<RunContext, GenError> {
        let config = self.load_config()?;
        let mode = OutputMode::from_code(self.mode, &config)?;
        let rng = Random::from_args(&self.seed_words());
        Ok(RunContext::new(mode, &config, rng))
    }
}

/// Entry point for generator binaries.
pub fn run_generator<F>(generate: F) -> ExitCode
where
    F: FnOnce(&mut RunContext) -> Result<(), GenError>,
{
    init_logging();
    let args = GenArgs::parse();
    let result = args.into_context().and_then(|mut ctx| {
        generate(&mut ctx)?;
        tracing::debug!(tests = ctx.test_num(), "generation finished");
        Ok(())
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
