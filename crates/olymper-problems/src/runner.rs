//! Process entry points for validators, checkers and solutions.
//!
//! Each follows the judging-system convention: diagnostics on stderr, the
//! verdict in the exit code.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use olymper_testlib::stream::{InStream, Mode, StreamError};
use olymper_testlib::Outcome;

/// `check <input> <output> <answer>`
#[derive(Parser, Debug)]
#[command(about = "Output checker")]
pub struct CheckArgs {
    /// Test input.
    pub input: PathBuf,
    /// Participant output.
    pub output: PathBuf,
    /// Reference answer.
    pub answer: PathBuf,
}

impl CheckArgs {
    /// Parse checker arguments. A usage error is the checker's own fault, so
    /// it becomes `FAIL`; `--help` and `--version` exit the usual clap way.
    pub fn parse_or_fail<I, T>(args: I) -> Result<Self, Outcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => Outcome::fail(err.to_string().trim_end()),
        })
    }
}

/// Validate stdin, exiting with `ok` or `FAIL`.
pub fn run_validator<F>(validate: F) -> !
where
    F: FnOnce(&mut InStream) -> Result<(), StreamError>,
{
    let mut inf = match InStream::from_reader(io::stdin().lock(), Mode::Strict) {
        Ok(inf) => inf,
        Err(err) => Outcome::fail(format!("cannot read stdin: {err}")).exit(),
    };
    match validate(&mut inf) {
        Ok(()) => Outcome::ok("").exit(),
        Err(err) => Outcome::from_answer_error(&err).exit(),
    }
}

pub fn run_checker<F>(check: F) -> !
where
    F: FnOnce(&mut InStream, &mut InStream, &mut InStream) -> Outcome,
{
    let args = match CheckArgs::parse_or_fail(std::env::args_os()) {
        Ok(args) => args,
        Err(outcome) => outcome.exit(),
    };
    let open = |path: &PathBuf| match InStream::from_path(path, Mode::Lax) {
        Ok(stream) => stream,
        Err(err) => Outcome::from_answer_error(&err).exit(),
    };
    let mut inf = open(&args.input);
    let mut ouf = open(&args.output);
    let mut ans = open(&args.answer);
    check(&mut inf, &mut ouf, &mut ans).exit()
}

/// Read stdin leniently, write the rendered answer to stdout.
pub fn run_solution<F>(solve: F) -> !
where
    F: FnOnce(&mut InStream) -> Result<String, StreamError>,
{
    let answer = InStream::from_reader(io::stdin().lock(), Mode::Lax)
        .map_err(|err| err.to_string())
        .and_then(|mut inf| solve(&mut inf).map_err(|err| err.to_string()));
    match answer {
        Ok(text) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
                eprintln!("cannot write answer: {err}");
                std::process::exit(1);
            }
            std::process::exit(0)
        }
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1)
        }
    }
}
