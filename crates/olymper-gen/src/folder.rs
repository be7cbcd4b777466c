//! Test folder layout: `<dir>/NN` inputs with `<dir>/NN.a` answers.

use std::path::{Path, PathBuf};

use olymper_testlib::stream::{InStream, Mode, StreamError};
use olymper_testlib::Outcome;

use crate::config::GenConfig;
use crate::error::GenError;
use crate::mode::test_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFolder {
    dir: PathBuf,
    width: usize,
}

impl TestFolder {
    pub fn new(dir: impl Into<PathBuf>, width: usize) -> Self {
        Self {
            dir: dir.into(),
            width,
        }
    }

    pub fn from_config(config: &GenConfig) -> Self {
        Self::new(config.tests_dir.clone(), config.test_num_width)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn input_path(&self, n: usize) -> PathBuf {
        test_path(&self.dir, self.width, n)
    }

    pub fn answer_path(&self, n: usize) -> PathBuf {
        let mut path = self.input_path(n).into_os_string();
        path.push(".a");
        PathBuf::from(path)
    }

    /// Test numbers `1, 2, ...` up to the first missing input file.
    pub fn tests(&self) -> impl Iterator<Item = usize> + '_ {
        (1..).take_while(move |&n| self.input_path(n).is_file())
    }

    pub fn count(&self) -> usize {
        self.tests().count()
    }
}

/// Result of validating every test in a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub ok: usize,
    pub total: usize,
    /// `(test number, diagnostic)` for every rejected test.
    pub failures: Vec<(usize, String)>,
}

impl ValidationReport {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run `validator` over every test input in strict mode.
///
/// A rejected test is recorded and the walk continues.
pub fn validate_folder<F>(folder: &TestFolder, mut validator: F) -> ValidationReport
where
    F: FnMut(&mut InStream) -> Result<(), StreamError>,
{
    let mut report = ValidationReport::default();
    for n in folder.tests() {
        report.total += 1;
        let result = InStream::from_path(&folder.input_path(n), Mode::Strict)
            .and_then(|mut inf| validator(&mut inf));
        match result {
            Ok(()) => {
                report.ok += 1;
                tracing::info!(test = n, "OK");
            }
            Err(err) => {
                tracing::warn!(test = n, error = %err, "validation failed");
                report.failures.push((n, err.to_string()));
            }
        }
    }
    tracing::info!("correct {} from {}", report.ok, report.total);
    report
}

/// Result of producing reference answers for a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerReport {
    pub written: usize,
    pub failures: Vec<(usize, String)>,
}

/// Run the reference `solve` over every test input, writing `NN.a` files.
///
/// A test the solver rejects gets no answer file; I/O failures are fatal.
pub fn write_answers<F>(folder: &TestFolder, mut solve: F) -> Result<AnswerReport, GenError>
where
    F: FnMut(&mut InStream) -> Result<String, StreamError>,
{
    let mut report = AnswerReport::default();
    for n in folder.tests() {
        let result = InStream::from_path(&folder.input_path(n), Mode::Lax)
            .and_then(|mut inf| solve(&mut inf));
        let answer = match result {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(test = n, error = %err, "solution failed");
                report.failures.push((n, err.to_string()));
                continue;
            }
        };
        let path = folder.answer_path(n);
        std::fs::write(&path, &answer).map_err(|source| GenError::Io { path, source })?;
        report.written += 1;
    }
    Ok(report)
}

/// Result of judging a solution against every answer in a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub passed: usize,
    pub total: usize,
    /// `(test number, outcome)` for every test that did not pass.
    pub failures: Vec<(usize, Outcome)>,
}

impl CheckReport {
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run `solve` on every test and judge its output against `NN.a` with `check`.
///
/// `check` receives the input, the solution output and the answer, in that
/// order. A solution that rejects its input counts as a `FAIL` for that test.
pub fn check_folder<S, C>(folder: &TestFolder, mut solve: S, mut check: C) -> CheckReport
where
    S: FnMut(&mut InStream) -> Result<String, StreamError>,
    C: FnMut(&mut InStream, &mut InStream, &mut InStream) -> Outcome,
{
    let mut report = CheckReport::default();
    for n in folder.tests() {
        report.total += 1;
        let outcome = judge_one(folder, n, &mut solve, &mut check);
        if outcome.is_ok() {
            report.passed += 1;
            tracing::info!(test = n, "{outcome}");
        } else {
            tracing::warn!(test = n, "{outcome}");
            report.failures.push((n, outcome));
        }
    }
    tracing::info!("passed {} from {}", report.passed, report.total);
    report
}

fn judge_one<S, C>(folder: &TestFolder, n: usize, solve: &mut S, check: &mut C) -> Outcome
where
    S: FnMut(&mut InStream) -> Result<String, StreamError>,
    C: FnMut(&mut InStream, &mut InStream, &mut InStream) -> Outcome,
{
    let input = folder.input_path(n);
    let output = InStream::from_path(&input, Mode::Lax).and_then(|mut inf| solve(&mut inf));
    let output = match output {
        Ok(output) => output,
        Err(err) => return Outcome::fail(format!("run-time error: {err}")),
    };
    let opened = InStream::from_path(&input, Mode::Lax).and_then(|inf| {
        InStream::from_path(&folder.answer_path(n), Mode::Lax).map(|ans| (inf, ans))
    });
    match opened {
        Ok((mut inf, mut ans)) => check(&mut inf, &mut InStream::lax(output), &mut ans),
        Err(err) => Outcome::from_answer_error(&err),
    }
}
