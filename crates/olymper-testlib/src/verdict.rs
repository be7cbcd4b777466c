use std::fmt;

use crate::stream::StreamError;

/// Final verdict of a checker or validator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    WrongAnswer,
    PresentationError,
    /// Internal fault: broken reference answer, invalid test input.
    Fail,
}

impl Verdict {
    /// Process exit code expected by the judging system.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::WrongAnswer => 1,
            Self::PresentationError => 2,
            Self::Fail => 3,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ok => "ok",
            Self::WrongAnswer => "wrong answer",
            Self::PresentationError => "wrong output format",
            Self::Fail => "FAIL",
        };
        f.write_str(s)
    }
}

/// A verdict with its human-readable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub message: String,
}

impl Outcome {
    pub fn new(verdict: Verdict, message: impl Into<String>) -> Self {
        Self {
            verdict,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Verdict::Ok, message)
    }

    pub fn wrong_answer(message: impl Into<String>) -> Self {
        Self::new(Verdict::WrongAnswer, message)
    }

    pub fn presentation_error(message: impl Into<String>) -> Self {
        Self::new(Verdict::PresentationError, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(Verdict::Fail, message)
    }

    /// A read failure on the participant's output is their formatting fault.
    pub fn from_output_error(err: &StreamError) -> Self {
        Self::presentation_error(err.to_string())
    }

    /// A read failure on the reference answer or the test input is ours.
    pub fn from_answer_error(err: &StreamError) -> Self {
        Self::fail(err.to_string())
    }

    pub fn is_ok(&self) -> bool {
        self.verdict == Verdict::Ok
    }

    /// Report on stderr and terminate with the verdict's exit code.
    pub fn exit(self) -> ! {
        eprintln!("{self}");
        std::process::exit(self.verdict.exit_code())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.verdict)
        } else {
            write!(f, "{} {}", self.verdict, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Verdict::Ok.exit_code(), 0);
        assert_eq!(Verdict::WrongAnswer.exit_code(), 1);
        assert_eq!(Verdict::PresentationError.exit_code(), 2);
        assert_eq!(Verdict::Fail.exit_code(), 3);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::ok("2 tokens").to_string(), "ok 2 tokens");
        assert_eq!(Outcome::fail("").to_string(), "FAIL");
        assert_eq!(
            Outcome::presentation_error("1st word incorrect").to_string(),
            "wrong output format 1st word incorrect"
        );
    }
}
