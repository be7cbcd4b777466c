//! Template problem: one array of positive integers.
//!
//! Input: `n` on the first line, then `n` space-separated values.

use std::io::Write;

use olymper_gen::case::{Bounds, Sequence};
use olymper_gen::context::RunContext;
use olymper_gen::error::GenError;
use olymper_testlib::stream::{InStream, StreamError};

pub const N_BOUNDS: Bounds = Bounds::new(1, 100_000);
pub const VALUE_BOUNDS: Bounds = Bounds::new(1, 1_000_000);

/// Size of the lone test in single mode.
pub const SINGLE_SIZE: usize = 2000;

const HAND_TESTS: [&[i64]; 2] = [&[4, 3, 4, 3], &[2, 4, 7, 5, 6]];

/// Handcrafted test `index`. Panics on an index with no literal.
pub fn hand_test(index: usize) -> Sequence {
    Sequence::handcrafted(HAND_TESTS[index])
}

pub fn hand_test_count() -> usize {
    HAND_TESTS.len()
}

pub fn random_test<W: Write>(
    ctx: &mut RunContext<W>,
    size: usize,
    approximate: bool,
) -> Result<Sequence, GenError> {
    let case = Sequence::random(ctx.rng(), size, approximate, VALUE_BOUNDS);
    ctx.note(format_args!("n = {}", case.len()))?;
    Ok(case)
}

pub fn add_noise<W: Write>(
    ctx: &mut RunContext<W>,
    case: &mut Sequence,
    p: f64,
) -> Result<(), GenError> {
    let changed = case.apply_noise(ctx.rng(), p, VALUE_BOUNDS);
    ctx.note(format_args!("added noise, p = {p:.6}, {changed} nums changed"))
}

/// Full test plan for one run.
pub fn generate<W: Write>(ctx: &mut RunContext<W>) -> Result<(), GenError> {
    if ctx.mode().is_single() {
        let case = random_test(ctx, SINGLE_SIZE, false)?;
        return ctx.emit(&case);
    }

    for index in 0..hand_test_count() {
        let case = hand_test(index);
        ctx.note(format_args!("hand test, n = {}", case.len()))?;
        ctx.emit(&case)?;
    }

    let maxn = 100;
    ctx.note(format_args!(""))?;
    ctx.note(format_args!("group 1, maxn = {maxn}"))?;
    for _ in 0..2 {
        let case = random_test(ctx, maxn, true)?;
        ctx.emit(&case)?;
    }

    let maxn = 1000;
    ctx.note(format_args!(""))?;
    ctx.note(format_args!("group 2, maxn = {maxn}"))?;
    for _ in 0..2 {
        let mut case = random_test(ctx, maxn, true)?;
        add_noise(ctx, &mut case, 0.1)?;
        ctx.emit(&case)?;
    }

    Ok(())
}

pub fn validate(inf: &mut InStream) -> Result<(), StreamError> {
    let n = inf.read_int(N_BOUNDS.min, N_BOUNDS.max, "n")?;
    inf.read_eoln()?;

    for i in 0..n {
        inf.read_int(VALUE_BOUNDS.min, VALUE_BOUNDS.max, &format!("a[{i}]"))?;
        if i + 1 < n {
            inf.read_space()?;
        }
    }
    inf.read_eoln()?;

    inf.read_eof()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_tests_are_valid() {
        for index in 0..hand_test_count() {
            let text = hand_test(index).to_string();
            validate(&mut InStream::strict(text)).unwrap();
        }
    }

    #[test]
    #[should_panic]
    fn test_unknown_hand_test_panics() {
        hand_test(hand_test_count());
    }

    #[test]
    fn test_validate_accepts_example() {
        validate(&mut InStream::strict("4\n4 3 4 3\n")).unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_value() {
        let err = validate(&mut InStream::strict("2\n0 3\n")).unwrap_err();
        assert!(matches!(err, StreamError::OutOfBounds { ref label, .. } if label == "a[0]"));
    }

    #[test]
    fn test_validate_rejects_count_mismatch() {
        assert!(validate(&mut InStream::strict("3\n1 2\n")).is_err());
        assert!(validate(&mut InStream::strict("1\n1 2\n")).is_err());
    }
}
