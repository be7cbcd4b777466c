//! "Game": several independent rounds, each a threshold `d` and a list of
//! piles. The first player wins a round when no pile is below `d`.
//!
//! Input: `T`, then per round a line with `d` and a line `len x1 .. xlen`.
//! Output: `First` or `Second` per round.

use std::fmt;
use std::io::Write;

use olymper_gen::case::{Batch, Bounds, Instance};
use olymper_gen::context::RunContext;
use olymper_gen::error::GenError;
use olymper_testlib::stream::{InStream, StreamError};
use olymper_testlib::text::{compress, english_ending};
use olymper_testlib::{Outcome, Random};

pub const ROUNDS_BOUNDS: Bounds = Bounds::new(1, 100);
pub const D_BOUNDS: Bounds = Bounds::new(1, 100);
pub const LEN_BOUNDS: Bounds = Bounds::new(1, 100);
pub const PILE_BOUNDS: Bounds = Bounds::new(1, 100);

const FIRST: &str = "FIRST";
const SECOND: &str = "SECOND";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    First,
    Second,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("First"),
            Self::Second => f.write_str("Second"),
        }
    }
}

pub fn sample_test() -> Batch {
    Batch::new(vec![
        Instance::new(1, vec![5, 3]),
        Instance::new(3, vec![3, 3, 4, 3]),
        Instance::new(7, vec![7, 6, 7]),
    ])
}

/// `rounds` random rounds with up to `max_dim` piles each.
///
/// One batch in five uses odd multiples of `d` plus a remainder, with small
/// `d`. Otherwise piles sit in `[d, 100]`, except that each pile falls below
/// `d` with probability `0.3 / len`, and every pile of the fourth round is
/// drawn from `[1, max(d - 1, 1)]`.
pub fn random_test(rng: &mut Random, rounds: usize, max_dim: i64, randomness: bool) -> Batch {
    let odd_multiples = rng.chance(0.2);
    let instances = (0..rounds)
        .map(|round| {
            let d = rng.next_int(1, if odd_multiples { 5 } else { 30 });
            let dim = if randomness {
                rng.next_int((7 * max_dim / 10).max(2), max_dim)
            } else {
                max_dim
            };
            let piles = (0..dim)
                .map(|_| {
                    if odd_multiples {
                        (2 * rng.next_int(0, 9) + 1) * d + rng.next_int(0, d - 1)
                    } else if rng.chance(0.3 / dim as f64) || round == 3 {
                        rng.next_int(1, (d - 1).max(1))
                    } else {
                        rng.next_int(d, 100)
                    }
                })
                .collect();
            Instance::new(d, piles)
        })
        .collect();
    Batch::new(instances)
}

fn emit_random<W: Write>(
    ctx: &mut RunContext<W>,
    rounds: usize,
    max_dim: i64,
) -> Result<(), GenError> {
    ctx.note(format_args!("random test, t = {rounds}, max dim = {max_dim}"))?;
    let case = random_test(ctx.rng(), rounds, max_dim, true);
    ctx.emit(&case)
}

/// Full test plan for one run.
pub fn generate<W: Write>(ctx: &mut RunContext<W>) -> Result<(), GenError> {
    if ctx.mode().is_single() {
        return emit_random(ctx, 100, 100);
    }

    ctx.note(format_args!("sample test"))?;
    ctx.emit(&sample_test())?;

    for (count, rounds, max_dim) in [(6, 5, 4), (6, 100, 4), (8, 100, 100)] {
        for _ in 0..count {
            emit_random(ctx, rounds, max_dim)?;
        }
    }
    Ok(())
}

pub fn validate(inf: &mut InStream) -> Result<(), StreamError> {
    let t = inf.read_int(ROUNDS_BOUNDS.min, ROUNDS_BOUNDS.max, "T")?;
    inf.read_eoln()?;

    for round in 0..t {
        inf.read_int(D_BOUNDS.min, D_BOUNDS.max, &format!("d[{round}]"))?;
        inf.read_eoln()?;

        let len = inf.read_int(LEN_BOUNDS.min, LEN_BOUNDS.max, &format!("len[{round}]"))?;
        for i in 0..len {
            inf.read_space()?;
            inf.read_int(
                PILE_BOUNDS.min,
                PILE_BOUNDS.max,
                &format!("x[{round}][{i}]"),
            )?;
        }
        inf.read_eoln()?;
    }

    inf.read_eof()
}

/// Reference solution.
pub fn solve(inf: &mut InStream) -> Result<Vec<Answer>, StreamError> {
    let t = inf.read_int(0, i64::MAX, "T")?;
    let mut answers = Vec::new();
    for _ in 0..t {
        let d = inf.read_int(i64::MIN, i64::MAX, "d")?;
        let len = inf.read_int(0, i64::MAX, "len")?;
        let mut first_wins = true;
        for _ in 0..len {
            if inf.read_int(i64::MIN, i64::MAX, "x")? < d {
                first_wins = false;
            }
        }
        answers.push(if first_wins {
            Answer::First
        } else {
            Answer::Second
        });
    }
    Ok(answers)
}

pub fn render_answers(answers: &[Answer]) -> String {
    answers.iter().map(|a| format!("{a}\n")).collect()
}

fn is_answer_word(word: &str) -> bool {
    word == FIRST || word == SECOND
}

/// Compare the participant's words against the reference, ignoring ASCII case.
pub fn check(ans: &mut InStream, ouf: &mut InStream) -> Outcome {
    let mut n: u64 = 0;
    let mut last = String::new();

    while !ans.seek_eof() && !ouf.seek_eof() {
        n += 1;
        let ending = english_ending(n);

        let ja = match ans.read_word() {
            Ok(word) => word.to_ascii_uppercase(),
            Err(err) => return Outcome::from_answer_error(&err),
        };
        let pa = match ouf.read_word() {
            Ok(word) => word.to_ascii_uppercase(),
            Err(err) => return Outcome::from_output_error(&err),
        };

        if !is_answer_word(&ja) {
            return Outcome::fail(format!(
                "{n}{ending} word in answer incorrect - {FIRST} or {SECOND} expected, but {} found",
                compress(&ja)
            ));
        }
        if !is_answer_word(&pa) {
            return Outcome::presentation_error(format!(
                "{n}{ending} word incorrect - {FIRST} or {SECOND} expected, but {} found",
                compress(&pa)
            ));
        }
        if ja != pa {
            return Outcome::wrong_answer(format!(
                "{n}{ending} words differ - expected: '{}', found: '{}'",
                compress(&ja),
                compress(&pa)
            ));
        }
        last = ja;
    }

    match (ans.seek_eof(), ouf.seek_eof()) {
        (true, true) if n == 1 => Outcome::ok(format!("\"{}\"", compress(&last))),
        (true, true) => Outcome::ok(format!("{n} tokens")),
        (true, false) => Outcome::wrong_answer("Participant output contains extra tokens"),
        (false, _) => Outcome::wrong_answer("Unexpected EOF in the participants output"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olymper_gen::case::TestCase;

    #[test]
    fn test_sample_literal() {
        assert_eq!(
            sample_test().render(),
            "3\n1\n2 5 3\n3\n4 3 3 4 3\n7\n3 7 6 7\n"
        );
    }

    #[test]
    fn test_solve_sample() {
        let mut inf = InStream::lax(sample_test().render());
        let answers = solve(&mut inf).unwrap();
        assert_eq!(answers, vec![Answer::First, Answer::First, Answer::Second]);
        assert_eq!(render_answers(&answers), "First\nFirst\nSecond\n");
    }

    #[test]
    fn test_dimensions() {
        let mut rng = Random::from_seed(5);
        let fixed = random_test(&mut rng, 10, 4, false);
        assert_eq!(fixed.len(), 10);
        assert!(fixed.instances.iter().all(|r| r.values.len() == 4));

        let varied = random_test(&mut rng, 50, 4, true);
        assert!(varied.instances.iter().all(|r| (2..=4).contains(&r.values.len())));

        let wide = random_test(&mut rng, 50, 100, true);
        assert!(wide.instances.iter().all(|r| (70..=100).contains(&r.values.len())));
    }
}
