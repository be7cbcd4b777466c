//! Test-case shapes and their text serialization.
//!
//! Every shape renders through `Display`, so a case written to a file, to
//! stdout or into a `String` is byte-identical.

use std::fmt;
use std::io::{self, Write};

use olymper_testlib::Random;

/// Inclusive value range a problem declares for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn draw(&self, rng: &mut Random) -> i64 {
        rng.next_int(self.min, self.max)
    }
}

/// One generated input instance, ready to be serialized once.
pub trait TestCase: fmt::Display {
    fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{self}")
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// A flat ordered sequence of integers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<i64>,
}

impl Sequence {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn handcrafted(values: &[i64]) -> Self {
        Self::new(values.to_vec())
    }

    /// Draw `size` elements uniformly from `bounds`.
    ///
    /// With `approximate`, the length itself is drawn from `[8*size/10, size]`.
    pub fn random(rng: &mut Random, size: usize, approximate: bool, bounds: Bounds) -> Self {
        let len = if approximate {
            rng.next_int((8 * size / 10) as i64, size as i64) as usize
        } else {
            size
        };
        Self::new((0..len).map(|_| bounds.draw(rng)).collect())
    }

    /// Redraw each element from `bounds` with probability `p`.
    ///
    /// Returns how many positions ended up with a different value.
    pub fn apply_noise(&mut self, rng: &mut Random, p: f64, bounds: Bounds) -> usize {
        let mut changed = 0;
        for value in &mut self.values {
            if rng.chance(p) {
                let fresh = bounds.draw(rng);
                if fresh != *value {
                    changed += 1;
                }
                *value = fresh;
            }
        }
        changed
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn all_within(&self, bounds: Bounds) -> bool {
        self.values.iter().all(|&v| bounds.contains(v))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.values.len())?;
        write_joined(f, &self.values)?;
        writeln!(f)
    }
}

impl TestCase for Sequence {}

/// A scalar paired with a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    pub scalar: i64,
    pub values: Vec<i64>,
}

impl Instance {
    pub fn new(scalar: i64, values: Vec<i64>) -> Self {
        Self { scalar, values }
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.scalar)?;
        write!(f, "{}", self.values.len())?;
        for v in &self.values {
            write!(f, " {v}")?;
        }
        writeln!(f)
    }
}

impl TestCase for Instance {}

/// Several instances in one multi-test file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    pub instances: Vec<Instance>,
}

impl Batch {
    pub fn new(instances: Vec<Instance>) -> Self {
        Self { instances }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.instances.len())?;
        for instance in &self.instances {
            write!(f, "{instance}")?;
        }
        Ok(())
    }
}

impl TestCase for Batch {}

fn write_joined(f: &mut fmt::Formatter<'_>, values: &[i64]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}
