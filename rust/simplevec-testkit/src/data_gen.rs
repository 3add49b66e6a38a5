//! Seeded generators for random element values and container operation streams.

/// Generates `count` pseudo-random values from a fixed seed.
pub fn random_values(seed: u64, count: usize) -> Vec<i64> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count).map(|_| rng.i64(-1000..1000)).collect()
}

/// A single mutation applied to a growable sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecOp {
    PushBack(i64),
    Insert { index: usize, value: i64 },
    Erase { index: usize },
    PopBack,
    Clear,
    Resize(usize),
    Reserve(usize),
}

/// Produces a stream of operations that are valid for a sequence of a given length.
///
/// Appends and inserts dominate, so sequences tend to grow and exercise
/// reallocation.
pub struct OpGenerator {
    rng: fastrand::Rng,
}

impl OpGenerator {
    pub fn new(seed: u64) -> OpGenerator {
        OpGenerator {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Returns the next operation for a sequence that currently holds `len` elements.
    ///
    /// Operations that require a non-empty sequence are never produced for `len == 0`.
    pub fn next_op(&mut self, len: usize) -> VecOp {
        let value = self.rng.i64(-1000..1000);
        match self.rng.u32(0..100) {
            0..=39 => VecOp::PushBack(value),
            40..=64 => VecOp::Insert {
                index: self.rng.usize(0..=len),
                value,
            },
            65..=79 if len > 0 => VecOp::Erase {
                index: self.rng.usize(0..len),
            },
            80..=89 if len > 0 => VecOp::PopBack,
            90 => VecOp::Clear,
            91..=95 => VecOp::Resize(self.rng.usize(0..=len * 2 + 1)),
            96..=99 => VecOp::Reserve(self.rng.usize(0..=len * 2 + 1)),
            _ => VecOp::PushBack(value),
        }
    }
}
