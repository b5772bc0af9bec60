//! RNG module - choosing the next piece
//!
//! Every spawn draws uniformly from the definition set. The source is a trait
//! so tests and replays can feed a fixed sequence instead.
//!
//! Also provides a simple LCG so a seed reproduces a whole game.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Picks which definition the next spawn uses
pub trait PieceSource {
    /// Index into a definition set of length `len` (`len > 0`)
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform random pick, reproducible by seed
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SimpleRng,
    seed: u32,
}

impl RandomSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl PieceSource for RandomSource {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.next_range(len as u32) as usize
    }
}

/// Replays a fixed list of indices, cycling when it runs out
#[derive(Debug, Clone)]
pub struct SequenceSource {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }
}

impl PieceSource for SequenceSource {
    fn next_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let idx = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        idx % len.max(1)
    }
}
