//! RNG module - piece selection
//!
//! The default randomizer draws each spawn independently and uniformly from
//! the seven kinds, so droughts and repeats are possible. The 7-bag
//! randomizer is available as an opt-in: each bag holds one of every kind,
//! shuffled, and is drawn empty before the next is filled.
//!
//! Both run on a small LCG so a seed replays the same sequence.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would stay stuck near zero for the first draws
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits: the low bits of an LCG cycle with a short period
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// How spawn kinds are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Independent uniform draw per spawn
    #[default]
    Uniform,
    /// Shuffled bags of all seven kinds
    SevenBag,
}

impl Randomizer {
    /// Parse a randomizer name (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "seven-bag" => Some(Randomizer::SevenBag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::SevenBag => "bag",
        }
    }
}

/// Source of spawn kinds
#[derive(Debug, Clone)]
pub struct PieceSource {
    randomizer: Randomizer,
    rng: SimpleRng,
    /// Remaining kinds of the current bag (7-bag only)
    bag: ArrayVec<PieceKind, 7>,
}

impl PieceSource {
    pub fn new(randomizer: Randomizer, seed: u32) -> Self {
        Self {
            randomizer,
            rng: SimpleRng::new(seed),
            bag: ArrayVec::new(),
        }
    }

    /// Draw the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => {
                let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            Randomizer::SevenBag => {
                if self.bag.is_empty() {
                    self.refill_bag();
                }
                // refill_bag always leaves seven kinds behind
                self.bag.pop().unwrap_or(PieceKind::T)
            }
        }
    }

    fn refill_bag(&mut self) {
        self.bag = ArrayVec::from(PieceKind::ALL);
        self.rng.shuffle(&mut self.bag);
    }

    /// Remaining kinds in the current bag (empty for the uniform randomizer)
    pub fn bag(&self) -> &[PieceKind] {
        &self.bag
    }
}
