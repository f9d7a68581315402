//! sources of pseudo-random bits
//!
//! the generator never touches a global random state: it is handed something
//! that implements [`BitSource`], which makes it trivial to swap the real,
//! time-seeded, source for a [`FixedSource`] in tests.
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::debug;

/// a single binary digit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }
}

impl From<u32> for Bit {
    /// only the parity of the integer is kept
    fn from(x: u32) -> Self {
        if x % 2 == 0 {
            Bit::Zero
        } else {
            Bit::One
        }
    }
}

impl std::fmt::Display for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// anything that can produce the next bit of a sequence
pub trait BitSource {
    fn next_bit(&mut self) -> Bit;
}

impl<S: BitSource + ?Sized> BitSource for Box<S> {
    fn next_bit(&mut self) -> Bit {
        (**self).next_bit()
    }
}

/// draws a 32-bit integer and reduces it modulo 2
#[derive(Debug, Clone)]
pub struct ModuloSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> ModuloSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> BitSource for ModuloSource<R> {
    fn next_bit(&mut self) -> Bit {
        Bit::from(self.rng.next_u32())
    }
}

/// draws a float in `[0, 1)`, scales it by 2 and truncates it
#[derive(Debug, Clone)]
pub struct ScaledSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> ScaledSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> BitSource for ScaledSource<R> {
    fn next_bit(&mut self) -> Bit {
        let x: f64 = self.rng.gen();
        if (x * 2.0) as u32 == 0 {
            Bit::Zero
        } else {
            Bit::One
        }
    }
}

/// cycles over a fixed list of bits, forever
///
/// an empty list yields zeros.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    bits: Vec<Bit>,
    index: usize,
}

impl FixedSource {
    pub fn new(bits: Vec<Bit>) -> Self {
        Self { bits, index: 0 }
    }

    pub fn constant(bit: Bit) -> Self {
        Self::new(vec![bit])
    }
}

impl BitSource for FixedSource {
    fn next_bit(&mut self) -> Bit {
        if self.bits.is_empty() {
            return Bit::Zero;
        }
        let bit = self.bits[self.index];
        self.index = (self.index + 1) % self.bits.len();
        bit
    }
}

/// the way a pseudo-random draw is reduced to a single bit
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// `x % 2` on a 32-bit integer
    #[default]
    Modulo,
    /// `floor(2 * u)` on a float `u` in `[0, 1)`
    Scaled,
}

impl Method {
    /// builds a source for this method on top of any random number generator
    pub fn with_rng<R: RngCore + 'static>(self, rng: R) -> Box<dyn BitSource> {
        match self {
            Method::Modulo => Box::new(ModuloSource::new(rng)),
            Method::Scaled => Box::new(ScaledSource::new(rng)),
        }
    }

    /// builds a source seeded once from the wall clock, see [`time_seed`]
    pub fn time_seeded(self) -> Box<dyn BitSource> {
        let seed = time_seed();
        debug!("seeding {} source with {}", self, seed);
        self.with_rng(StdRng::seed_from_u64(seed))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Method::Modulo => "modulo",
            Method::Scaled => "scaled",
        };
        write!(f, "{}", repr)
    }
}

/// the current time, in seconds since the Unix epoch
///
/// a clock set before the epoch gives a seed of `0`.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
