//! Deterministic pseudo-random byte generator.
//!
//! The generator is an infinite [`ByteSource`]: every pull fills the whole
//! buffer, and the bytes are a pure function of the seed and the sizes of
//! the pulls made so far.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::error::Result;
use crate::source::{ByteSource, Pull};

/// Bytes written per PRNG draw.
const WORD: usize = 8;

/// Create a seeded byte generator.
///
/// Every `i64` is a valid seed. Two generators built from the same seed and
/// pulled with the same buffer sizes emit identical bytes.
///
/// ```
/// use bytekit_core::{random_bytes, ByteSource};
///
/// let mut a = random_bytes(42);
/// let mut b = random_bytes(42);
/// let (mut x, mut y) = ([0u8; 16], [0u8; 16]);
/// a.pull(&mut x).unwrap();
/// b.pull(&mut y).unwrap();
/// assert_eq!(x, y);
/// ```
pub fn random_bytes(seed: i64) -> impl ByteSource + Send {
    Generator::new(seed)
}

struct Generator {
    seed: i64,
    rng: StdRng,
}

impl Generator {
    fn new(seed: i64) -> Self {
        tracing::trace!(seed, "byte generator created");
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }
}

impl ByteSource for Generator {
    fn pull(&mut self, buf: &mut [u8]) -> Result<Pull> {
        // One draw per chunk; a short trailing chunk takes the low bytes.
        for chunk in buf.chunks_mut(WORD) {
            let word = self.rng.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
        Ok(Pull::more(buf.len()))
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator").field("seed", &self.seed).finish()
    }
}
