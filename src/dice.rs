//! Randomness for dice rolls and question draws.
//!
//! The session never calls an ambient RNG; it owns a `RandomSource`. Any
//! `rand::RngCore` is one, so production code uses a `StdRng` seeded from the
//! platform (`getrandom`, which is `crypto.getRandomValues` in the browser)
//! while tests drive the session with scripted values.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::SessionError;

/// Faces on the die. Rolls are uniform in `1..=DIE_FACES`.
pub const DIE_FACES: u8 = 6;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Next index in `0..upper`. `upper` is always > 0.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

pub fn roll_die<S: RandomSource + ?Sized>(rng: &mut S) -> u8 {
    rng.next_index(DIE_FACES as usize) as u8 + 1
}

/// Reproducible generator, e.g. for replaying a session from a known seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn entropy_rng() -> Result<StdRng, SessionError> {
    let mut seed = <StdRng as SeedableRng>::Seed::default();
    getrandom::getrandom(&mut seed)?;
    Ok(StdRng::from_seed(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_on_the_die() {
        let mut rng = seeded_rng(7);
        let mut seen = [false; DIE_FACES as usize];
        for _ in 0..600 {
            let d = roll_die(&mut rng);
            assert!((1..=DIE_FACES).contains(&d), "rolled {}", d);
            seen[d as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s), "not every face came up: {:?}", seen);
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        let ra: Vec<u8> = (0..20).map(|_| roll_die(&mut a)).collect();
        let rb: Vec<u8> = (0..20).map(|_| roll_die(&mut b)).collect();
        assert_eq!(ra, rb);
    }

    #[test]
    fn entropy_rng_is_available_natively() {
        let mut rng = entropy_rng().expect("host entropy");
        assert!(rng.next_index(3) < 3);
    }
}
