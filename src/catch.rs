//! Catch roll
//!
//! The chance of catching a creature falls linearly with its base experience.

use rand::Rng;

/// Base experience at which the catch chance reaches zero.
pub const MAX_BASE_EXPERIENCE: u32 = 609;

/// Probability in `[0, 1]` of catching a creature with `base_experience`.
pub fn catch_chance(base_experience: u32) -> f64 {
    let max = f64::from(MAX_BASE_EXPERIENCE);
    ((max - f64::from(base_experience)) / max).clamp(0.0, 1.0)
}

/// Rolls once against [`catch_chance`].
pub fn attempt_catch<R: Rng + ?Sized>(rng: &mut R, base_experience: u32) -> bool {
    catch_chance(base_experience) > rng.gen::<f64>()
}
