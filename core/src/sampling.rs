//! Hemisphere sampling.

use crate::geometry::Vector3f;
use crate::math::{Float, INV_TWO_PI, TWO_PI};
use crate::rng::RNG;

/// Generates unit directions biased toward the upper hemisphere around the
/// positive x-axis.
///
/// The sampler is deterministic: a fixed seed reproduces an identical
/// sequence of directions, which the verifier relies on for reproducible
/// verdicts. Each independent verification should own its own sampler
/// instance.
pub struct HemisphereSampler {
    rng: RNG,
}

impl HemisphereSampler {
    /// Create a new `HemisphereSampler` seeded with the given sequence.
    ///
    /// * `seed` - The starting sequence for the random source.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RNG::new(seed),
        }
    }

    /// Returns one unit direction.
    ///
    /// Draws ξ1 ∈ [0, 1) and ξ2 ∈ [-1, 1); the azimuth is φ = ξ1·2π and the
    /// direction is normalize(ξ1, sin(φ)·(1-ξ2²), cos(φ)·(1-ξ2²)).
    pub fn sample(&mut self) -> Vector3f {
        let xi_1 = self.rng.uniform_float();
        let xi_2 = self.rng.uniform_float_signed();

        let phi = xi_1 * TWO_PI;
        let s = 1.0 - xi_2 * xi_2;

        Vector3f::new(xi_1, phi.sin() * s, phi.cos() * s).normalize()
    }
}

/// Returns the PDF for uniformly sampling a direction from a hemisphere.
#[inline]
pub fn uniform_hemisphere_pdf() -> Float {
    INV_TWO_PI
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
