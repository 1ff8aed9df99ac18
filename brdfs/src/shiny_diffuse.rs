//! Shiny Diffuse BRDF

use super::*;
use core::error::Error;
use core::geometry::{Vector3f, REFERENCE_NORMAL};
use core::math::{max, Float, INV_PI};
use core::spectrum::Spectrum;

/// A diffuse surface with an optional glossy lobe, after the ShinyDiffuse
/// material found in the Sunflow renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ShinyDiffuse {
    /// Diffuse reflectance spectrum.
    diffuse_reflectivity: Spectrum,

    /// Glossiness exponent. 0 disables the specular term; higher values give
    /// sharper specular reflections.
    reflection: Float,
}

impl ShinyDiffuse {
    /// Create a new `ShinyDiffuse` model, validating the reflectivity.
    ///
    /// * `diffuse_reflectivity` - Diffuse reflectance spectrum.
    /// * `reflection`           - Glossiness exponent.
    pub fn new(diffuse_reflectivity: Spectrum, reflection: Float) -> Result<Self, Error> {
        diffuse_reflectivity.validate()?;
        Ok(Self {
            diffuse_reflectivity,
            reflection,
        })
    }

    /// Returns the diffuse reflectivity spectrum.
    pub fn diffuse_reflectivity(&self) -> &Spectrum {
        &self.diffuse_reflectivity
    }

    /// Returns the glossiness exponent.
    pub fn reflection(&self) -> Float {
        self.reflection
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// The diffuse term is always present. When `reflection` is non-zero a
    /// specular term (the fixed-reference-axis mirror formula raised to
    /// `reflection`) is added on top. The two terms are summed directly,
    /// without joint normalization.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    pub fn f(&self, wi: &Vector3f, wo: &Vector3f) -> Spectrum {
        let diffuse = self.diffuse_reflectivity * INV_PI;

        if self.reflection == 0.0 {
            return diffuse;
        }

        let mirrored = wi.mirror(&REFERENCE_NORMAL);
        let alpha = max(0.0, wo.dot(&mirrored));
        let specular = self.diffuse_reflectivity * alpha.powf(self.reflection);

        diffuse + specular
    }

    /// Returns the value of the distribution function restricted to a
    /// reflection class.
    ///
    /// The diffuse lobe evaluates as usual; the specular lobe evaluates to
    /// exact black since the probability of the incident and outgoing
    /// directions being perfectly specular is zero. Other class requests have
    /// no matching component.
    ///
    /// * `wi`    - Incident direction.
    /// * `wo`    - Outgoing direction.
    /// * `class` - The requested reflection class.
    pub fn f_class(
        &self,
        _wi: &Vector3f,
        _wo: &Vector3f,
        class: ReflectionClass,
    ) -> Option<Spectrum> {
        if class == ReflectionClass::DIFFUSE {
            Some(self.diffuse_reflectivity * INV_PI)
        } else if class == ReflectionClass::SPECULAR {
            Some(Spectrum::black())
        } else {
            None
        }
    }

    /// Mirrors the incident direction about the given normal; the weight is
    /// the diffuse reflectivity scaled by the glossiness exponent.
    ///
    /// * `wi`     - Incident direction.
    /// * `normal` - The surface normal.
    pub fn sample_f(&self, wi: &Vector3f, normal: &Vector3f) -> BrdfSample {
        BrdfSample::new(
            wi.reflect(normal),
            self.diffuse_reflectivity * self.reflection,
        )
    }

    /// Returns the model's name.
    pub fn name(&self) -> &str {
        "ShinyDiffuseBRDF"
    }

    /// Returns the reflection class.
    pub fn reflection_class(&self) -> ReflectionClass {
        ReflectionClass::BOTH
    }

    /// Returns the model's parameters in construction order.
    pub fn parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::spectrum("Diffuse Reflectivity", &self.diffuse_reflectivity),
            Parameter::float("Reflection", self.reflection),
        ]
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
