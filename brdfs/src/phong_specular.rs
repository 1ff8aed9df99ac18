//! Phong Specular BRDF

use super::*;
use core::error::Error;
use core::geometry::{Vector3f, REFERENCE_NORMAL};
use core::math::{max, Float};
use core::spectrum::Spectrum;

/// The specular component of the normalised Phong BRDF.
#[derive(Clone, Debug, PartialEq)]
pub struct PhongSpecular {
    /// Specular reflectance spectrum.
    specular_reflectivity: Spectrum,

    /// Specular exponent of the surface. 0 is dull; higher values give
    /// glossier surfaces with sharper specular reflections.
    specular_exponent: Float,
}

impl PhongSpecular {
    /// Create a new `PhongSpecular` model, validating the reflectivity.
    ///
    /// * `specular_reflectivity` - Specular reflectance spectrum.
    /// * `specular_exponent`     - Specular exponent of the surface.
    pub fn new(specular_reflectivity: Spectrum, specular_exponent: Float) -> Result<Self, Error> {
        specular_reflectivity.validate()?;
        Ok(Self {
            specular_reflectivity,
            specular_exponent,
        })
    }

    /// Returns the specular reflectivity spectrum.
    pub fn specular_reflectivity(&self) -> &Spectrum {
        &self.specular_reflectivity
    }

    /// Returns the specular exponent.
    pub fn specular_exponent(&self) -> Float {
        self.specular_exponent
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// The incident direction is mirrored about the fixed reference axis
    /// rather than a per-call normal; the cosine of the angle between the
    /// mirror direction and `wo` is raised to the specular exponent.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    pub fn f(&self, wi: &Vector3f, wo: &Vector3f) -> Spectrum {
        let mirrored = wi.mirror(&REFERENCE_NORMAL);
        let alpha = max(0.0, wo.dot(&mirrored));

        self.specular_reflectivity * alpha.powf(self.specular_exponent)
    }

    /// Returns the value of the distribution function restricted to a
    /// reflection class, or `None` when the model has no component of that
    /// class.
    ///
    /// * `wi`    - Incident direction.
    /// * `wo`    - Outgoing direction.
    /// * `class` - The requested reflection class.
    pub fn f_class(&self, wi: &Vector3f, wo: &Vector3f, class: ReflectionClass) -> Option<Spectrum> {
        if class == self.reflection_class() {
            Some(self.f(wi, wo))
        } else {
            None
        }
    }

    /// Mirrors the incident direction about the given normal; the weight is
    /// the specular reflectivity scaled by the exponent.
    ///
    /// * `wi`     - Incident direction.
    /// * `normal` - The surface normal.
    pub fn sample_f(&self, wi: &Vector3f, normal: &Vector3f) -> BrdfSample {
        BrdfSample::new(
            wi.reflect(normal),
            self.specular_reflectivity * self.specular_exponent,
        )
    }

    /// Returns the model's name.
    pub fn name(&self) -> &str {
        "PhongSpecularBRDF"
    }

    /// Returns the reflection class.
    pub fn reflection_class(&self) -> ReflectionClass {
        ReflectionClass::SPECULAR
    }

    /// Returns the model's parameters in construction order.
    pub fn parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::spectrum("Specular Reflectivity", &self.specular_reflectivity),
            Parameter::float("Specular Exponent", self.specular_exponent),
        ]
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
