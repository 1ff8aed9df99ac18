//! Phong Diffuse BRDF

use super::*;
use core::error::Error;
use core::geometry::Vector3f;
use core::math::INV_PI;
use core::spectrum::Spectrum;

/// The diffuse component of the normalised Phong BRDF.
///
/// Evaluates identically to [`Lambertian`](crate::Lambertian); it exists as a
/// distinct variant so definition files and introspection can name the Phong
/// diffuse lobe separately.
#[derive(Clone, Debug, PartialEq)]
pub struct PhongDiffuse {
    /// Diffuse reflectance spectrum.
    diffuse_reflectivity: Spectrum,
}

impl PhongDiffuse {
    /// Create a new `PhongDiffuse` model, validating the reflectivity.
    ///
    /// * `diffuse_reflectivity` - Diffuse reflectance spectrum.
    pub fn new(diffuse_reflectivity: Spectrum) -> Result<Self, Error> {
        diffuse_reflectivity.validate()?;
        Ok(Self {
            diffuse_reflectivity,
        })
    }

    /// Returns the diffuse reflectivity spectrum.
    pub fn diffuse_reflectivity(&self) -> &Spectrum {
        &self.diffuse_reflectivity
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions. Constant over all direction pairs.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    pub fn f(&self, _wi: &Vector3f, _wo: &Vector3f) -> Spectrum {
        self.diffuse_reflectivity * INV_PI
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
    /// the unscaled diffuse reflectivity.
    ///
    /// * `wi`     - Incident direction.
    /// * `normal` - The surface normal.
    pub fn sample_f(&self, wi: &Vector3f, normal: &Vector3f) -> BrdfSample {
        BrdfSample::new(wi.reflect(normal), self.diffuse_reflectivity)
    }

    /// Returns the model's name.
    pub fn name(&self) -> &str {
        "PhongDiffuseBRDF"
    }

    /// Returns the reflection class.
    pub fn reflection_class(&self) -> ReflectionClass {
        ReflectionClass::DIFFUSE
    }

    /// Returns the model's parameters in construction order.
    pub fn parameters(&self) -> Vec<Parameter> {
        vec![Parameter::spectrum(
            "Diffuse Reflectivity",
            &self.diffuse_reflectivity,
        )]
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
