//! Lambertian BRDF

use super::*;
use core::error::Error;
use core::geometry::Vector3f;
use core::math::INV_PI;
use core::spectrum::Spectrum;

/// BRDF for perfect diffuse surfaces that scatter incident illumination
/// equally in all directions.
#[derive(Clone, Debug, PartialEq)]
pub struct Lambertian {
    /// Reflectance spectrum giving the fraction of incident light that is
    /// scattered.
    reflectivity: Spectrum,
}

impl Lambertian {
    /// Create a new `Lambertian` model, validating the reflectivity.
    ///
    /// * `reflectivity` - Fraction of incident light that is scattered.
    pub fn new(reflectivity: Spectrum) -> Result<Self, Error> {
        reflectivity.validate()?;
        Ok(Self { reflectivity })
    }

    /// Returns the reflectivity spectrum.
    pub fn reflectivity(&self) -> &Spectrum {
        &self.reflectivity
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions. Constant over all direction pairs.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    pub fn f(&self, _wi: &Vector3f, _wo: &Vector3f) -> Spectrum {
        self.reflectivity * INV_PI
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

    /// Mirrors the incident direction about the given normal. The model
    /// declares no reflectance weight for sampled directions, so the weight
    /// is black.
    ///
    /// * `wi`     - Incident direction.
    /// * `normal` - The surface normal.
    pub fn sample_f(&self, wi: &Vector3f, normal: &Vector3f) -> BrdfSample {
        BrdfSample::new(wi.reflect(normal), Spectrum::black())
    }

    /// Returns the model's name.
    pub fn name(&self) -> &str {
        "LambertianBRDF"
    }

    /// Returns the reflection class.
    pub fn reflection_class(&self) -> ReflectionClass {
        ReflectionClass::DIFFUSE
    }

    /// Returns the model's parameters in construction order.
    pub fn parameters(&self) -> Vec<Parameter> {
        vec![Parameter::spectrum("Diffuse Reflectivity", &self.reflectivity)]
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use core::math::PI;

    #[test]
    fn f_is_reflectivity_over_pi() {
        let r = Spectrum::new(0.3, 0.6, 0.9);
        let brdf = Lambertian::new(r).unwrap();

        let wi = Vector3f::new(1.0, 0.0, 0.0);
        let wo = Vector3f::new(0.0, 1.0, 0.0);
        assert_eq!(brdf.f(&wi, &wo), r * (1.0 / PI));

        // Direction independence.
        let wi2 = Vector3f::new(0.5, 0.5, 0.7071).normalize();
        assert_eq!(brdf.f(&wi2, &wo), brdf.f(&wi, &wo));
    }

    #[test]
    fn construction_validates_reflectivity() {
        let err = Lambertian::new(Spectrum::new(1.2, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, core::error::Error::InvalidSpectrum(_)));
    }

    #[test]
    fn class_filtering() {
        let brdf = Lambertian::new(Spectrum::new(0.5, 0.5, 0.5)).unwrap();
        let wi = Vector3f::new(1.0, 0.0, 0.0);
        let wo = Vector3f::new(0.0, 1.0, 0.0);

        assert!(brdf.f_class(&wi, &wo, ReflectionClass::DIFFUSE).is_some());
        assert!(brdf.f_class(&wi, &wo, ReflectionClass::SPECULAR).is_none());
    }

    #[test]
    fn sample_weight_is_black() {
        let brdf = Lambertian::new(Spectrum::new(0.5, 0.5, 0.5)).unwrap();
        let wi = Vector3f::new(-1.0, 0.0, 0.0);
        let normal = Vector3f::new(1.0, 0.0, 0.0);

        let sample = brdf.sample_f(&wi, &normal);
        assert_eq!(sample.wo, Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(sample.f, Spectrum::black());
    }
}
