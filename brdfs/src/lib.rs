//! Reflectance models.

mod common;
mod composite;
mod def;
mod lambertian;
mod phong_diffuse;
mod phong_specular;
mod shiny_diffuse;

// Re-export
pub use common::*;
pub use composite::*;
pub use def::*;
pub use lambertian::*;
pub use phong_diffuse::*;
pub use phong_specular::*;
pub use shiny_diffuse::*;

use core::geometry::Vector3f;
use core::spectrum::Spectrum;

/// The closed set of reflectance models.
///
/// Every variant implements the same capability surface; the enum keeps
/// dispatch exhaustive so a new variant cannot be added without extending
/// every evaluation path.
#[derive(Clone, Debug, PartialEq)]
pub enum Brdf {
    Lambertian(Lambertian),
    PhongDiffuse(PhongDiffuse),
    PhongSpecular(PhongSpecular),
    ShinyDiffuse(ShinyDiffuse),
    Composite(Composite),
}

impl Brdf {
    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// Both directions are unit vectors pointing away from the surface,
    /// toward the light source and the viewer respectively; callers are
    /// responsible for the convention.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    pub fn f(&self, wi: &Vector3f, wo: &Vector3f) -> Spectrum {
        match self {
            Brdf::Lambertian(brdf) => brdf.f(wi, wo),
            Brdf::PhongDiffuse(brdf) => brdf.f(wi, wo),
            Brdf::PhongSpecular(brdf) => brdf.f(wi, wo),
            Brdf::ShinyDiffuse(brdf) => brdf.f(wi, wo),
            Brdf::Composite(brdf) => brdf.f(wi, wo),
        }
    }

    /// Returns the value of the distribution function restricted to the
    /// requested reflection class, or `None` when the model has no matching
    /// component. `None` is a legitimate zero-contribution signal, not an
    /// error.
    ///
    /// * `wi`    - Incident direction.
    /// * `wo`    - Outgoing direction.
    /// * `class` - The requested reflection class.
    pub fn f_class(&self, wi: &Vector3f, wo: &Vector3f, class: ReflectionClass) -> Option<Spectrum> {
        match self {
            Brdf::Lambertian(brdf) => brdf.f_class(wi, wo, class),
            Brdf::PhongDiffuse(brdf) => brdf.f_class(wi, wo, class),
            Brdf::PhongSpecular(brdf) => brdf.f_class(wi, wo, class),
            Brdf::ShinyDiffuse(brdf) => brdf.f_class(wi, wo, class),
            Brdf::Composite(brdf) => brdf.f_class(wi, wo, class),
        }
    }

    /// Produces one outgoing direction by perfect mirror reflection of `wi`
    /// about `normal`, plus an unnormalized reflectance weight.
    ///
    /// * `wi`     - Incident direction.
    /// * `normal` - The surface normal.
    pub fn sample_f(&self, wi: &Vector3f, normal: &Vector3f) -> BrdfSample {
        match self {
            Brdf::Lambertian(brdf) => brdf.sample_f(wi, normal),
            Brdf::PhongDiffuse(brdf) => brdf.sample_f(wi, normal),
            Brdf::PhongSpecular(brdf) => brdf.sample_f(wi, normal),
            Brdf::ShinyDiffuse(brdf) => brdf.sample_f(wi, normal),
            Brdf::Composite(brdf) => brdf.sample_f(wi, normal),
        }
    }

    /// Returns the model's name. Simple variants report their fixed variant
    /// name; composites report their instance name.
    pub fn name(&self) -> &str {
        match self {
            Brdf::Lambertian(brdf) => brdf.name(),
            Brdf::PhongDiffuse(brdf) => brdf.name(),
            Brdf::PhongSpecular(brdf) => brdf.name(),
            Brdf::ShinyDiffuse(brdf) => brdf.name(),
            Brdf::Composite(brdf) => brdf.name(),
        }
    }

    /// Returns the model's reflection class; empty for composites, which
    /// delegate to their children.
    pub fn reflection_class(&self) -> ReflectionClass {
        match self {
            Brdf::Lambertian(brdf) => brdf.reflection_class(),
            Brdf::PhongDiffuse(brdf) => brdf.reflection_class(),
            Brdf::PhongSpecular(brdf) => brdf.reflection_class(),
            Brdf::ShinyDiffuse(brdf) => brdf.reflection_class(),
            Brdf::Composite(brdf) => brdf.reflection_class(),
        }
    }

    /// Returns the model's parameters as an ordered list of named, typed
    /// descriptions for UI and introspection.
    pub fn parameters(&self) -> Vec<Parameter> {
        match self {
            Brdf::Lambertian(brdf) => brdf.parameters(),
            Brdf::PhongDiffuse(brdf) => brdf.parameters(),
            Brdf::PhongSpecular(brdf) => brdf.parameters(),
            Brdf::ShinyDiffuse(brdf) => brdf.parameters(),
            Brdf::Composite(brdf) => brdf.parameters(),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
