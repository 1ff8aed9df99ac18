//! Common reflectance-model types.

use bitflags::bitflags;
use core::geometry::Vector3f;
use core::math::Float;
use core::spectrum::Spectrum;
use std::fmt;

bitflags! {
    /// Classes of reflection a model contributes to.
    ///
    /// Simple diffuse models carry `DIFFUSE`, the Phong specular lobe carries
    /// `SPECULAR`, and shiny-diffuse carries both. Composites carry no class
    /// of their own; they delegate to their children.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct ReflectionClass: u8 {
        const DIFFUSE = 0b00000001;
        const SPECULAR = 0b00000010;
        const BOTH = Self::DIFFUSE.bits() | Self::SPECULAR.bits();
    }
}

impl fmt::Display for ReflectionClass {
    /// Formats the class the way definition files spell it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if *self == ReflectionClass::BOTH {
            "both"
        } else if *self == ReflectionClass::DIFFUSE {
            "diffuse"
        } else if *self == ReflectionClass::SPECULAR {
            "specular"
        } else {
            "none"
        };
        write!(f, "{name}")
    }
}

/// Stores the result of sampling a reflectance model: the mirrored outgoing
/// direction and its unnormalized reflectance weight.
#[derive(Copy, Clone, Default)]
pub struct BrdfSample {
    /// The sampled outgoing direction.
    pub wo: Vector3f,

    /// The reflectance weight associated with the direction. Not divided by
    /// a probability density; the sampling is a deterministic mirror
    /// reflection, not importance sampling.
    pub f: Spectrum,
}

impl BrdfSample {
    /// Create a new `BrdfSample`.
    ///
    /// * `wo` - The sampled outgoing direction.
    /// * `f`  - The reflectance weight.
    pub fn new(wo: Vector3f, f: Spectrum) -> Self {
        Self { wo, f }
    }
}

/// The value type of an introspected model parameter.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParameterKind {
    /// An RGB reflectivity triple.
    Spectrum,

    /// A scalar value.
    Float,
}

/// A named, typed model parameter for UI and introspection purposes.
///
/// Models report their parameters as an ordered list matching their
/// construction order.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    /// The parameter's value type.
    pub kind: ParameterKind,

    /// Human-readable parameter name.
    pub name: String,

    /// The parameter's value in textual form.
    pub value: String,
}

impl Parameter {
    /// Create a new spectrum-valued parameter.
    ///
    /// * `name`  - Human-readable parameter name.
    /// * `value` - The spectrum value.
    pub fn spectrum(name: &str, value: &Spectrum) -> Self {
        Self {
            kind: ParameterKind::Spectrum,
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a new float-valued parameter.
    ///
    /// * `name`  - Human-readable parameter name.
    /// * `value` - The scalar value.
    pub fn float(name: &str, value: Float) -> Self {
        Self {
            kind: ParameterKind::Float,
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
