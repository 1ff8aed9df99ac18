//! Composite BRDF

use super::*;
use core::error::Error;
use core::geometry::Vector3f;
use core::math::Float;
use core::spectrum::Spectrum;

/// A reflectance model built from weighted sub-models.
///
/// Children are owned exclusively and evaluated in registration order, which
/// fixes the floating-point summation order for reproducibility. Weights are
/// unconstrained and need not sum to 1. A child may itself be a composite;
/// the assembly stage guarantees the tree is acyclic.
#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    /// The composite's instance name.
    name: String,

    /// Sub-models and their weightings, in registration order.
    components: Vec<(Brdf, Float)>,
}

impl Composite {
    /// Create a new `Composite` from weighted sub-models.
    ///
    /// * `name`       - The composite's instance name.
    /// * `components` - Sub-models and their weightings, in order.
    pub fn new(name: &str, components: Vec<(Brdf, Float)>) -> Result<Self, Error> {
        if components.is_empty() {
            return Err(Error::MissingProperty("components".to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            components,
        })
    }

    /// Returns the sub-models and their weightings.
    pub fn components(&self) -> &[(Brdf, Float)] {
        &self.components
    }

    /// Returns the weighted sum of the children's distribution functions, in
    /// registration order.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    pub fn f(&self, wi: &Vector3f, wo: &Vector3f) -> Spectrum {
        let mut reflectance = Spectrum::black();

        for (child, weighting) in &self.components {
            reflectance.add_spectrum(&(child.f(wi, wo) * *weighting));
        }

        reflectance
    }

    /// Returns the weighted sum over children whose reflection class matches
    /// the request, or `None` when no child matches.
    ///
    /// * `wi`    - Incident direction.
    /// * `wo`    - Outgoing direction.
    /// * `class` - The requested reflection class.
    pub fn f_class(&self, wi: &Vector3f, wo: &Vector3f, class: ReflectionClass) -> Option<Spectrum> {
        let mut reflectance = Spectrum::black();
        let mut matched = false;

        for (child, weighting) in &self.components {
            if child.reflection_class() == class {
                reflectance.add_spectrum(&(child.f(wi, wo) * *weighting));
                matched = true;
            }
        }

        matched.then_some(reflectance)
    }

    /// Samples every child and averages the results: the sampled directions
    /// and the weighted spectra are summed, then both sums are divided by
    /// the child count. An unweighted arithmetic mean, not a probabilistic
    /// selection; see [`Composite::select_weighted`] for the latter.
    ///
    /// * `wi`     - Incident direction.
    /// * `normal` - The surface normal.
    pub fn sample_f(&self, wi: &Vector3f, normal: &Vector3f) -> BrdfSample {
        let mut wo = Vector3f::zero();
        let mut reflectance = Spectrum::black();

        for (child, weighting) in &self.components {
            let sample = child.sample_f(wi, normal);
            wo += sample.wo;
            reflectance.add_spectrum(&(sample.f * *weighting));
        }

        let n = self.components.len() as Float;
        BrdfSample::new(wo / n, reflectance / n)
    }

    /// Selects one child by stochastic weighted choice: weights are
    /// normalized to the total and `u` is located in the cumulative ranges.
    ///
    /// * `u` - A uniform value in [0, 1).
    pub fn select_weighted(&self, u: Float) -> &Brdf {
        let total: Float = self.components.iter().map(|(_, w)| *w).sum();
        let mut cumulative = 0.0;

        for (child, weighting) in &self.components {
            cumulative += *weighting / total;
            if u < cumulative {
                return child;
            }
        }

        // Guard against accumulated rounding in the cumulative sum.
        &self.components[self.components.len() - 1].0
    }

    /// Returns the composite's instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Composites carry no reflection class of their own; evaluation
    /// delegates to the children.
    pub fn reflection_class(&self) -> ReflectionClass {
        ReflectionClass::empty()
    }

    /// Returns every child's parameters, each suffixed with the child's name
    /// to keep entries distinct, in registration order.
    pub fn parameters(&self) -> Vec<Parameter> {
        let mut parameters = Vec::new();

        for (child, _) in &self.components {
            for p in child.parameters() {
                parameters.push(Parameter {
                    kind: p.kind,
                    name: format!("{}_{}", p.name, child.name()),
                    value: p.value,
                });
            }
        }

        parameters
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use core::math::INV_PI;
    use float_cmp::approx_eq;

    fn lambertian(r: Float) -> Brdf {
        Brdf::Lambertian(Lambertian::new(Spectrum::new(r, r, r)).unwrap())
    }

    #[test]
    fn weighted_sum_collapses_for_identical_children() {
        let composite = Composite::new(
            "TwoLambertians",
            vec![(lambertian(1.0), 0.5), (lambertian(1.0), 0.5)],
        )
        .unwrap();

        let wi = Vector3f::new(1.0, 0.0, 0.0);
        let wo = Vector3f::new(0.0, 1.0, 0.0);

        let value = composite.f(&wi, &wo);
        assert!(approx_eq!(f32, value.r, INV_PI, epsilon = 1e-6));
        assert!(approx_eq!(f32, value.g, INV_PI, epsilon = 1e-6));
        assert!(approx_eq!(f32, value.b, INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn empty_composite_is_rejected() {
        let err = Composite::new("Empty", Vec::new()).unwrap_err();
        assert!(matches!(err, Error::MissingProperty(_)));
    }

    #[test]
    fn class_filter_signals_no_matching_component() {
        let composite = Composite::new("DiffuseOnly", vec![(lambertian(0.5), 1.0)]).unwrap();

        let wi = Vector3f::new(1.0, 0.0, 0.0);
        let wo = Vector3f::new(0.0, 1.0, 0.0);

        assert!(composite
            .f_class(&wi, &wo, ReflectionClass::SPECULAR)
            .is_none());
        assert!(composite
            .f_class(&wi, &wo, ReflectionClass::DIFFUSE)
            .is_some());
    }

    #[test]
    fn sample_f_averages_children() {
        let phong = Brdf::PhongDiffuse(
            PhongDiffuse::new(Spectrum::new(0.4, 0.4, 0.4)).unwrap(),
        );
        let composite =
            Composite::new("Mean", vec![(phong.clone(), 1.0), (phong, 1.0)]).unwrap();

        let wi = Vector3f::new(-1.0, 0.0, 0.0);
        let normal = Vector3f::new(1.0, 0.0, 0.0);
        let sample = composite.sample_f(&wi, &normal);

        // Two identical children: the mean reproduces a single child's
        // direction and weighted spectrum.
        assert_eq!(sample.wo, Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(sample.f, Spectrum::new(0.4, 0.4, 0.4));
    }

    #[test]
    fn select_weighted_respects_cumulative_ranges() {
        let composite = Composite::new(
            "Select",
            vec![(lambertian(0.1), 1.0), (lambertian(0.9), 3.0)],
        )
        .unwrap();

        // Normalized ranges: [0, 0.25) and [0.25, 1).
        let first = composite.select_weighted(0.1);
        let second = composite.select_weighted(0.9);

        match (first, second) {
            (Brdf::Lambertian(a), Brdf::Lambertian(b)) => {
                assert_eq!(a.reflectivity().r, 0.1);
                assert_eq!(b.reflectivity().r, 0.9);
            }
            _ => panic!("expected Lambertian children"),
        }
    }

    #[test]
    fn parameters_are_suffixed_with_child_names() {
        let composite = Composite::new("Named", vec![(lambertian(0.5), 1.0)]).unwrap();
        let parameters = composite.parameters();

        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name, "Diffuse Reflectivity_LambertianBRDF");
    }
}
