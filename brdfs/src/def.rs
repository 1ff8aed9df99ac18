//! Model definition schema.

use super::*;
use core::math::Float;
use serde::{Deserialize, Serialize};

/// Whether a definition describes a single variant or a weighted composite.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefKind {
    Simple,
    Composite,
}

/// A complete model definition: the flat JSON schema consumed by the loader
/// and produced when serializing a model.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BrdfDef {
    /// Unique instance name.
    pub alias: String,

    /// Simple or composite.
    #[serde(rename = "type")]
    pub kind: DefKind,

    /// One component for simple definitions; the weighted children for
    /// composites.
    pub components: Vec<ComponentDef>,
}

/// One component of a model definition. Only the fields relevant to the
/// named variant are present; the loader reports any missing ones.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ComponentDef {
    /// The variant name, one of the five known variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Simple or composite; informational on output.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DefKind>,

    /// The component's weighting inside a composite; ignored for simple
    /// definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighting: Option<Float>,

    /// Lambertian reflectivity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflectivity: Option<[Float; 3]>,

    /// Phong-diffuse / shiny-diffuse reflectivity.
    #[serde(
        rename = "diffuseReflectivity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub diffuse_reflectivity: Option<[Float; 3]>,

    /// Phong-specular reflectivity.
    #[serde(
        rename = "specularReflectivity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub specular_reflectivity: Option<[Float; 3]>,

    /// Phong-specular exponent.
    #[serde(
        rename = "specularExponent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub specular_exponent: Option<Float>,

    /// Shiny-diffuse glossiness exponent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<Float>,

    /// Nested children when the component is itself a composite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ComponentDef>>,
}

impl Brdf {
    /// Serializes the model into its definition: the property bag that, fed
    /// back through the loader, reconstructs an equivalent model.
    ///
    /// * `alias` - Unique instance name for the definition.
    pub fn to_def(&self, alias: &str) -> BrdfDef {
        match self {
            Brdf::Composite(composite) => BrdfDef {
                alias: alias.to_string(),
                kind: DefKind::Composite,
                components: composite
                    .components()
                    .iter()
                    .map(|(child, weighting)| component_def(child, Some(*weighting)))
                    .collect(),
            },
            _ => BrdfDef {
                alias: alias.to_string(),
                kind: DefKind::Simple,
                components: vec![component_def(self, None)],
            },
        }
    }
}

/// Builds the definition entry for one model.
///
/// * `brdf`      - The model to describe.
/// * `weighting` - The model's weighting when it is a composite child.
fn component_def(brdf: &Brdf, weighting: Option<Float>) -> ComponentDef {
    let mut def = ComponentDef {
        name: Some(brdf.name().to_string()),
        kind: Some(DefKind::Simple),
        weighting,
        ..ComponentDef::default()
    };

    match brdf {
        Brdf::Lambertian(model) => {
            def.reflectivity = Some((*model.reflectivity()).into());
        }
        Brdf::PhongDiffuse(model) => {
            def.diffuse_reflectivity = Some((*model.diffuse_reflectivity()).into());
        }
        Brdf::PhongSpecular(model) => {
            def.specular_reflectivity = Some((*model.specular_reflectivity()).into());
            def.specular_exponent = Some(model.specular_exponent());
        }
        Brdf::ShinyDiffuse(model) => {
            def.diffuse_reflectivity = Some((*model.diffuse_reflectivity()).into());
            def.reflection = Some(model.reflection());
        }
        Brdf::Composite(composite) => {
            def.kind = Some(DefKind::Composite);
            def.components = Some(
                composite
                    .components()
                    .iter()
                    .map(|(child, w)| component_def(child, Some(*w)))
                    .collect(),
            );
        }
    }

    def
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use core::spectrum::Spectrum;

    #[test]
    fn simple_model_definition() {
        let brdf = Brdf::PhongSpecular(
            PhongSpecular::new(Spectrum::new(0.2, 0.2, 0.2), 32.0).unwrap(),
        );
        let def = brdf.to_def("glossy");

        assert_eq!(def.alias, "glossy");
        assert_eq!(def.kind, DefKind::Simple);
        assert_eq!(def.components.len(), 1);

        let component = &def.components[0];
        assert_eq!(component.name.as_deref(), Some("PhongSpecularBRDF"));
        assert_eq!(component.specular_reflectivity, Some([0.2, 0.2, 0.2]));
        assert_eq!(component.specular_exponent, Some(32.0));
        assert_eq!(component.weighting, None);
    }

    #[test]
    fn composite_definition_carries_weightings() {
        let lambertian =
            Brdf::Lambertian(Lambertian::new(Spectrum::new(0.5, 0.5, 0.5)).unwrap());
        let shiny = Brdf::ShinyDiffuse(
            ShinyDiffuse::new(Spectrum::new(0.3, 0.3, 0.3), 2.0).unwrap(),
        );
        let composite = Brdf::Composite(
            Composite::new("Blend", vec![(lambertian, 0.7), (shiny, 0.3)]).unwrap(),
        );

        let def = composite.to_def("Blend");
        assert_eq!(def.kind, DefKind::Composite);
        assert_eq!(def.components.len(), 2);
        assert_eq!(def.components[0].weighting, Some(0.7));
        assert_eq!(def.components[1].weighting, Some(0.3));
        assert_eq!(def.components[1].reflection, Some(2.0));
    }

    #[test]
    fn nested_composite_definition() {
        let inner = Brdf::Composite(
            Composite::new(
                "Inner",
                vec![(
                    Brdf::Lambertian(Lambertian::new(Spectrum::new(0.1, 0.1, 0.1)).unwrap()),
                    1.0,
                )],
            )
            .unwrap(),
        );
        let outer = Brdf::Composite(Composite::new("Outer", vec![(inner, 0.5)]).unwrap());

        let def = outer.to_def("Outer");
        let child = &def.components[0];
        assert_eq!(child.kind, Some(DefKind::Composite));
        assert!(child.components.is_some());
        assert_eq!(child.components.as_ref().unwrap().len(), 1);
    }
}
