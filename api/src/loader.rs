//! Definition parsing and model construction.

use brdfs::{
    Brdf, BrdfDef, ComponentDef, Composite, DefKind, Lambertian, PhongDiffuse, PhongSpecular,
    ShinyDiffuse,
};
use core::error::Error;
use core::math::Float;
use core::spectrum::Spectrum;

/// Parses a definition from its JSON text.
///
/// * `json` - The definition text.
pub fn parse(json: &str) -> Result<BrdfDef, Error> {
    serde_json::from_str(json).map_err(|e| Error::MalformedDefinition(e.to_string()))
}

/// Prints a definition as JSON text. The output re-parses to an equivalent
/// definition.
///
/// * `def` - The definition to print.
pub fn to_json(def: &BrdfDef) -> Result<String, Error> {
    serde_json::to_string_pretty(def).map_err(|e| Error::MalformedDefinition(e.to_string()))
}

/// Builds a reflectance model from a parsed definition.
///
/// A `simple` definition builds its single component; a `composite`
/// definition builds every component with its weighting, in order. Errors
/// abort only this definition.
///
/// * `def` - The parsed definition.
pub fn build(def: &BrdfDef) -> Result<Brdf, Error> {
    match def.kind {
        DefKind::Simple => {
            let component = def
                .components
                .first()
                .ok_or_else(|| Error::MissingProperty("components[0]".to_string()))?;
            build_component(component, &def.alias)
        }
        DefKind::Composite => build_composite(&def.alias, &def.components),
    }
}

/// Builds one component of a definition, recursing into nested composites.
///
/// * `component` - The component definition.
/// * `alias`     - The enclosing definition's alias, used to name nested
///                 composites.
pub fn build_component(component: &ComponentDef, alias: &str) -> Result<Brdf, Error> {
    // A component carrying its own children is a nested composite
    // regardless of its name.
    if let Some(children) = &component.components {
        let name = component.name.as_deref().unwrap_or(alias);
        return build_composite(name, children);
    }

    let name = component
        .name
        .as_deref()
        .ok_or_else(|| Error::MissingProperty("name".to_string()))?;

    match name {
        "LambertianBRDF" => {
            let reflectivity = spectrum_field(&component.reflectivity, "reflectivity")?;
            Ok(Brdf::Lambertian(Lambertian::new(reflectivity)?))
        }
        "PhongDiffuseBRDF" => {
            let reflectivity =
                spectrum_field(&component.diffuse_reflectivity, "diffuseReflectivity")?;
            Ok(Brdf::PhongDiffuse(PhongDiffuse::new(reflectivity)?))
        }
        "PhongSpecularBRDF" => {
            let reflectivity =
                spectrum_field(&component.specular_reflectivity, "specularReflectivity")?;
            let exponent = float_field(&component.specular_exponent, "specularExponent")?;
            Ok(Brdf::PhongSpecular(PhongSpecular::new(
                reflectivity,
                exponent,
            )?))
        }
        "ShinyDiffuseBRDF" => {
            let reflectivity =
                spectrum_field(&component.diffuse_reflectivity, "diffuseReflectivity")?;
            let reflection = float_field(&component.reflection, "reflection")?;
            Ok(Brdf::ShinyDiffuse(ShinyDiffuse::new(
                reflectivity,
                reflection,
            )?))
        }
        _ => Err(Error::UnknownVariant(name.to_string())),
    }
}

/// Builds a composite from its component list.
///
/// * `name`       - The composite's instance name.
/// * `components` - The component definitions, in order.
fn build_composite(name: &str, components: &[ComponentDef]) -> Result<Brdf, Error> {
    let mut children = Vec::with_capacity(components.len());

    for component in components {
        let weighting = float_field(&component.weighting, "weighting")?;
        let child = build_component(component, name)?;
        children.push((child, weighting));
    }

    Ok(Brdf::Composite(Composite::new(name, children)?))
}

/// Extracts a required `[r, g, b]` field as a spectrum.
///
/// * `field`    - The optional field value.
/// * `property` - The property name for error reporting.
fn spectrum_field(field: &Option<[Float; 3]>, property: &str) -> Result<Spectrum, Error> {
    field
        .map(Spectrum::from)
        .ok_or_else(|| Error::MissingProperty(property.to_string()))
}

/// Extracts a required scalar field.
///
/// * `field`    - The optional field value.
/// * `property` - The property name for error reporting.
fn float_field(field: &Option<Float>, property: &str) -> Result<Float, Error> {
    field.ok_or_else(|| Error::MissingProperty(property.to_string()))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use brdfs::ReflectionClass;
    use core::geometry::Vector3f;
    use float_cmp::approx_eq;

    const LAMBERTIAN_JSON: &str = r#"{
        "alias": "matte",
        "type": "simple",
        "components": [
            { "name": "LambertianBRDF", "type": "simple", "reflectivity": [0.5, 0.5, 0.5] }
        ]
    }"#;

    const COMPOSITE_JSON: &str = r#"{
        "alias": "blend",
        "type": "composite",
        "components": [
            { "name": "LambertianBRDF", "weighting": 0.6, "reflectivity": [0.4, 0.4, 0.4] },
            { "name": "PhongSpecularBRDF", "weighting": 0.4,
              "specularReflectivity": [0.2, 0.2, 0.2], "specularExponent": 16.0 }
        ]
    }"#;

    #[test]
    fn parses_and_builds_a_simple_definition() {
        let def = parse(LAMBERTIAN_JSON).unwrap();
        assert_eq!(def.alias, "matte");

        let brdf = build(&def).unwrap();
        assert_eq!(brdf.name(), "LambertianBRDF");
        assert_eq!(brdf.reflection_class(), ReflectionClass::DIFFUSE);
    }

    #[test]
    fn parses_and_builds_a_composite_definition() {
        let def = parse(COMPOSITE_JSON).unwrap();
        let brdf = build(&def).unwrap();

        assert_eq!(brdf.name(), "blend");
        match &brdf {
            Brdf::Composite(composite) => assert_eq!(composite.components().len(), 2),
            _ => panic!("expected a composite"),
        }
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse("{ not json").unwrap_err();
        assert!(matches!(err, Error::MalformedDefinition(_)));
    }

    #[test]
    fn missing_fields_are_reported() {
        let def = parse(
            r#"{ "alias": "broken", "type": "simple",
                 "components": [ { "name": "PhongSpecularBRDF",
                                   "specularReflectivity": [0.2, 0.2, 0.2] } ] }"#,
        )
        .unwrap();

        let err = build(&def).unwrap_err();
        assert_eq!(err, Error::MissingProperty("specularExponent".to_string()));
    }

    #[test]
    fn unknown_variants_are_reported() {
        let def = parse(
            r#"{ "alias": "mystery", "type": "simple",
                 "components": [ { "name": "OrenNayarBRDF" } ] }"#,
        )
        .unwrap();

        let err = build(&def).unwrap_err();
        assert_eq!(err, Error::UnknownVariant("OrenNayarBRDF".to_string()));
    }

    #[test]
    fn out_of_range_reflectivity_is_reported() {
        let def = parse(
            r#"{ "alias": "hot", "type": "simple",
                 "components": [ { "name": "LambertianBRDF",
                                   "reflectivity": [1.5, 0.5, 0.5] } ] }"#,
        )
        .unwrap();

        let err = build(&def).unwrap_err();
        assert!(matches!(err, Error::InvalidSpectrum(_)));
    }

    #[test]
    fn composite_children_require_weightings() {
        let def = parse(
            r#"{ "alias": "unweighted", "type": "composite",
                 "components": [ { "name": "LambertianBRDF",
                                   "reflectivity": [0.5, 0.5, 0.5] } ] }"#,
        )
        .unwrap();

        let err = build(&def).unwrap_err();
        assert_eq!(err, Error::MissingProperty("weighting".to_string()));
    }

    #[test]
    fn phong_specular_round_trips_through_serialization() {
        let brdf = Brdf::PhongSpecular(
            PhongSpecular::new(Spectrum::new(0.2, 0.2, 0.2), 32.0).unwrap(),
        );

        let json = to_json(&brdf.to_def("glossy")).unwrap();
        let rebuilt = build(&parse(&json).unwrap()).unwrap();

        assert_eq!(rebuilt.parameters(), brdf.parameters());

        let wi = Vector3f::new(-1.0, 0.2, 0.1).normalize();
        let wo = Vector3f::new(0.9, 0.3, 0.1).normalize();
        let original = brdf.f(&wi, &wo);
        let reparsed = rebuilt.f(&wi, &wo);
        assert!(approx_eq!(f32, original.r, reparsed.r, epsilon = 1e-6));
        assert!(approx_eq!(f32, original.g, reparsed.g, epsilon = 1e-6));
        assert!(approx_eq!(f32, original.b, reparsed.b, epsilon = 1e-6));
    }

    #[test]
    fn nested_composite_round_trips() {
        let inner = Brdf::Composite(
            Composite::new(
                "inner",
                vec![(
                    Brdf::Lambertian(Lambertian::new(Spectrum::new(0.3, 0.3, 0.3)).unwrap()),
                    1.0,
                )],
            )
            .unwrap(),
        );
        let outer = Brdf::Composite(
            Composite::new(
                "outer",
                vec![
                    (inner, 0.5),
                    (
                        Brdf::PhongDiffuse(
                            PhongDiffuse::new(Spectrum::new(0.6, 0.6, 0.6)).unwrap(),
                        ),
                        0.5,
                    ),
                ],
            )
            .unwrap(),
        );

        let json = to_json(&outer.to_def("outer")).unwrap();
        let rebuilt = build(&parse(&json).unwrap()).unwrap();
        assert_eq!(rebuilt, outer);
    }
}
