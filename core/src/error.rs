//! Errors

use thiserror::Error;

/// Errors raised while constructing reflectance models from definitions.
///
/// These are construction-time failures only; a failing definition aborts the
/// single model being built and nothing else. Verification outcomes
/// (reciprocity / energy-conservation violations) are reported as values in
/// the verification report, never through this type.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A reflectivity channel fell outside `[0, 1]` at validation time.
    #[error("spectrum is invalid: {0}")]
    InvalidSpectrum(String),

    /// An expected field or array element was absent from a definition.
    #[error("missing property: {0}")]
    MissingProperty(String),

    /// No reflectance variant matches the requested name.
    #[error("unknown BRDF variant: {0}")]
    UnknownVariant(String),

    /// The definition text could not be parsed at all.
    #[error("malformed definition: {0}")]
    MalformedDefinition(String),

    /// A definition directory was missing or unreadable.
    #[error("no BRDF definitions found at path: {0}")]
    DefinitionsNotFound(String),
}
