//! Model registry.

use crate::loader;
use brdfs::Brdf;
use core::error::Error;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Holds constructed reflectance models keyed by their unique alias.
///
/// Loading is batch-tolerant: a malformed or invalid definition is logged
/// and skipped without aborting the rest of the batch.
#[derive(Default)]
pub struct Registry {
    /// Registered models by alias, iterated in sorted order.
    brdfs: BTreeMap<String, Brdf>,
}

impl Registry {
    /// Create an empty `Registry`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a definition and registers the result under its alias. A
    /// definition re-using an alias replaces the earlier model.
    ///
    /// * `json` - The definition's JSON text.
    pub fn register_str(&mut self, json: &str) -> Result<(), Error> {
        let def = loader::parse(json)?;
        let alias = def.alias.clone();
        let brdf = loader::build(&def)?;

        info!("BRDF registered: {alias}");
        self.brdfs.insert(alias, brdf);
        Ok(())
    }

    /// Registers a model directly under an alias.
    ///
    /// * `alias` - The model's unique alias.
    /// * `brdf`  - The model.
    pub fn register(&mut self, alias: &str, brdf: Brdf) {
        self.brdfs.insert(alias.to_string(), brdf);
    }

    /// Loads every `*.json` definition file in a directory. Definitions that
    /// fail to parse or build are skipped with a warning; the return value is
    /// the number of models registered.
    ///
    /// * `dir` - The directory to scan.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, Error> {
        let entries = fs::read_dir(dir)
            .map_err(|e| Error::DefinitionsNotFound(format!("{}: {e}", dir.display())))?;

        let mut registered = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            match fs::read_to_string(&path) {
                Ok(json) => match self.register_str(&json) {
                    Ok(()) => registered += 1,
                    Err(e) => warn!("skipping definition {}: {e}", path.display()),
                },
                Err(e) => warn!("skipping unreadable file {}: {e}", path.display()),
            }
        }

        Ok(registered)
    }

    /// Returns the model registered under an alias.
    ///
    /// * `alias` - The alias to look up.
    pub fn get(&self, alias: &str) -> Option<&Brdf> {
        self.brdfs.get(alias)
    }

    /// Returns every registered alias, sorted case-sensitively.
    pub fn aliases(&self) -> Vec<&str> {
        self.brdfs.keys().map(String::as_str).collect()
    }

    /// Iterates over registered models in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Brdf)> {
        self.brdfs.iter().map(|(alias, brdf)| (alias.as_str(), brdf))
    }

    /// Returns the number of registered models.
    pub fn len(&self) -> usize {
        self.brdfs.len()
    }

    /// Returns true when no models are registered.
    pub fn is_empty(&self) -> bool {
        self.brdfs.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JSON: &str = r#"{
        "alias": "matte",
        "type": "simple",
        "components": [
            { "name": "LambertianBRDF", "reflectivity": [0.5, 0.5, 0.5] }
        ]
    }"#;

    const INVALID_JSON: &str = r#"{
        "alias": "hot",
        "type": "simple",
        "components": [
            { "name": "LambertianBRDF", "reflectivity": [1.5, 0.5, 0.5] }
        ]
    }"#;

    #[test]
    fn registers_valid_definitions() {
        let mut registry = Registry::new();
        registry.register_str(VALID_JSON).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.get("matte").is_some());
        assert_eq!(registry.aliases(), vec!["matte"]);
    }

    #[test]
    fn invalid_definition_does_not_abort_the_batch() {
        let mut registry = Registry::new();

        let err = registry.register_str(INVALID_JSON).unwrap_err();
        assert!(matches!(err, Error::InvalidSpectrum(_)));

        // The failure leaves the registry usable for later definitions.
        registry.register_str(VALID_JSON).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("hot").is_none());
    }

    #[test]
    fn load_dir_skips_broken_files() {
        let dir = std::env::temp_dir().join("brdf-registry-test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        fs::write(dir.join("matte.json"), VALID_JSON).unwrap();
        fs::write(dir.join("hot.json"), INVALID_JSON).unwrap();
        fs::write(dir.join("garbage.json"), "{ not json").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let mut registry = Registry::new();
        let registered = registry.load_dir(&dir).unwrap();

        assert_eq!(registered, 1);
        assert_eq!(registry.aliases(), vec!["matte"]);

        let _ = fs::remove_dir_all(&dir);
    }
}
