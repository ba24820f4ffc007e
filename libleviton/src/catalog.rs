// libleviton/src/catalog.rs

use std::collections::HashSet;

use crate::types::{CommandKind, LightDefinition};
use crate::{Error, Result};

/// Ordered, immutable collection of configured lights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightCatalog {
    lights: Vec<LightDefinition>,
}

impl LightCatalog {
    /// Build a catalog. Duplicate names are kept (lookups return the first
    /// one) but logged.
    pub fn new(lights: Vec<LightDefinition>) -> Self {
        let mut seen = HashSet::new();
        for light in &lights {
            if !seen.insert(light.name.as_str()) {
                log::warn!("duplicate light name '{}'; first definition wins", light.name);
            }
        }
        Self { lights }
    }

    /// First light with this exact name.
    pub fn lookup(&self, name: &str) -> Option<&LightDefinition> {
        self.lights.iter().find(|l| l.name == name)
    }

    /// Command bytes for `name`/`kind`, distinguishing an unknown light from
    /// a light that lacks the command.
    pub fn command_for(&self, name: &str, kind: CommandKind) -> Result<&[u8]> {
        let light = self
            .lookup(name)
            .ok_or_else(|| Error::UnknownLight(name.to_string()))?;
        light.command(kind).ok_or_else(|| Error::UndefinedCommand {
            light: name.to_string(),
            kind,
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LightDefinition> {
        self.lights.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lights.iter().map(|l| l.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}

impl From<Vec<LightDefinition>> for LightCatalog {
    fn from(lights: Vec<LightDefinition>) -> Self {
        Self::new(lights)
    }
}

impl<'a> IntoIterator for &'a LightCatalog {
    type Item = &'a LightDefinition;
    type IntoIter = std::slice::Iter<'a, LightDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
