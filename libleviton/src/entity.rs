// libleviton/src/entity.rs

//! Home-automation side of the state map: entity naming and the sink that
//! receives decoded states.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::Result;
use crate::types::LightStateMap;

/// Entity domain prefix for every light.
pub const ENTITY_DOMAIN: &str = "light";

/// Prefix of the platform-unique id.
pub const UNIQUE_ID_PREFIX: &str = "my_leviton::";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_]+").expect("static regex is valid"));

/// Normalize a light name for use in an entity id: transliterate `ä` and
/// `ö`, drop parentheses, collapse every other run of non-word characters to
/// `_` and lower-case the result.
pub fn normalize_entity_name(name: &str) -> String {
    let name = name.replace('ä', "a").replace('ö', "o");
    let name = name.replace(['(', ')'], "");
    NON_WORD.replace_all(&name, "_").to_lowercase()
}

/// `light.<normalized name>`
pub fn entity_id(name: &str) -> String {
    format!("{}.{}", ENTITY_DOMAIN, normalize_entity_name(name))
}

pub fn unique_id(name: &str) -> String {
    format!("{}{}", UNIQUE_ID_PREFIX, name)
}

/// Receives decoded light states keyed by entity id.
pub trait EntityStateSink {
    fn apply(&mut self, entity_id: &str, is_on: bool) -> Result<()>;
}

/// Push every entry of `states` to the sink. A failing entity is logged and
/// skipped. Returns how many entities were updated.
pub fn publish_states<S: EntityStateSink + ?Sized>(sink: &mut S, states: &LightStateMap) -> usize {
    let mut applied = 0;
    for (name, &is_on) in states {
        let id = entity_id(name);
        log::debug!("updating entity {} to {}", id, if is_on { "on" } else { "off" });
        match sink.apply(&id, is_on) {
            Ok(()) => applied += 1,
            Err(e) => log::error!("failed to update entity id {}: {}", id, e),
        }
    }
    applied
}

/// In-memory sink, useful for tests and for callers that diff states
/// themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    pub states: BTreeMap<String, bool>,
}

impl EntityStateSink for MemorySink {
    fn apply(&mut self, entity_id: &str, is_on: bool) -> Result<()> {
        self.states.insert(entity_id.to_string(), is_on);
        Ok(())
    }
}
