//! Component and property aliasing.
//!
//! Full names never reach generated markup. Every component (including the
//! structural variants derived during normalization and the text sentinel)
//! gets a numeric alias, and every non-event property a short `pN` alias.
//! Numbering follows registry insertion order so output stays diff-stable.

use indexmap::IndexMap;
use serde::Serialize;

use crate::components::ComponentRegistry;
use crate::shortcuts;
use crate::utils::{to_camel_case, to_dashed};

#[derive(Debug, Clone, Serialize)]
pub struct ComponentAlias {
    pub num: String,
    /// camelCase property name -> `pN`.
    pub props: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AliasTable {
    entries: IndexMap<String, ComponentAlias>,
}

impl AliasTable {
    pub fn get(&self, name: &str) -> Option<&ComponentAlias> {
        self.entries.get(name)
    }

    /// Numeric alias for a component name, when the name is aliased.
    pub fn num(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|a| a.num.as_str())
    }

    /// Numeric alias, or the name itself for unaliased (third-party) names.
    pub fn num_or_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.num(name).unwrap_or(name)
    }

    /// Alias for one of `component`'s properties, falling back to the
    /// property name itself when no alias was assigned.
    pub fn prop_alias(&self, component: &str, camel_prop: &str) -> String {
        self.entries
            .get(component)
            .and_then(|a| a.props.get(camel_prop))
            .cloned()
            .unwrap_or_else(|| camel_prop.to_string())
    }

    /// Alias of the plain-text sentinel.
    pub fn text_num(&self) -> &str {
        self.num(shortcuts::TEXT_NODE_NAME).unwrap_or("0")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ComponentAlias)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Structural variants carved out of a base component during normalization.
/// They render under their own aliases.
fn derived_variants(comp_name: &str) -> &'static [&'static str] {
    match comp_name {
        "view" => &["catch-view", "static-view", "pure-view", "click-view"],
        "text" => &["static-text"],
        "image" => &["static-image"],
        _ => &[],
    }
}

/// Builds the alias table for a registry. Invoked once per compiler
/// instance, before any template body is generated.
pub fn component_aliases(registry: &ComponentRegistry) -> AliasTable {
    let mut entries: IndexMap<String, ComponentAlias> = IndexMap::new();
    let mut next_num = 0usize;

    for (key, attrs) in registry.components() {
        let comp_name = to_dashed(key);
        let mut props = IndexMap::new();
        let mut next_prop = 0usize;
        for attr in attrs.keys() {
            if attr.starts_with("bind") {
                continue;
            }
            props.insert(to_camel_case(attr), format!("p{next_prop}"));
            next_prop += 1;
        }

        entries.insert(
            comp_name.clone(),
            ComponentAlias {
                num: next_num.to_string(),
                props,
            },
        );
        next_num += 1;

        for variant in derived_variants(&comp_name) {
            entries.insert(
                (*variant).to_string(),
                ComponentAlias {
                    num: next_num.to_string(),
                    props: IndexMap::new(),
                },
            );
            next_num += 1;
        }
    }

    entries.insert(
        shortcuts::TEXT_NODE_NAME.to_string(),
        ComponentAlias {
            num: next_num.to_string(),
            props: IndexMap::new(),
        },
    );

    AliasTable { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AttrMap;
    use std::collections::HashSet;

    #[test]
    fn aliases_are_unique() {
        let table = component_aliases(&ComponentRegistry::builtin());
        let mut seen = HashSet::new();
        for (name, alias) in table.iter() {
            assert!(
                seen.insert(alias.num.clone()),
                "duplicate alias {} for {}",
                alias.num,
                name
            );
        }
    }

    #[test]
    fn view_family_is_fully_aliased() {
        let table = component_aliases(&ComponentRegistry::builtin());
        for name in ["view", "catch-view", "static-view", "pure-view", "click-view"] {
            assert!(table.num(name).is_some(), "missing alias for {name}");
        }
        assert!(table.num("#text").is_some());
    }

    #[test]
    fn prop_aliases_skip_event_bindings() {
        let table = component_aliases(&ComponentRegistry::builtin());
        let view = table.get("view").unwrap();
        assert_eq!(view.props.get("hoverClass").map(String::as_str), Some("p0"));
        assert_eq!(
            view.props.get("hoverStopPropagation").map(String::as_str),
            Some("p1")
        );
        assert!(
            !view.props.contains_key("bindTouchMove"),
            "event channels do not consume prop aliases"
        );
    }

    #[test]
    fn unknown_props_fall_back_to_their_own_name() {
        let mut reg = ComponentRegistry::new();
        reg.add_component("View", AttrMap::new());
        let table = component_aliases(&reg);
        assert_eq!(table.prop_alias("view", "somethingElse"), "somethingElse");
    }

    #[test]
    fn text_sentinel_is_numbered_last() {
        let mut reg = ComponentRegistry::new();
        reg.add_component("View", AttrMap::new());
        reg.add_component("Swiper", AttrMap::new());
        let table = component_aliases(&reg);
        let last = table.iter().last().map(|(name, _)| name.clone());
        assert_eq!(last.as_deref(), Some("#text"));
        // view, 4 view variants, swiper, then the sentinel
        assert_eq!(table.text_num(), "6");
    }
}
