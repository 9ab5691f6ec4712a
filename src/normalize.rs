//! Attribute normalization. Raw catalog defaults are rewritten into runtime
//! binding expressions against the loop-scoped node `i`, and the structural
//! variants (catch/static/pure/click views, static text and image) are carved
//! out of their base components.
//!
//! The map built here is what every template body renders from, so key order
//! is load-bearing: it decides both attribute order inside a tag and the
//! order template blocks appear in the generated document.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::alias::AliasTable;
use crate::components::{AttrMap, ComponentRegistry};
use crate::shortcuts;
use crate::template::PlatformHooks;
use crate::utils::{
    is_boolean_literal, is_numeric_literal, is_object_literal, to_camel_case, to_dashed,
};

lazy_static! {
    /// Passive touch-move bindings get a catching twin on the view variant
    /// so scroll-through can be blocked.
    static ref TOUCHMOVE_EVENT: Regex = Regex::new("^(bind|on)(touchmove|TouchMove)$").unwrap();

    /// Style bindings appended to every component except `block`.
    pub static ref STYLES: AttrMap = {
        let mut map = IndexMap::new();
        map.insert("style".to_string(), format!("i.{}", shortcuts::STYLE));
        map.insert("class".to_string(), format!("i.{}", shortcuts::CLASS));
        map
    };

    /// The tap binding appended next to [`STYLES`].
    pub static ref EVENTS: AttrMap = {
        let mut map = IndexMap::new();
        map.insert(
            "bindtap".to_string(),
            shortcuts::EVENT_HANDLER.to_string(),
        );
        map
    };
}

/// Rewrites one catalog default into its runtime binding expression.
///
/// Event props collapse to the shared handler name. Empty defaults bind the
/// aliased slot directly. Boolean, numeric and object literals keep their
/// default through a script helper (or an inline ternary when the script
/// module is off). Anything else falls back with `||`.
fn normalize_value(prop: &str, value: &str, alias: &str, use_xs: bool) -> String {
    if prop.starts_with("bind") || value == shortcuts::EVENT_HANDLER {
        shortcuts::EVENT_HANDLER.to_string()
    } else if value.is_empty() {
        format!("i.{alias}")
    } else if is_boolean_literal(value) || is_numeric_literal(value) {
        if use_xs {
            format!("xs.b(i.{alias},{value})")
        } else {
            format!("i.{alias}===undefined?{value}:i.{alias}")
        }
    } else if is_object_literal(value) {
        if use_xs {
            format!("xs.d(i.{alias})")
        } else {
            format!("i.{alias}===undefined?{value}:i.{alias}")
        }
    } else {
        format!("i.{alias}||{value}")
    }
}

/// Event keys render without brace interpolation, so they are flattened to
/// the platform's lowercase form.
fn replace_prop_name(name: &str, value: &str) -> String {
    if value == shortcuts::EVENT_HANDLER {
        name.to_lowercase()
    } else {
        name.to_string()
    }
}

/// Builds the normalized component map the generator renders from.
///
/// Components come out keyed by dashed name, in registry order, each base
/// component immediately followed by the variants derived from it.
pub fn build_component_map(
    registry: &ComponentRegistry,
    aliases: &AliasTable,
    use_xs: bool,
    hooks: &dyn PlatformHooks,
) -> IndexMap<String, AttrMap> {
    let mut result: IndexMap<String, AttrMap> = IndexMap::new();

    for (key, attrs) in registry.components() {
        let comp_name = to_dashed(key);
        let component = hooks.normalize_attribute(&comp_name, attrs);

        let mut new_comp: AttrMap = IndexMap::new();
        for (prop, value) in &component {
            let camel = to_camel_case(prop);
            let alias = aliases.prop_alias(&comp_name, &camel);
            let value = normalize_value(prop, value, &alias, use_xs);
            let prop = replace_prop_name(prop, &value);
            new_comp.insert(prop, value);
        }

        if comp_name != "block" {
            for (k, v) in STYLES.iter() {
                new_comp.insert(k.clone(), v.clone());
            }
            for (k, v) in EVENTS.iter() {
                new_comp.insert(k.clone(), v.clone());
            }
        }

        if comp_name == "swiper-item" {
            new_comp.shift_remove("style");
        }

        if comp_name == "view" {
            let mut catch_comp = new_comp.clone();
            let moved: Vec<String> = catch_comp
                .keys()
                .filter(|k| TOUCHMOVE_EVENT.is_match(k))
                .cloned()
                .collect();
            for origin_key in moved {
                let caught = TOUCHMOVE_EVENT.replace(&origin_key, "catch$2").into_owned();
                if let Some(value) = catch_comp.shift_remove(&origin_key) {
                    catch_comp.insert(caught, value);
                }
            }
            result.insert("catch-view".to_string(), catch_comp);
        }

        if comp_name == "view" || comp_name == "text" || comp_name == "image" {
            let static_comp: AttrMap = new_comp
                .iter()
                .filter(|(_, v)| v.as_str() != shortcuts::EVENT_HANDLER)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();

            if comp_name == "view" {
                let style = static_comp.get("style").cloned().unwrap_or_default();
                let class = static_comp.get("class").cloned().unwrap_or_default();

                result.insert("static-view".to_string(), static_comp);

                let mut pure = AttrMap::new();
                pure.insert("style".to_string(), style.clone());
                pure.insert("class".to_string(), class.clone());
                result.insert("pure-view".to_string(), pure);

                let mut click = AttrMap::new();
                click.insert("style".to_string(), style);
                click.insert("class".to_string(), class);
                for (k, v) in EVENTS.iter() {
                    click.insert(k.clone(), v.clone());
                }
                result.insert("click-view".to_string(), click);
            } else {
                result.insert(format!("static-{comp_name}"), static_comp);
            }
        }

        match comp_name.as_str() {
            "slot" | "slot-view" => {
                let mut comp = AttrMap::new();
                comp.insert(
                    "slot".to_string(),
                    new_comp.get("name").cloned().unwrap_or_default(),
                );
                for (k, v) in STYLES.iter() {
                    comp.insert(k.clone(), v.clone());
                }
                result.insert(comp_name, comp);
            }
            "native-slot" => {
                let mut comp = AttrMap::new();
                comp.insert(
                    "name".to_string(),
                    new_comp.get("name").cloned().unwrap_or_default(),
                );
                result.insert(comp_name, comp);
            }
            "list-builder" => {
                new_comp.insert(
                    "list".to_string(),
                    format!("i.{}", shortcuts::CHILDNODES),
                );
                result.insert(comp_name, new_comp);
            }
            _ => {
                result.insert(comp_name, new_comp);
            }
        }
    }

    result
}
