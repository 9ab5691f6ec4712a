//! Base template generation.
//!
//! A mini-program page renders a serialized node tree by dispatching every
//! node through a library of `<template>` blocks, one per component per
//! nesting level. This module builds that library: the root dispatch
//! template, the per-component bodies, the focus/blur split for input-like
//! components, third-party wrappers and the inline script module that picks
//! template names at runtime.
//!
//! The data protocol threaded through every template is small and fixed:
//! `i` is the current node, `c` counts nesting levels in the unrolled
//! cascade and `l` accumulates the path of depth-bounded ancestors for the
//! script-side recount. Children always loop over `i.cn` keyed by `sid`.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapter::Adapter;
use crate::alias::{component_aliases, AliasTable};
use crate::components::{AttrMap, ComponentRegistry};
use crate::error::TemplateError;
use crate::normalize::build_component_map;
use crate::shortcuts;
use crate::utils::{indent, to_camel_case, to_kebab_case};

/// Name of the document-level dispatch template.
pub const ROOT_TEMPLATE: &str = "root_tmpl";

/// First character of node names produced by compile-mode templates. Such
/// nodes always dispatch at level 0.
pub const COMPILE_MODE_PREFIX: char = 'f';

// ═══════════════════════════════════════════════════════════════════════════════
// BUILD CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════════

/// How self-referencing structures are expressed in the target dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Strategy {
    /// The dialect allows a template to reference itself; one floor of
    /// templates serves any tree depth.
    Recursive,
    /// Self-reference is rejected by the platform, so the template library
    /// is unrolled into `base_level` floors with a container bridge at the
    /// bottom that restarts the cascade.
    NonRecursive {
        #[serde(rename = "baseLevel", default = "default_base_level")]
        base_level: usize,
    },
}

fn default_base_level() -> usize {
    16
}

impl Strategy {
    pub fn is_recursive(self) -> bool {
        matches!(self, Strategy::Recursive)
    }
}

/// Knobs of one generation run. `Default` targets WeChat with the unrolled
/// strategy and the script module enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    pub strategy: Strategy,
    /// Whether the platform's inline script dialect is available. With the
    /// script off, template-name resolution falls back to markup arithmetic.
    pub use_xs: bool,
    /// Compile-mode node names (prefixed [`COMPILE_MODE_PREFIX`]) dispatch
    /// at level 0 even mid-cascade.
    pub use_compile_mode: bool,
    pub adapter: Adapter,
    /// Statement that exports the script module object.
    pub export_expr: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            strategy: Strategy::NonRecursive { base_level: 16 },
            use_xs: true,
            use_compile_mode: false,
            adapter: Adapter::weixin(),
            export_expr: "module.exports =".to_string(),
        }
    }
}

/// Per-build component usage: which catalog components the page actually
/// uses, plus the third-party components discovered during compilation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentConfig {
    /// Catalog components to emit. Empty means all of them.
    pub includes: IndexSet<String>,
    /// Overrides `includes` and emits the full catalog.
    pub include_all: bool,
    /// Third-party component name -> attribute names seen in source.
    pub third_party_components: IndexMap<String, IndexSet<String>>,
    /// Third-party component name -> attribute -> default-value patch.
    pub third_party_patcher: IndexMap<String, IndexMap<String, String>>,
}

impl ComponentConfig {
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn included(&self, name: &str) -> bool {
        if self.includes.is_empty() || self.include_all {
            true
        } else {
            self.includes.contains(name)
        }
    }
}

/// A finished generation run: the template document plus the script module
/// when the run needs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub markup: String,
    pub script: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// PLATFORM HOOKS
// ═══════════════════════════════════════════════════════════════════════════════

/// Extension points a platform backend can override. Every hook defaults to
/// a pass-through.
pub trait PlatformHooks {
    /// Rewrites a component's raw attribute defaults before normalization.
    fn normalize_attribute(&self, _component: &str, attrs: &AttrMap) -> AttrMap {
        attrs.clone()
    }

    /// Patches a finished template block before it joins the document.
    fn patch_template_result(
        &self,
        res: String,
        _component: &str,
        _level: usize,
        _children: &str,
    ) -> String {
        res
    }

    /// Patches the loop body a parent stamps over its children.
    fn patch_loop_body(&self, child: String, _component: &str) -> String {
        child
    }
}

/// The no-op hook set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl PlatformHooks for DefaultHooks {}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPILER
// ═══════════════════════════════════════════════════════════════════════════════

/// One component as the template builders see it.
pub(crate) struct TemplateComponent<'a> {
    pub(crate) node_name: &'a str,
    pub(crate) node_alias: &'a str,
    pub(crate) attributes: &'a AttrMap,
}

/// Generates the base template document for one platform configuration.
///
/// Aliases and the normalized component map are computed once at
/// construction; the build methods are pure functions of that state, so a
/// compiler can be reused across pages.
pub struct TemplateCompiler {
    pub(crate) registry: ComponentRegistry,
    pub(crate) aliases: AliasTable,
    pub(crate) options: BuildOptions,
    pub(crate) components: IndexMap<String, AttrMap>,
    pub(crate) hooks: Box<dyn PlatformHooks>,
}

impl TemplateCompiler {
    pub fn new(registry: ComponentRegistry, options: BuildOptions) -> Result<Self, TemplateError> {
        Self::with_hooks(registry, options, Box::new(DefaultHooks))
    }

    pub fn with_hooks(
        registry: ComponentRegistry,
        options: BuildOptions,
        hooks: Box<dyn PlatformHooks>,
    ) -> Result<Self, TemplateError> {
        if let Strategy::NonRecursive { base_level } = options.strategy {
            // one component floor plus the container floor
            if base_level < 2 {
                return Err(TemplateError::BaseLevelTooSmall(base_level));
            }
        }

        let aliases = component_aliases(&registry);
        let components = build_component_map(&registry, &aliases, options.use_xs, hooks.as_ref());

        Ok(TemplateCompiler {
            registry,
            aliases,
            options,
            components,
            hooks,
        })
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn components(&self) -> &IndexMap<String, AttrMap> {
        &self.components
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Builds the whole template document for `config`.
    pub fn build_template(&self, config: &ComponentConfig) -> String {
        debug!(
            components = self.components.len(),
            third_party = config.third_party_components.len(),
            recursive = self.options.strategy.is_recursive(),
            "building base template document"
        );
        match self.options.strategy {
            Strategy::Recursive => self.build_recursive_document(config),
            Strategy::NonRecursive { base_level } => self.build_unrolled_document(base_level, config),
        }
    }

    /// Builds the document together with its script module, when the
    /// configuration calls for one.
    pub fn generate(&self, config: &ComponentConfig) -> GeneratedDocument {
        let markup = self.build_template(config);
        let script = match self.options.strategy {
            Strategy::NonRecursive { .. } if self.options.use_xs => {
                Some(self.build_xs_script(config))
            }
            _ => None,
        };
        GeneratedDocument { markup, script }
    }

    pub(crate) fn included_components<'a>(&'a self, config: &ComponentConfig) -> Vec<&'a str> {
        self.components
            .keys()
            .filter(|name| config.included(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub(crate) fn template_component<'a>(&'a self, name: &'a str) -> TemplateComponent<'a> {
        TemplateComponent {
            node_name: name,
            node_alias: self.aliases.num_or_name(name),
            attributes: &self.components[name],
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // COMPONENT TEMPLATES
    // ═══════════════════════════════════════════════════════════════════════════

    /// Event values render verbatim, everything else is brace-interpolated.
    /// Each attribute carries its own trailing space.
    fn build_attribute(&self, attrs: &AttrMap) -> String {
        attrs
            .iter()
            .map(|(k, v)| {
                if k.starts_with("bind") || k.starts_with("on") || k.starts_with("catch") {
                    format!("{k}=\"{v}\" ")
                } else {
                    format!("{k}=\"{{{{{v}}}}}\" ")
                }
            })
            .collect()
    }

    /// The `<template is=... />` line a parent stamps out for each child.
    /// `level` is the level the child dispatches into.
    fn get_children_template(&self, level: usize, use_slot_item: bool) -> String {
        let recursive = self.options.strategy.is_recursive();
        let use_xs = self.options.use_xs;
        let unrolled_xs = !recursive && use_xs;
        let adapter = &self.options.adapter;
        let is_last_floor = match self.options.strategy {
            Strategy::NonRecursive { base_level } => level + 1 == base_level,
            Strategy::Recursive => false,
        };

        let for_attribute = format!(
            "{}=\"{{{{i.{}}}}}\" {}=\"{}\"",
            adapter.r#for,
            shortcuts::CHILDNODES,
            adapter.key,
            shortcuts::SID
        );

        let tmpl = if is_last_floor {
            // children of the deepest component floor re-enter through the
            // container bridge
            let data = if unrolled_xs {
                "i:item,c:c,l:l"
            } else if recursive {
                "i:item"
            } else {
                "i:item,c:c"
            };
            if use_xs {
                format!(
                    "<template is=\"{{{{xs.e({level})}}}}\" data=\"{{{{{data}}}}}\" {for_attribute} />"
                )
            } else {
                format!(
                    "<template is=\"tmpl_{level}_{}\" data=\"{{{{{data}}}}}\" {for_attribute} />",
                    shortcuts::CONTAINER
                )
            }
        } else {
            let data = if unrolled_xs {
                format!("i:item,c:c+1,l:xs.f(l,item.{})", shortcuts::NODE_NAME)
            } else if recursive {
                "i:item".to_string()
            } else {
                "i:item,c:c+1".to_string()
            };

            if use_xs {
                let xs = if recursive {
                    format!("xs.a(0, item.{})", shortcuts::NODE_NAME)
                } else {
                    format!("xs.a(c, item.{}, l)", shortcuts::NODE_NAME)
                };
                format!(
                    "<template is=\"{{{{{xs}}}}}\" data=\"{{{{{data}}}}}\" {for_attribute} />"
                )
            } else if recursive {
                format!(
                    "<template is=\"{{{{'tmpl_0_' + item.{}}}}}\" data=\"{{{{{data}}}}}\" {for_attribute} />",
                    shortcuts::NODE_NAME
                )
            } else if self.options.use_compile_mode {
                format!(
                    "<template is=\"{{{{'tmpl_' + (item.{nn}[0]==='{prefix}' ? 0 : c) + '_' + item.{nn}}}}}\" data=\"{{{{{data}}}}}\" {for_attribute} />",
                    nn = shortcuts::NODE_NAME,
                    prefix = COMPILE_MODE_PREFIX
                )
            } else {
                format!(
                    "<template is=\"{{{{'tmpl_' + c + '_' + item.{}}}}}\" data=\"{{{{{data}}}}}\" {for_attribute} />",
                    shortcuts::NODE_NAME
                )
            }
        };

        if use_slot_item {
            format!(
                "<block slot:item slot:index>{}</block>",
                tmpl.replace(&for_attribute, "")
            )
        } else {
            tmpl
        }
    }

    fn get_children(&self, comp: &TemplateComponent<'_>, level: usize) -> String {
        let next_level = if self.options.strategy.is_recursive() {
            0
        } else {
            level + 1
        };
        let is_list_builder = comp.node_name == "list-builder";

        let child = self.get_children_template(next_level, is_list_builder);
        let child = self.hooks.patch_loop_body(child, comp.node_name);

        if self.registry.is_void(comp.node_name) {
            String::new()
        } else {
            format!("\n    {}\n  ", indent(&child, 6))
        }
    }

    pub(crate) fn build_component_template(
        &self,
        comp: &TemplateComponent<'_>,
        level: usize,
    ) -> String {
        if self.registry.is_focusable(comp.node_name) {
            self.build_focus_component_template(comp, level)
        } else {
            self.build_standard_component_template(comp, level)
        }
    }

    /// Focusable components split into a dispatcher plus `_focus` and
    /// `_blur` bodies, so toggling focus swaps the whole template instead
    /// of fighting the platform over attribute updates.
    fn build_focus_component_template(&self, comp: &TemplateComponent<'_>, level: usize) -> String {
        let children = self.get_children(comp, level);
        let node_name = comp.node_name;
        let node_alias = comp.node_alias;

        let template_name = if self.options.use_xs {
            format!("xs.c(i, 'tmpl_{level}_')")
        } else {
            format!("i.focus ? 'tmpl_{level}_{node_alias}_focus' : 'tmpl_{level}_{node_alias}_blur'")
        };

        let mut blur_attrs = comp.attributes.clone();
        blur_attrs.shift_remove("focus");

        let data = if self.options.strategy.is_recursive() {
            "i:i"
        } else {
            "i:i,c:c"
        };

        let res = format!(
            r#"
<template name="tmpl_{level}_{node_alias}">
  <template is="{{{{{template_name}}}}}" data="{{{{{data}}}}}" />
</template>

<template name="tmpl_{level}_{node_alias}_focus">
  <{node_name} {focus_attrs} id="{{{{i.uid||i.sid}}}}" data-sid="{{{{i.sid}}}}">{children}</{node_name}>
</template>

<template name="tmpl_{level}_{node_alias}_blur">
  <{node_name} {blur_attrs} id="{{{{i.uid||i.sid}}}}" data-sid="{{{{i.sid}}}}">{children}</{node_name}>
</template>
"#,
            focus_attrs = self.build_attribute(comp.attributes),
            blur_attrs = self.build_attribute(&blur_attrs),
        );

        self.hooks
            .patch_template_result(res, node_name, level, &children)
    }

    fn build_standard_component_template(
        &self,
        comp: &TemplateComponent<'_>,
        level: usize,
    ) -> String {
        let children = self.get_children(comp, level);
        let node_alias = comp.node_alias;

        // structural variants render as their host tag
        let node_name = match comp.node_name {
            "slot" | "slot-view" | "catch-view" | "static-view" | "pure-view" | "click-view" => {
                "view"
            }
            "static-text" => "text",
            "static-image" => "image",
            "native-slot" => "slot",
            other => other,
        };

        let res = format!(
            r#"
<template name="tmpl_{level}_{node_alias}">
  <{node_name} {attrs} id="{{{{i.uid||i.sid}}}}" data-sid="{{{{i.sid}}}}">{children}</{node_name}>
</template>
"#,
            attrs = self.build_attribute(comp.attributes),
        );

        self.hooks
            .patch_template_result(res, comp.node_name, level, &children)
    }

    pub(crate) fn build_plain_text_template(&self, level: usize) -> String {
        format!(
            r#"
<template name="tmpl_{level}_{alias}">
  <block>{{{{i.{text}}}}}</block>
</template>
"#,
            alias = self.aliases.text_num(),
            text = shortcuts::TEXT,
        )
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // THIRD-PARTY TEMPLATES
    // ═══════════════════════════════════════════════════════════════════════════

    pub(crate) fn build_third_party_template(
        &self,
        level: usize,
        config: &ComponentConfig,
    ) -> String {
        let recursive = self.options.strategy.is_recursive();
        let use_xs = self.options.use_xs;
        let next_level = if recursive { 0 } else { level + 1 };
        let empty_patcher = IndexMap::new();
        let mut template = String::new();

        for (comp_name, attrs) in &config.third_party_components {
            if comp_name == "custom-wrapper" {
                let l_attr = if !recursive && use_xs { "l=\"{{l}}\"" } else { "" };
                template.push_str(&format!(
                    r#"
<template name="tmpl_{level}_{comp_name}">
  <{comp_name} i="{{{{i}}}}" {l_attr} id="{{{{i.uid||i.sid}}}}" data-sid="{{{{i.sid}}}}">
  </{comp_name}>
</template>
  "#
                ));
                continue;
            }

            // depth-bounded names drop out of floors past their bound
            if !recursive && use_xs {
                if let Some(max) = self.registry.nest_limit(comp_name) {
                    if max > 0 && level + 1 > max {
                        continue;
                    }
                }
            }

            let child = self.get_children_template(next_level, false);
            let child = self.hooks.patch_loop_body(child, comp_name);

            let children = if self.registry.is_void(comp_name) {
                String::new()
            } else {
                format!("\n    {child}\n  ")
            };

            let patcher = config
                .third_party_patcher
                .get(comp_name)
                .unwrap_or(&empty_patcher);

            template.push_str(&format!(
                r#"
<template name="tmpl_{level}_{comp_name}">
  <{comp_name} {attrs} id="{{{{i.uid||i.sid}}}}" data-sid="{{{{i.sid}}}}">{children}</{comp_name}>
</template>
  "#,
                attrs = self.build_third_party_attr(attrs, patcher),
            ));
        }

        template
    }

    /// Third-party attributes carry a leading space each; bindings from any
    /// source framework flavor all collapse onto the shared handler.
    fn build_third_party_attr(
        &self,
        attrs: &IndexSet<String>,
        patcher: &IndexMap<String, String>,
    ) -> String {
        attrs.iter().fold(String::new(), |mut built, attr| {
            if let Some(event) = attr.strip_prefix('@') {
                let value = if event.contains('-') {
                    format!(":{event}")
                } else {
                    event.to_string()
                };
                built.push_str(&format!(" bind{value}=\"{}\"", shortcuts::EVENT_HANDLER));
            } else if attr.starts_with("bind") {
                built.push_str(&format!(" {attr}=\"{}\"", shortcuts::EVENT_HANDLER));
            } else if let Some(event) = attr.strip_prefix("on") {
                let mut value = to_kebab_case(event);
                if value.contains('-') {
                    value = format!(":{value}");
                }
                built.push_str(&format!(" bind{value}=\"{}\"", shortcuts::EVENT_HANDLER));
            } else if attr == "class" {
                built.push_str(&format!(" class=\"{{{{i.{}}}}}\"", shortcuts::CLASS));
            } else if attr == "style" {
                built.push_str(&format!(" style=\"{{{{i.{}}}}}\"", shortcuts::STYLE));
            } else if let Some(patch) = patcher.get(attr) {
                let camel = to_camel_case(attr);
                let prop_value = if self.options.use_xs {
                    format!("xs.b(i.{camel},{patch})")
                } else {
                    format!("i.{camel}===undefined?{patch}:i.{camel}")
                };
                built.push_str(&format!(" {attr}=\"{{{{{prop_value}}}}}\""));
            } else {
                built.push_str(&format!(" {attr}=\"{{{{i.{}}}}}\"", to_camel_case(attr)));
            }
            built
        })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // DOCUMENT SKELETON
    // ═══════════════════════════════════════════════════════════════════════════

    /// The deepest floor holds only this bridge: text nodes finish inline,
    /// everything else hands off to the custom `comp` component which
    /// restarts the cascade at level 0.
    pub(crate) fn build_container_template(&self, level: usize) -> String {
        let adapter = &self.options.adapter;
        let text_alias = self.aliases.text_num();
        let comp = if !self.options.strategy.is_recursive() && self.options.use_xs {
            "<comp i=\"{{i}}\" l=\"{{l}}\" />"
        } else {
            "<comp i=\"{{i}}\" />"
        };

        let tmpl = format!(
            r#"<block {if_attr}="{{{{i.{nn} === '{text_alias}'}}}}">
    <template is="tmpl_0_{text_alias}" data="{{{{i:i}}}}" />
  </block>
  <block {else_attr}>
    {comp}
  </block>"#,
            if_attr = adapter.r#if,
            else_attr = adapter.r#else,
            nn = shortcuts::NODE_NAME,
        );

        format!(
            r#"
<template name="tmpl_{level}_{container}">
  {tmpl}
</template>
"#,
            container = shortcuts::CONTAINER,
        )
    }

    pub(crate) fn build_base_template(&self) -> String {
        let recursive = self.options.strategy.is_recursive();
        let use_xs = self.options.use_xs;
        let adapter = &self.options.adapter;

        let data = if !recursive && use_xs {
            format!("i:item,c:1,l:xs.f('',item.{})", shortcuts::NODE_NAME)
        } else if recursive {
            "i:item".to_string()
        } else {
            "i:item,c:1".to_string()
        };

        let xs = if use_xs {
            if recursive {
                format!("xs.a(0, item.{})", shortcuts::NODE_NAME)
            } else {
                format!("xs.a(0, item.{}, '')", shortcuts::NODE_NAME)
            }
        } else {
            format!("'tmpl_0_' + item.{}", shortcuts::NODE_NAME)
        };

        format!(
            r#"{imports}<template name="{root}">
  <template is="{{{{{xs}}}}}" data="{{{{{data}}}}}" {for_attr}="{{{{root.{cn}}}}}" {key}="{sid}" />
</template>
"#,
            imports = self.build_xs_import_template(),
            root = ROOT_TEMPLATE,
            for_attr = adapter.r#for,
            cn = shortcuts::CHILDNODES,
            key = adapter.key,
            sid = shortcuts::SID,
        )
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ENTRY DOCUMENTS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The page-level document: import the shared library, dispatch the
    /// page root.
    pub fn build_page_template(&self, base_temp_path: &str) -> String {
        format!(
            "<import src=\"{base_temp_path}\"/>\n<template is=\"{ROOT_TEMPLATE}\" data=\"{{{{root:root}}}}\" />"
        )
    }

    /// Document of the `comp` bridge component.
    pub fn build_base_component_template(&self, ext: &str) -> String {
        let recursive = self.options.strategy.is_recursive();
        let data = if !recursive && self.options.use_xs {
            format!("i:i,c:1,l:xs.f('',i.{})", shortcuts::NODE_NAME)
        } else if recursive {
            "i:i".to_string()
        } else {
            "i:i,c:1".to_string()
        };

        // the script module must be imported again here, otherwise the path
        // accumulator resolves to undefined inside the bridge documents
        format!(
            r#"<import src="./base{ext}" />
{imports}<template is="{{{{'tmpl_0_' + i.{nn}}}}}" data="{{{{{data}}}}}" />"#,
            imports = self.build_xs_import_template(),
            nn = shortcuts::NODE_NAME,
        )
    }

    /// Document of the `custom-wrapper` component, which loops its own
    /// children back into the cascade.
    pub fn build_custom_component_template(&self, ext: &str) -> String {
        let recursive = self.options.strategy.is_recursive();
        let adapter = &self.options.adapter;
        let data = if !recursive && self.options.use_xs {
            format!("i:item,c:1,l:xs.f('',item.{})", shortcuts::NODE_NAME)
        } else if recursive {
            "i:item".to_string()
        } else {
            "i:item,c:1".to_string()
        };

        format!(
            r#"<import src="./base{ext}" />
{imports}<template is="{{{{'tmpl_0_' + item.{nn}}}}}" data="{{{{{data}}}}}" {for_attr}="{{{{i.{cn}}}}}" {key}="{sid}" />
"#,
            imports = self.build_xs_import_template(),
            nn = shortcuts::NODE_NAME,
            for_attr = adapter.r#for,
            cn = shortcuts::CHILDNODES,
            key = adapter.key,
            sid = shortcuts::SID,
        )
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SCRIPT MODULE
    // ═══════════════════════════════════════════════════════════════════════════

    /// The `<wxs>`-style import line, or nothing on platforms without an
    /// inline script dialect.
    pub fn build_xs_template(&self) -> String {
        match self.options.adapter.xs.as_deref() {
            Some(tag) => format!("<{tag} module=\"xs\" src=\"./utils.{tag}\" />"),
            None => String::new(),
        }
    }

    pub fn build_xs_import_template(&self) -> String {
        if self.options.use_xs {
            format!("{}\n", self.build_xs_template())
        } else {
            String::new()
        }
    }

    /// The script module body. `a` resolves template names, `b` guards
    /// literal defaults, `c` picks focus/blur variants, `d` guards object
    /// defaults, `e` names the container of a floor; the unrolled strategy
    /// appends `f`, the ancestor-path accumulator.
    pub fn build_xs_script(&self, config: &ComponentConfig) -> String {
        let (tmpl_name, extra) = match self.options.strategy {
            Strategy::Recursive => (self.xs_tmpl_name(), String::new()),
            Strategy::NonRecursive { base_level } => (
                self.xs_tmpl_name_unrolled(base_level, config),
                self.xs_tmpl_extra_unrolled(),
            ),
        };

        format!(
            r#"{export_expr} {{
  a: {tmpl_name},
  b: function (a, b) {{
    return a === undefined ? b : a
  }},
  c: {step_focus},
  d: function (a) {{
    return a === undefined ? {{}} : a
  }},
  e: function (n) {{
    return 'tmpl_' + n + '_{container}'
  }},
  {extra}
}}"#,
            export_expr = self.options.export_expr,
            step_focus = self.xs_step_focus(),
            container = shortcuts::CONTAINER,
        )
    }

    fn xs_tmpl_name(&self) -> String {
        r#"function (l, n) {
    return 'tmpl_' + l + '_' + n
  }"#
        .to_string()
    }

    fn xs_step_focus(&self) -> String {
        format!(
            r#"function(i, prefix) {{
    var s = i.focus !== undefined ? 'focus' : 'blur'
    return prefix + i.{nn} + '_' + s
  }}"#,
            nn = shortcuts::NODE_NAME,
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
