//! Document assembly for platforms that reject self-referencing templates.
//!
//! The template library is copied out floor by floor up to the base level.
//! The last floor holds only the container bridge, which routes overflowing
//! subtrees into the `comp` component and restarts the cascade at level 0.
//! With the script module available, floors past a component's nesting
//! bound are pruned and the script recounts real per-component depth from
//! the ancestor path accumulated in `l`.

use indexmap::IndexSet;
use tracing::trace;

use crate::shortcuts;
use crate::template::{ComponentConfig, TemplateCompiler};

fn json_list(items: &[&str]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

impl TemplateCompiler {
    pub(crate) fn build_unrolled_document(
        &self,
        base_level: usize,
        config: &ComponentConfig,
    ) -> String {
        let components = self.included_components(config);
        let mut template = self.build_base_template();

        for level in 0..base_level {
            let restart = base_level == level + 1;
            trace!(level, restart, "emitting template floor");
            template.push_str(&if self.options.use_xs {
                self.build_optimize_floor(level, &components, config, restart)
            } else {
                self.build_floor(level, &components, config, restart)
            });
        }

        template
    }

    pub(crate) fn build_floor(
        &self,
        level: usize,
        components: &[&str],
        config: &ComponentConfig,
        restart: bool,
    ) -> String {
        if restart {
            return self.build_container_template(level);
        }

        let mut template = String::new();
        for name in components {
            if let Some(max) = self.registry.nest_limit(name) {
                if max > 0 && level >= max {
                    continue;
                }
            }
            let comp = self.template_component(name);
            template.push_str(&self.build_component_template(&comp, level));
        }

        template.push_str(&self.build_plain_text_template(level));
        template.push_str(&self.build_third_party_template(level, config));

        template
    }

    pub(crate) fn build_optimize_floor(
        &self,
        level: usize,
        components: &[&str],
        config: &ComponentConfig,
        restart: bool,
    ) -> String {
        if restart {
            return self.build_container_template(level);
        }

        let mut template = String::new();
        for name in components {
            if level != 0 {
                match self.registry.nest_limit(name) {
                    // non-nesting components only need their level 0 template
                    None => continue,
                    Some(max) => {
                        if max > 0 && level >= max {
                            continue;
                        }
                    }
                }
            }
            let comp = self.template_component(name);
            template.push_str(&self.build_component_template(&comp, level));
        }

        if level == 0 {
            template.push_str(&self.build_plain_text_template(level));
        }
        template.push_str(&self.build_third_party_template(level, config));

        template
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SCRIPT NAME RESOLUTION
    // ═══════════════════════════════════════════════════════════════════════════

    /// The unrolled name resolver. Non-nesting components pin to level 0.
    /// For components with a nesting bound above 1 the level is recounted
    /// from the ancestor path, so unrelated nesting between them does not
    /// burn cascade depth. Anything at or past the last floor lands in the
    /// container.
    pub(crate) fn xs_tmpl_name_unrolled(
        &self,
        base_level: usize,
        config: &ComponentConfig,
    ) -> String {
        let mut loopable: IndexSet<&str> = self
            .registry
            .nest_elements()
            .keys()
            .map(String::as_str)
            .chain(config.third_party_components.keys().map(String::as_str))
            .collect();

        let mut bounded: Vec<&str> = Vec::new();
        for (comp, max) in self.registry.nest_elements() {
            if *max > 1 {
                bounded.push(comp);
            } else if *max == 1 {
                loopable.shift_remove(comp.as_str());
            }
        }

        let list_a: Vec<&str> = loopable
            .iter()
            .map(|name| self.aliases.num_or_name(name))
            .collect();
        let list_b: Vec<&str> = bounded
            .iter()
            .map(|name| self.aliases.num_or_name(name))
            .collect();
        let container_level = base_level - 1;

        format!(
            r#"function (l, n, s) {{
    var a = {list_a}
    var b = {list_b}
    if (a.indexOf(n) === -1) {{
      l = 0
    }}
    if (b.indexOf(n) > -1) {{
      var u = s.split(',')
      var depth = 0
      for (var i = 0; i < u.length; i++) {{
        if (u[i] === n) depth++
      }}
      l = depth
    }}
    if (l >= {container_level}) {{
      return 'tmpl_{container_level}_{container}'
    }}
    return 'tmpl_' + l + '_' + n
  }}"#,
            list_a = json_list(&list_a),
            list_b = json_list(&list_b),
            container = shortcuts::CONTAINER,
        )
    }

    /// The ancestor-path accumulator appended to the script module: pushes
    /// the node name whenever it has a recountable bound.
    pub(crate) fn xs_tmpl_extra_unrolled(&self) -> String {
        let bounded: Vec<&str> = self
            .registry
            .nest_elements()
            .iter()
            .filter(|(_, max)| **max > 1)
            .map(|(comp, _)| self.aliases.num_or_name(comp))
            .collect();

        format!(
            r#"f: function (l, n) {{
    var b = {list}
    if (b.indexOf(n) > -1) {{
      if (l) l += ','
      l += n
    }}
    return l
  }}"#,
            list = json_list(&bounded),
        )
    }
}
