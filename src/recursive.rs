//! Document assembly for platforms whose template dialect allows
//! self-reference. One floor of templates serves any tree depth, so the
//! document is just the root dispatcher plus every component at level 0.

use crate::template::{ComponentConfig, TemplateCompiler};

impl TemplateCompiler {
    pub(crate) fn build_recursive_document(&self, config: &ComponentConfig) -> String {
        let mut template = self.build_base_template();

        for name in self.included_components(config) {
            let comp = self.template_component(name);
            template.push_str(&self.build_component_template(&comp, 0));
        }

        template.push_str(&self.build_plain_text_template(0));
        template.push_str(&self.build_third_party_template(0, config));

        template
    }
}
