//! Document-level tests for the generated template library.
//!
//! These lock the structural contract of whole documents: floor layout and
//! pruning in the unrolled cascade, the container bridge at the last floor,
//! inclusion filtering, third-party emission and dialect substitution.

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;
    use pretty_assertions::assert_eq;

    use crate::{
        Adapter, BuildOptions, ComponentConfig, ComponentRegistry, Strategy, TemplateCompiler,
    };

    fn compiler(options: BuildOptions) -> TemplateCompiler {
        TemplateCompiler::new(ComponentRegistry::builtin(), options).unwrap()
    }

    fn unrolled(base_level: usize) -> BuildOptions {
        BuildOptions {
            strategy: Strategy::NonRecursive { base_level },
            ..BuildOptions::default()
        }
    }

    fn includes(names: &[&str]) -> ComponentConfig {
        ComponentConfig {
            includes: names.iter().map(|s| s.to_string()).collect(),
            ..ComponentConfig::default()
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // DOCUMENT SHAPE
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn recursive_view_document_renders_exactly() {
        let c = compiler(BuildOptions {
            strategy: Strategy::Recursive,
            ..BuildOptions::default()
        });
        let doc = c.build_template(&includes(&["view"]));
        let text_num = c.aliases().text_num().to_string();

        let expected = format!(
            r#"<wxs module="xs" src="./utils.wxs" />
<template name="root_tmpl">
  <template is="{{{{xs.a(0, item.nn)}}}}" data="{{{{i:item}}}}" wx:for="{{{{root.cn}}}}" wx:key="sid" />
</template>

<template name="tmpl_0_0">
  <view hover-class="{{{{i.p0||'none'}}}}" hover-stop-propagation="{{{{xs.b(i.p1,false)}}}}" hover-start-time="{{{{xs.b(i.p2,50)}}}}" hover-stay-time="{{{{xs.b(i.p3,400)}}}}" animation="{{{{i.p4}}}}" bindtouchstart="eh" bindtouchmove="eh" bindtouchend="eh" bindtouchcancel="eh" bindlongpress="eh" bindanimationstart="eh" bindanimationiteration="eh" bindanimationend="eh" bindtransitionend="eh" style="{{{{i.st}}}}" class="{{{{i.cl}}}}" bindtap="eh"  id="{{{{i.uid||i.sid}}}}" data-sid="{{{{i.sid}}}}">
    <template is="{{{{xs.a(0, item.nn)}}}}" data="{{{{i:item}}}}" wx:for="{{{{i.cn}}}}" wx:key="sid" />
  </view>
</template>

<template name="tmpl_0_{text_num}">
  <block>{{{{i.v}}}}</block>
</template>
"#
        );

        assert_eq!(doc, expected);
    }

    #[test]
    fn unrolled_document_lays_out_floors_and_container() {
        let c = compiler(unrolled(4));
        let doc = c.build_template(&includes(&["view"]));

        // view is unbounded, so it survives every component floor
        for level in 0..3 {
            assert!(
                doc.contains(&format!("<template name=\"tmpl_{level}_0\">")),
                "missing view floor {level}"
            );
        }
        assert!(!doc.contains("<template name=\"tmpl_3_0\">"));
        assert_eq!(doc.matches("_container\">").count(), 1);
        assert!(doc.contains("<template name=\"tmpl_3_container\">"));

        // plain text renders at floor 0 only when the script is on
        let text_num = c.aliases().text_num().to_string();
        assert!(doc.contains(&format!("<template name=\"tmpl_0_{text_num}\">")));
        assert!(!doc.contains(&format!("<template name=\"tmpl_1_{text_num}\">")));
    }

    #[test]
    fn smallest_cascade_is_one_floor_plus_container() {
        let c = compiler(unrolled(2));
        let doc = c.build_template(&includes(&["view"]));
        assert!(doc.contains("<template name=\"tmpl_0_0\">"));
        assert!(doc.contains("<template name=\"tmpl_1_container\">"));
        assert!(!doc.contains("<template name=\"tmpl_1_0\">"));
    }

    #[test]
    fn cascade_without_script_hands_off_through_the_container() {
        let c = compiler(BuildOptions {
            use_xs: false,
            ..unrolled(3)
        });
        let doc = c.build_template(&includes(&["view"]));

        assert!(doc.contains("<template name=\"tmpl_0_0\">"));
        assert!(doc.contains("<template name=\"tmpl_1_0\">"));
        assert!(doc.contains("<template name=\"tmpl_2_container\">"));
        assert!(!doc.contains("<template name=\"tmpl_2_0\">"));

        // the deepest component floor points its children at the container
        assert!(doc.contains("is=\"tmpl_2_container\" data=\"{{i:item,c:c}}\""));
        // without the script there is nothing to import
        assert!(!doc.contains("<wxs"));
    }

    #[test]
    fn bounded_components_stop_at_their_bound() {
        let c = compiler(unrolled(6));
        let config = includes(&["view", "swiper", "form"]);
        let doc = c.build_template(&config);
        let swiper = c.aliases().num_or_name("swiper").to_string();
        let form = c.aliases().num_or_name("form").to_string();

        // both are bounded at 4: floors 0 through 3, nothing past
        for alias in [&swiper, &form] {
            assert!(doc.contains(&format!("<template name=\"tmpl_3_{alias}\">")));
            assert!(!doc.contains(&format!("<template name=\"tmpl_4_{alias}\">")));
        }
    }

    #[test]
    fn inclusion_list_scopes_the_document() {
        let c = compiler(unrolled(4));
        let doc = c.build_template(&includes(&["view", "text"]));

        let text = c.aliases().num_or_name("text").to_string();
        assert!(doc.contains(&format!("<template name=\"tmpl_0_{text}\">")));
        // no focusable component included, so no focus dispatchers anywhere
        assert!(!doc.contains("_focus\">"));
        assert!(!doc.contains("_blur\">"));

        let everything = c.build_template(&ComponentConfig {
            include_all: true,
            ..ComponentConfig::default()
        });
        assert!(everything.contains("_focus\">"));
    }

    #[test]
    fn generation_is_deterministic() {
        let config = includes(&["view", "input", "swiper"]);
        let first = compiler(unrolled(8)).generate(&config);
        let second = compiler(unrolled(8)).generate(&config);
        assert_eq!(first, second);
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // THIRD-PARTY COMPONENTS
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn third_party_components_render_on_every_component_floor() {
        let c = compiler(unrolled(4));
        let mut config = includes(&["view"]);
        let attrs: IndexSet<String> = ["type".to_string(), "bindclick".to_string()]
            .into_iter()
            .collect();
        config
            .third_party_components
            .insert("van-button".to_string(), attrs);

        let doc = c.build_template(&config);
        for level in 0..3 {
            assert!(doc.contains(&format!("<template name=\"tmpl_{level}_van-button\">")));
        }
        assert!(!doc.contains("<template name=\"tmpl_3_van-button\">"));

        // children of the deepest floor re-enter through the container
        assert!(doc.contains("xs.e(3)"));
        assert!(doc.contains(" type=\"{{i.type}}\" bindclick=\"eh\" id="));
    }

    #[test]
    fn custom_wrapper_keeps_the_path_only_when_unrolled() {
        let mut config = includes(&["view"]);
        config
            .third_party_components
            .insert("custom-wrapper".to_string(), IndexSet::new());

        let doc = compiler(unrolled(4)).build_template(&config);
        assert!(doc.contains("<custom-wrapper i=\"{{i}}\" l=\"{{l}}\" id="));

        let recursive = compiler(BuildOptions {
            strategy: Strategy::Recursive,
            ..BuildOptions::default()
        })
        .build_template(&config);
        assert!(recursive.contains("<custom-wrapper i=\"{{i}}\"  id="));
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // SCRIPT MODULE AND DIALECTS
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn unrolled_generation_pairs_markup_with_the_script() {
        let c = compiler(unrolled(4));
        let doc = c.generate(&includes(&["view", "swiper"]));

        assert!(doc.markup.contains("l:xs.f('',item.nn)"));
        let script = doc.script.unwrap();
        assert!(script.contains("a: function (l, n, s) {"));
        assert!(script.contains("f: function (l, n) {"));
        assert!(script.contains("return 'tmpl_3_container'"));
    }

    #[test]
    fn alipay_dialect_substitutes_every_directive() {
        let c = compiler(BuildOptions {
            adapter: Adapter::alipay(),
            ..unrolled(3)
        });
        let doc = c.build_template(&includes(&["view"]));

        assert!(doc.starts_with("<sjs module=\"xs\" src=\"./utils.sjs\" />\n"));
        assert!(doc.contains("a:for=\"{{root.cn}}\" a:key=\"sid\""));
        assert!(doc.contains("a:if="));
        assert!(doc.contains("a:else"));
        assert!(!doc.contains("wx:"));
    }
}
