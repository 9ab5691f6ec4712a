//! Built-in component catalog.
//!
//! Holds every component the generator knows out of the box: attribute
//! defaults plus the void / focusable / nestable classifications the template
//! builders consult. All maps are insertion-ordered because the emission
//! order of templates follows catalog order.

use indexmap::{IndexMap, IndexSet};
use lazy_static::lazy_static;

/// Attribute name -> default-value expression, in declaration order.
pub type AttrMap = IndexMap<String, String>;

/// The component catalog a generation run is built from.
///
/// Component keys are canonical CamelCase names; the classification tables
/// use the dashed names that appear in markup. A registry is immutable once
/// handed to a compiler instance.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: IndexMap<String, AttrMap>,
    void_elements: IndexSet<String>,
    focus_components: IndexSet<String>,
    nest_elements: IndexMap<String, usize>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn add_component(&mut self, name: &str, attrs: AttrMap) {
        self.components.insert(name.to_string(), attrs);
    }

    /// Marks a component (dashed name) as childless.
    pub fn mark_void(&mut self, name: &str) {
        self.void_elements.insert(name.to_string());
    }

    /// Marks a component (dashed name) as needing focus/blur template variants.
    pub fn mark_focusable(&mut self, name: &str) {
        self.focus_components.insert(name.to_string());
    }

    /// Declares a component (dashed name) self-nestable. `max` caps the
    /// nesting depth; 0 means unbounded.
    pub fn set_nest_limit(&mut self, name: &str, max: usize) {
        self.nest_elements.insert(name.to_string(), max);
    }

    pub fn components(&self) -> &IndexMap<String, AttrMap> {
        &self.components
    }

    pub fn is_void(&self, name: &str) -> bool {
        self.void_elements.contains(name)
    }

    pub fn is_focusable(&self, name: &str) -> bool {
        self.focus_components.contains(name)
    }

    pub fn can_nest(&self, name: &str) -> bool {
        self.nest_elements.contains_key(name)
    }

    pub fn nest_limit(&self, name: &str) -> Option<usize> {
        self.nest_elements.get(name).copied()
    }

    pub fn nest_elements(&self) -> &IndexMap<String, usize> {
        &self.nest_elements
    }
}

fn attrs(pairs: &[(&str, &str)]) -> AttrMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

lazy_static! {
    static ref BUILTIN: ComponentRegistry = builtin_catalog();
}

// ═══════════════════════════════════════════════════════════════════════════════
// STANDARD CATALOG
// ═══════════════════════════════════════════════════════════════════════════════

// Default-value conventions: `''` binds the raw property, `true`/`false` and
// bare numbers are literals guarded against undefined, `'quoted'` strings are
// literal fallbacks, and `bind*` keys declare event channels.
fn builtin_catalog() -> ComponentRegistry {
    let mut reg = ComponentRegistry::new();

    reg.add_component(
        "View",
        attrs(&[
            ("hover-class", "'none'"),
            ("hover-stop-propagation", "false"),
            ("hover-start-time", "50"),
            ("hover-stay-time", "400"),
            ("animation", ""),
            ("bindTouchStart", ""),
            ("bindTouchMove", ""),
            ("bindTouchEnd", ""),
            ("bindTouchCancel", ""),
            ("bindLongPress", ""),
            ("bindAnimationStart", ""),
            ("bindAnimationIteration", ""),
            ("bindAnimationEnd", ""),
            ("bindTransitionEnd", ""),
        ]),
    );
    reg.add_component(
        "Icon",
        attrs(&[("type", ""), ("size", "23"), ("color", "")]),
    );
    reg.add_component(
        "Progress",
        attrs(&[
            ("percent", ""),
            ("show-info", "false"),
            ("border-radius", "0"),
            ("font-size", "16"),
            ("stroke-width", "6"),
            ("activeColor", "'#09BB07'"),
            ("backgroundColor", "'#EBEBEB'"),
            ("active", "false"),
            ("active-mode", "'backwards'"),
            ("duration", "30"),
            ("bindActiveEnd", ""),
        ]),
    );
    reg.add_component(
        "RichText",
        attrs(&[("nodes", ""), ("space", ""), ("user-select", "false")]),
    );
    reg.add_component(
        "Text",
        attrs(&[
            ("selectable", "false"),
            ("space", ""),
            ("decode", "false"),
            ("user-select", "false"),
        ]),
    );
    reg.add_component(
        "Button",
        attrs(&[
            ("size", "'default'"),
            ("type", "'default'"),
            ("plain", "false"),
            ("disabled", "false"),
            ("loading", "false"),
            ("form-type", ""),
            ("open-type", ""),
            ("hover-class", "'button-hover'"),
            ("hover-stop-propagation", "false"),
            ("hover-start-time", "20"),
            ("hover-stay-time", "70"),
            ("bindGetUserInfo", ""),
            ("bindContact", ""),
            ("bindGetPhoneNumber", ""),
            ("bindError", ""),
            ("bindOpenSetting", ""),
            ("bindLaunchApp", ""),
        ]),
    );
    reg.add_component(
        "Checkbox",
        attrs(&[
            ("value", ""),
            ("disabled", "false"),
            ("checked", "false"),
            ("color", "'#09BB07'"),
        ]),
    );
    reg.add_component("CheckboxGroup", attrs(&[("bindChange", "")]));
    reg.add_component(
        "Form",
        attrs(&[
            ("report-submit", "false"),
            ("report-submit-timeout", "0"),
            ("bindSubmit", ""),
            ("bindReset", ""),
        ]),
    );
    reg.add_component(
        "Input",
        attrs(&[
            ("value", ""),
            ("type", "'text'"),
            ("password", "false"),
            ("placeholder", ""),
            ("placeholder-style", ""),
            ("placeholder-class", "'input-placeholder'"),
            ("disabled", "false"),
            ("maxlength", "140"),
            ("cursor-spacing", "0"),
            ("auto-focus", "false"),
            ("focus", "false"),
            ("confirm-type", "'done'"),
            ("confirm-hold", "false"),
            ("cursor", ""),
            ("selection-start", "-1"),
            ("selection-end", "-1"),
            ("adjust-position", "true"),
            ("hold-keyboard", "false"),
            ("bindInput", ""),
            ("bindFocus", ""),
            ("bindBlur", ""),
            ("bindConfirm", ""),
            ("bindKeyboardHeightChange", ""),
        ]),
    );
    reg.add_component("Label", attrs(&[("for", "")]));
    reg.add_component(
        "Picker",
        attrs(&[
            ("header-text", ""),
            ("mode", "'selector'"),
            ("disabled", "false"),
            ("bindCancel", ""),
        ]),
    );
    reg.add_component(
        "Radio",
        attrs(&[
            ("value", ""),
            ("checked", "false"),
            ("disabled", "false"),
            ("color", "'#09BB07'"),
        ]),
    );
    reg.add_component("RadioGroup", attrs(&[("bindChange", "")]));
    reg.add_component(
        "Slider",
        attrs(&[
            ("min", "0"),
            ("max", "100"),
            ("step", "1"),
            ("disabled", "false"),
            ("value", "0"),
            ("activeColor", "'#1aad19'"),
            ("backgroundColor", "'#e9e9e9'"),
            ("block-size", "28"),
            ("block-color", "'#ffffff'"),
            ("show-value", "false"),
            ("bindChange", ""),
            ("bindChanging", ""),
        ]),
    );
    reg.add_component(
        "Switch",
        attrs(&[
            ("checked", "false"),
            ("disabled", "false"),
            ("type", "'switch'"),
            ("color", "'#04BE02'"),
            ("bindChange", ""),
        ]),
    );
    reg.add_component(
        "Textarea",
        attrs(&[
            ("value", ""),
            ("placeholder", ""),
            ("placeholder-style", ""),
            ("placeholder-class", "'textarea-placeholder'"),
            ("disabled", "false"),
            ("maxlength", "140"),
            ("auto-focus", "false"),
            ("focus", "false"),
            ("auto-height", "false"),
            ("fixed", "false"),
            ("cursor-spacing", "0"),
            ("cursor", "-1"),
            ("show-confirm-bar", "true"),
            ("selection-start", "-1"),
            ("selection-end", "-1"),
            ("adjust-position", "true"),
            ("hold-keyboard", "false"),
            ("disable-default-padding", "false"),
            ("bindInput", ""),
            ("bindFocus", ""),
            ("bindBlur", ""),
            ("bindLineChange", ""),
            ("bindConfirm", ""),
            ("bindKeyboardHeightChange", ""),
        ]),
    );
    reg.add_component(
        "Editor",
        attrs(&[
            ("read-only", "false"),
            ("placeholder", ""),
            ("show-img-size", "false"),
            ("show-img-toolbar", "false"),
            ("show-img-resize", "false"),
            ("focus", "false"),
            ("bindReady", ""),
            ("bindFocus", ""),
            ("bindBlur", ""),
            ("bindInput", ""),
            ("bindStatusChange", ""),
        ]),
    );
    reg.add_component(
        "CoverImage",
        attrs(&[("src", ""), ("bindLoad", ""), ("bindError", "")]),
    );
    reg.add_component("CoverView", attrs(&[("scroll-top", "")]));
    reg.add_component("MovableArea", attrs(&[("scale-area", "false")]));
    reg.add_component(
        "MovableView",
        attrs(&[
            ("direction", "'none'"),
            ("inertia", "false"),
            ("out-of-bounds", "false"),
            ("x", ""),
            ("y", ""),
            ("damping", "20"),
            ("friction", "2"),
            ("disabled", "false"),
            ("scale", "false"),
            ("scale-min", "0.5"),
            ("scale-max", "10"),
            ("scale-value", "1"),
            ("animation", "true"),
            ("bindChange", ""),
            ("bindScale", ""),
            ("bindHTouchMove", ""),
            ("bindVTouchMove", ""),
        ]),
    );
    reg.add_component(
        "ScrollView",
        attrs(&[
            ("scroll-x", "false"),
            ("scroll-y", "false"),
            ("upper-threshold", "50"),
            ("lower-threshold", "50"),
            ("scroll-top", ""),
            ("scroll-left", ""),
            ("scroll-into-view", ""),
            ("scroll-with-animation", "false"),
            ("enable-back-to-top", "false"),
            ("enhanced", "false"),
            ("paging-enabled", "false"),
            ("show-scrollbar", "true"),
            ("bindScrollToUpper", ""),
            ("bindScrollToLower", ""),
            ("bindScroll", ""),
            ("bindDragStart", ""),
            ("bindDragging", ""),
            ("bindDragEnd", ""),
        ]),
    );
    reg.add_component(
        "Swiper",
        attrs(&[
            ("indicator-dots", "false"),
            ("indicator-color", "'rgba(0, 0, 0, .3)'"),
            ("indicator-active-color", "'#000000'"),
            ("autoplay", "false"),
            ("current", "0"),
            ("interval", "5000"),
            ("duration", "500"),
            ("circular", "false"),
            ("vertical", "false"),
            ("previous-margin", "'0px'"),
            ("next-margin", "'0px'"),
            ("snap-to-edge", "false"),
            ("display-multiple-items", "1"),
            ("easing-function", "'default'"),
            ("bindChange", ""),
            ("bindTransition", ""),
            ("bindAnimationFinish", ""),
        ]),
    );
    reg.add_component("SwiperItem", attrs(&[("item-id", "")]));
    reg.add_component(
        "Navigator",
        attrs(&[
            ("target", "'self'"),
            ("url", ""),
            ("open-type", "'navigate'"),
            ("delta", "1"),
            ("app-id", ""),
            ("path", ""),
            ("extra-data", ""),
            ("version", "'release'"),
            ("hover-class", "'navigator-hover'"),
            ("hover-stop-propagation", "false"),
            ("hover-start-time", "50"),
            ("hover-stay-time", "600"),
            ("bindSuccess", ""),
            ("bindFail", ""),
            ("bindComplete", ""),
        ]),
    );
    reg.add_component(
        "Image",
        attrs(&[
            ("src", ""),
            ("mode", "'scaleToFill'"),
            ("webp", "false"),
            ("lazy-load", "false"),
            ("show-menu-by-longpress", "false"),
            ("bindError", ""),
            ("bindLoad", ""),
        ]),
    );
    reg.add_component(
        "Video",
        attrs(&[
            ("src", ""),
            ("duration", ""),
            ("controls", "true"),
            ("danmu-list", ""),
            ("danmu-btn", ""),
            ("enable-danmu", ""),
            ("autoplay", "false"),
            ("loop", "false"),
            ("muted", "false"),
            ("initial-time", "0"),
            ("direction", ""),
            ("show-progress", "true"),
            ("show-fullscreen-btn", "true"),
            ("show-play-btn", "true"),
            ("show-center-play-btn", "true"),
            ("enable-progress-gesture", "true"),
            ("object-fit", "'contain'"),
            ("poster", ""),
            ("show-mute-btn", "false"),
            ("title", ""),
            ("play-btn-position", "'bottom'"),
            ("bindPlay", ""),
            ("bindPause", ""),
            ("bindEnded", ""),
            ("bindTimeUpdate", ""),
            ("bindFullScreenChange", ""),
            ("bindWaiting", ""),
            ("bindError", ""),
            ("bindProgress", ""),
        ]),
    );
    reg.add_component(
        "Canvas",
        attrs(&[
            ("type", ""),
            ("canvas-id", ""),
            ("disable-scroll", "false"),
            ("bindTouchStart", ""),
            ("bindTouchMove", ""),
            ("bindTouchEnd", ""),
            ("bindTouchCancel", ""),
            ("bindLongTap", ""),
            ("bindError", ""),
        ]),
    );
    reg.add_component("Block", AttrMap::new());
    reg.add_component("Slot", attrs(&[("name", "")]));
    reg.add_component("SlotView", attrs(&[("name", "")]));
    reg.add_component("NativeSlot", attrs(&[("name", "")]));
    reg.add_component("ListBuilder", attrs(&[("list", ""), ("child-count", "")]));

    for name in [
        "progress",
        "icon",
        "rich-text",
        "input",
        "textarea",
        "slider",
        "switch",
        "cover-image",
    ] {
        reg.mark_void(name);
    }

    for name in ["input", "textarea", "editor"] {
        reg.mark_focusable(name);
    }

    // 0 = unbounded
    for (name, max) in [
        ("view", 0),
        ("catch-view", 0),
        ("cover-view", 0),
        ("static-view", 0),
        ("pure-view", 0),
        ("click-view", 0),
        ("block", 0),
        ("text", 0),
        ("static-text", 6),
        ("slot", 8),
        ("slot-view", 8),
        ("label", 6),
        ("form", 4),
        ("scroll-view", 4),
        ("swiper", 4),
        ("swiper-item", 4),
    ] {
        reg.set_nest_limit(name, max);
    }

    reg
}
