//! # Mini-Program Base Template Generation
//!
//! Mini-program pages do not render a component tree directly. The runtime
//! hands the page a serialized node tree, and a library of `<template>`
//! blocks generated here renders it by name dispatch. This crate builds
//! that library for any platform dialect.
//!
//! ## Rendering Invariants
//!
//! 1. **Name dispatch**: every node carries a short name `nn`; the block
//!    rendering it is `tmpl_<level>_<nn>`. Aliases keep the document small:
//!    catalog components dispatch by number, third-party ones by raw name.
//!
//! 2. **Data protocol**: templates receive `i` (the node), and in the
//!    unrolled strategy `c` (the cascade level counter, seeded at 1) and
//!    `l` (the ancestor path of depth-recounted components). Children
//!    always loop over `i.cn` keyed by `sid`.
//!
//! 3. **Strategies**: dialects that allow self-referencing templates need
//!    one floor at level 0. Dialects that reject self-reference get the
//!    library unrolled into `base_level` floors; the last floor holds only
//!    the container bridge, which routes overflowing subtrees through the
//!    `comp` component and restarts the cascade at level 0.
//!
//! 4. **Focus split**: focusable components render through a dispatcher
//!    that swaps whole `_focus`/`_blur` template variants instead of
//!    mutating the focus attribute in place.
//!
//! 5. **Script module**: when the platform has an inline script dialect,
//!    template names resolve through a generated module exposing `a`
//!    (name resolution), `b`/`d` (default guards), `c` (focus dispatch),
//!    `e` (container naming) and, unrolled only, `f` (ancestor path
//!    accumulation).

mod adapter;
mod alias;
mod components;
mod error;
mod normalize;
mod recursive;
pub mod shortcuts;
mod template;
mod unrecursive;
mod utils;

#[cfg(test)]
mod template_tests;

pub use adapter::Adapter;
pub use alias::{component_aliases, AliasTable, ComponentAlias};
pub use components::{AttrMap, ComponentRegistry};
pub use error::TemplateError;
pub use template::{
    BuildOptions, ComponentConfig, DefaultHooks, GeneratedDocument, PlatformHooks, Strategy,
    TemplateCompiler, COMPILE_MODE_PREFIX, ROOT_TEMPLATE,
};
pub use utils::{to_camel_case, to_dashed, to_kebab_case};
