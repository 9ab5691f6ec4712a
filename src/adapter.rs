//! Platform dialect table. Every directive the generator emits is looked up
//! here, so the same build pipeline can target any mini-program markup
//! flavor by swapping the adapter.

use serde::{Deserialize, Serialize};

/// Names of the control-flow directives and the script extension for one
/// mini-program platform.
///
/// `xs` is `None` on platforms without an inline script dialect; the
/// generator then skips the script import line entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adapter {
    pub r#if: String,
    pub r#else: String,
    pub elseif: String,
    pub r#for: String,
    pub for_item: String,
    pub for_index: String,
    pub key: String,
    pub xs: Option<String>,
    pub r#type: String,
}

impl Adapter {
    /// The WeChat dialect. This is the reference platform and the default.
    pub fn weixin() -> Self {
        Adapter {
            r#if: "wx:if".to_string(),
            r#else: "wx:else".to_string(),
            elseif: "wx:elif".to_string(),
            r#for: "wx:for".to_string(),
            for_item: "wx:for-item".to_string(),
            for_index: "wx:for-index".to_string(),
            key: "wx:key".to_string(),
            xs: Some("wxs".to_string()),
            r#type: "weapp".to_string(),
        }
    }

    /// The Alipay dialect. Carries its own script extension (`sjs`).
    pub fn alipay() -> Self {
        Adapter {
            r#if: "a:if".to_string(),
            r#else: "a:else".to_string(),
            elseif: "a:elif".to_string(),
            r#for: "a:for".to_string(),
            for_item: "a:for-item".to_string(),
            for_index: "a:for-index".to_string(),
            key: "a:key".to_string(),
            xs: Some("sjs".to_string()),
            r#type: "alipay".to_string(),
        }
    }
}

impl Default for Adapter {
    fn default() -> Self {
        Adapter::weixin()
    }
}
