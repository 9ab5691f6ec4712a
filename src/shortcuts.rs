//! Short keys of the serialized node payload.
//!
//! Generated markup addresses node fields through these keys and the runtime
//! hydrater emits payloads using the same keys. Both sides must agree, so the
//! full protocol lives here even though the generator only reads a subset.

pub const CONTAINER: &str = "container";
pub const CHILDNODES: &str = "cn";
pub const CHILDREN: &str = "ch";
pub const TEXT: &str = "v";
pub const NODE_TYPE: &str = "nt";
pub const NODE_NAME: &str = "nn";
pub const SID: &str = "sid";
pub const STYLE: &str = "st";
pub const CLASS: &str = "cl";
pub const SRC: &str = "src";

/// Node-name sentinel for plain text nodes.
pub const TEXT_NODE_NAME: &str = "#text";

/// Attribute value marking an event-handler binding.
pub const EVENT_HANDLER: &str = "eh";
