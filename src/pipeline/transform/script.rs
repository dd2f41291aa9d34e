//! Script and preload stripping.
//!
//! Head: `<link rel="preload" as="script|fetch">` goes, unless it carries a
//! `data-allowed` attribute.
//!
//! End of body: `<script>` without a `type`, or with an executable one, goes,
//! along with the bootstrap-scripts slice placeholder.

use serde_json::Value;

use crate::node::{ElementNode, MarkupNode};
use crate::pipeline::{Components, Transform};

/// Script `type` values browsers execute.
const EXECUTABLE_SCRIPT_TYPES: &[&str] = &[
    "module",
    "importmap",
    "text/javascript",
    "application/javascript",
];

/// Preload destinations that only feed scripts.
const SCRIPT_PRELOAD_AS: &[&str] = &["script", "fetch"];

/// Slice id under which the host renders its bootstrap scripts.
pub const SCRIPTS_SLICE_ID: &str = "_gatsby-scripts";

/// Attribute that keeps an otherwise-stripped preload.
const ALLOW_ATTR: &str = "data-allowed";

pub struct ScriptStrip;

impl ScriptStrip {
    fn is_script_preload(elem: &ElementNode) -> bool {
        if !elem.is_tag("link") || elem.has_prop(ALLOW_ATTR) {
            return false;
        }
        elem.prop_is("rel", "preload")
            && elem
                .prop_str("as")
                .is_some_and(|dest| SCRIPT_PRELOAD_AS.contains(&dest))
    }

    fn is_executable_script(elem: &ElementNode) -> bool {
        if !elem.is_tag("script") {
            return false;
        }
        match elem.props.as_ref().and_then(|p| p.get("type")) {
            None => true,
            Some(kind) if is_falsy(kind) => true,
            Some(kind) => kind
                .as_str()
                .is_some_and(|kind| EXECUTABLE_SCRIPT_TYPES.contains(&kind)),
        }
    }

    fn keep_in_head(node: &MarkupNode) -> bool {
        match node {
            MarkupNode::Element(elem) => !Self::is_script_preload(elem),
            MarkupNode::Slice(_) => true,
        }
    }

    fn keep_in_post_body(node: &MarkupNode) -> bool {
        match node {
            MarkupNode::Element(elem) => !Self::is_executable_script(elem),
            MarkupNode::Slice(slice) => slice.slice_id != SCRIPTS_SLICE_ID,
        }
    }
}

/// A `type` of `""`, `null`, `false` or `0` counts as no `type` at all.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl Transform<Components> for ScriptStrip {
    fn transform(self, mut doc: Components) -> Components {
        doc.head.retain(Self::keep_in_head);
        doc.post_body.retain(Self::keep_in_post_body);
        doc
    }
}
