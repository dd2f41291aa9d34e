//! Post-render normalization pipeline.
//!
//! Runs once per page, after the host has produced its head list, its
//! end-of-body list and its root UI element, and before final HTML is
//! emitted.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  on_pre_render_html (head + postBody)                    │
//! │  ScriptStrip -> GeneratorStrip -> DataAttrStrip          │
//! │              -> InlineStyleLink                          │
//! └──────────────────────────────────────────────────────────┘
//!
//! ┌──────────────────────────────────────────────────────────┐
//! │  wrap_root_element (root UI element)                     │
//! │  AnnouncerStrip                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage takes its input by value and hands back the result, so no
//! node is ever observed half-rewritten by anyone else. Nothing here fails:
//! a node missing the fields a stage looks at is left as it is.

mod hooks;
pub mod transform;

pub use hooks::{PreRenderApi, on_pre_render_html, wrap_root_element};
pub use transform::{AnnouncerStrip, DataAttrStrip, GeneratorStrip, InlineStyleLink, ScriptStrip};

use crate::config::HeadOptions;
use crate::node::NodeList;

// =============================================================================
// Types
// =============================================================================

/// A single rewrite step over a value of type `D`.
pub trait Transform<D> {
    fn transform(self, doc: D) -> D;
}

/// Chains transforms over an owned value.
#[derive(Debug)]
pub struct Pipeline<D> {
    doc: D,
}

impl<D> Pipeline<D> {
    pub const fn new(doc: D) -> Self {
        Self { doc }
    }

    /// Apply `step`.
    #[inline]
    pub fn pipe<T: Transform<D>>(self, step: T) -> Self {
        Self {
            doc: step.transform(self.doc),
        }
    }

    /// Apply `step` only when `enabled`.
    #[inline]
    pub fn pipe_if<T: Transform<D>>(self, enabled: bool, step: T) -> Self {
        if enabled { self.pipe(step) } else { self }
    }

    pub fn into_inner(self) -> D {
        self.doc
    }
}

/// The two lists the pre-render hook hands over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    /// Nodes injected before `</head>`.
    pub head: NodeList,
    /// Nodes injected before `</body>`.
    pub post_body: NodeList,
}

impl Components {
    pub fn new(head: NodeList, post_body: NodeList) -> Self {
        Self { head, post_body }
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Run the head/end-of-body stages enabled by `options`, in order.
///
/// Pure: ignores the build mode. Use [`on_pre_render_html`] for the gated
/// host-facing entry point.
pub fn filter_components(
    head: NodeList,
    post_body: NodeList,
    options: &HeadOptions,
) -> (NodeList, NodeList) {
    let out = Pipeline::new(Components::new(head, post_body))
        .pipe_if(options.no_script, ScriptStrip)
        .pipe_if(options.remove_generator_tag, GeneratorStrip)
        .pipe_if(options.strips_data_attrs(), DataAttrStrip)
        .pipe_if(options.no_inline_styles, InlineStyleLink)
        .into_inner();

    (out.head, out.post_body)
}
