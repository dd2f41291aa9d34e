//! Host lifecycle hooks.
//!
//! The host calls `on_pre_render_html` once per page before emitting HTML,
//! and `wrap_root_element` when it builds the root UI element. Both are
//! no-ops outside production.

use crate::config::{HeadOptions, RootOptions};
use crate::core::BuildMode;
use crate::node::{NodeList, RootElement};

use super::{AnnouncerStrip, Pipeline, filter_components};

/// Accessors and mutators the host exposes for one page render.
pub trait PreRenderApi {
    fn head_components(&self) -> NodeList;
    fn replace_head_components(&mut self, head: NodeList);
    fn post_body_components(&self) -> NodeList;
    fn replace_post_body_components(&mut self, post_body: NodeList);
}

/// Normalize the page's head and end-of-body lists.
///
/// In production, reads both lists and writes both back in full, even when
/// nothing changed. Otherwise no accessor or mutator is called.
pub fn on_pre_render_html<A>(api: &mut A, options: &HeadOptions, mode: BuildMode)
where
    A: PreRenderApi + ?Sized,
{
    if !mode.is_production() {
        return;
    }

    let (head, post_body) =
        filter_components(api.head_components(), api.post_body_components(), options);

    api.replace_head_components(head);
    api.replace_post_body_components(post_body);
}

/// Produce a replacement root element, or `None` to keep the original.
///
/// A replacement is only produced in production, with
/// `remove_gatsby_announcer` on, and when the children form a sequence.
pub fn wrap_root_element(
    element: &RootElement,
    options: &RootOptions,
    mode: BuildMode,
) -> Option<RootElement> {
    if !mode.is_production() || !options.remove_gatsby_announcer {
        return None;
    }
    element.child_list()?;

    Some(Pipeline::new(element.clone()).pipe(AnnouncerStrip).into_inner())
}
