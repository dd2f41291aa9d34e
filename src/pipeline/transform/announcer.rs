//! Drops the accessibility announcer node from the root element's children.

use crate::node::{Children, RootElement, child_id};
use crate::pipeline::Transform;

/// `id` of the live-region node the host injects for route announcements.
pub const ANNOUNCER_ID: &str = "gatsby-announcer";

pub struct AnnouncerStrip;

impl Transform<RootElement> for AnnouncerStrip {
    fn transform(self, mut root: RootElement) -> RootElement {
        if let Some(Children::List(children)) = &mut root.props.children {
            children.retain(|child| child_id(child) != Some(ANNOUNCER_ID));
        }
        root
    }
}
