//! Strips framework instrumentation attributes from head nodes.
//!
//! Only attributes go; nodes themselves are never removed.

use crate::node::MarkupNode;
use crate::pipeline::{Components, Transform};

/// Marker the head API puts on every node it manages.
const GATSBY_HEAD_ATTR: &str = "data-gatsby-head";
/// Marker left by the helmet document-head manager.
const REACT_HELMET_ATTR: &str = "data-react-helmet";

pub struct DataAttrStrip;

impl Transform<Components> for DataAttrStrip {
    fn transform(self, mut doc: Components) -> Components {
        for node in &mut doc.head {
            match node {
                MarkupNode::Element(elem) => {
                    if let Some(props) = elem.props.as_mut() {
                        props.remove(GATSBY_HEAD_ATTR);
                        props.remove(REACT_HELMET_ATTR);
                    }
                }
                MarkupNode::Slice(slice) => {
                    if let Some(props) = slice.props_mut() {
                        props.shift_remove(GATSBY_HEAD_ATTR);
                        props.shift_remove(REACT_HELMET_ATTR);
                    }
                }
            }
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strips_both_markers() {
        let head = serde_json::from_value(json!([
            { "type": "title", "props": { "data-gatsby-head": true, "children": "Hi" } },
            { "type": "meta", "props": { "name": "a", "data-react-helmet": "true", "content": "b" } },
            { "type": "base", "props": { "data-gatsby-head": 1, "data-react-helmet": 1 } },
            { "type": "noscript" },
            { "sliceId": "head" },
            { "type": "Slice", "props": { "sliceId": "seo", "data-gatsby-head": true } }
        ]))
        .unwrap();

        let doc = DataAttrStrip.transform(Components::new(head, Vec::new()));

        assert_eq!(
            serde_json::to_value(&doc.head).unwrap(),
            json!([
                { "type": "title", "props": { "children": "Hi" } },
                { "type": "meta", "props": { "name": "a", "content": "b" } },
                { "type": "base", "props": {} },
                { "type": "noscript" },
                { "sliceId": "head" },
                { "type": "Slice", "props": { "sliceId": "seo" } }
            ])
        );
    }

    #[test]
    fn test_post_body_untouched() {
        let post_body = serde_json::from_value(json!([
            { "type": "div", "props": { "data-gatsby-head": true } }
        ]))
        .unwrap();
        let doc = DataAttrStrip.transform(Components::new(Vec::new(), post_body));
        assert!(doc.post_body[0].as_element().unwrap().has_prop("data-gatsby-head"));
    }
}
