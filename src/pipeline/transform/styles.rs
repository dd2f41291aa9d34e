//! Externalizes inline styles.
//!
//! `<style data-href="/x.css">...</style>` becomes
//! `<link rel="stylesheet" href="/x.css">`; every other attribute of the
//! style node (its inlined CSS included) is dropped.

use serde_json::Value;

use crate::node::{ElementNode, Props};
use crate::pipeline::{Components, Transform};

/// Attribute holding the URL the inlined CSS came from.
const SOURCE_ATTR: &str = "data-href";

pub struct InlineStyleLink;

impl InlineStyleLink {
    fn rewrite(elem: &mut ElementNode) {
        if !elem.is_tag("style") {
            return;
        }
        let Some(href) = elem.props.as_ref().and_then(|p| p.get(SOURCE_ATTR)).cloned() else {
            return;
        };

        let mut props = Props::new();
        props.insert("rel", Value::String("stylesheet".into()));
        props.insert("href", href);
        elem.replace_with("link", props);
    }
}

impl Transform<Components> for InlineStyleLink {
    fn transform(self, mut doc: Components) -> Components {
        doc.head
            .iter_mut()
            .filter_map(|node| node.as_element_mut())
            .for_each(Self::rewrite);
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(head: Value) -> Value {
        let head = serde_json::from_value(head).unwrap();
        let doc = InlineStyleLink.transform(Components::new(head, Vec::new()));
        serde_json::to_value(&doc.head).unwrap()
    }

    #[test]
    fn test_style_becomes_link() {
        assert_eq!(
            run(json!([{ "type": "style", "props": { "data-href": "/a.css" } }])),
            json!([{ "type": "link", "props": { "rel": "stylesheet", "href": "/a.css" } }])
        );
    }

    #[test]
    fn test_other_attributes_dropped() {
        assert_eq!(
            run(json!([{
                "type": "style",
                "props": {
                    "id": "gatsby-global-css",
                    "data-href": "/styles.abc.css",
                    "dangerouslySetInnerHTML": { "__html": "body{margin:0}" }
                }
            }])),
            json!([{ "type": "link", "props": { "rel": "stylesheet", "href": "/styles.abc.css" } }])
        );
    }

    #[test]
    fn test_untouched_without_data_href() {
        let head = json!([
            { "type": "style", "props": { "id": "x" } },
            { "type": "style" },
            { "type": "link", "props": { "data-href": "/b.css" } }
        ]);
        assert_eq!(run(head.clone()), head);
    }

    #[test]
    fn test_rewritten_node_no_longer_matches() {
        let once = run(json!([{ "type": "style", "props": { "data-href": "/a.css" } }]));
        assert_eq!(run(once.clone()), once);
    }
}
