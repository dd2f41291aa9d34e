//! Drops `<meta name="generator">` from head.

use crate::node::MarkupNode;
use crate::pipeline::{Components, Transform};

pub struct GeneratorStrip;

fn is_generator_meta(node: &MarkupNode) -> bool {
    node.as_element()
        .is_some_and(|elem| elem.is_tag("meta") && elem.prop_is("name", "generator"))
}

impl Transform<Components> for GeneratorStrip {
    fn transform(self, mut doc: Components) -> Components {
        doc.head.retain(|node| !is_generator_meta(node));
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_generator_meta_removed() {
        let head = serde_json::from_value(json!([
            { "type": "meta", "props": { "name": "generator", "content": "Gatsby 5.13.0" } },
            { "type": "meta", "props": { "name": "viewport" } },
            { "type": "link", "props": { "name": "generator" } },
            { "type": "meta", "props": { "property": "generator" } },
            { "type": "meta" }
        ]))
        .unwrap();
        let post_body = serde_json::from_value(json!([
            { "type": "meta", "props": { "name": "generator" } }
        ]))
        .unwrap();

        let doc = GeneratorStrip.transform(Components::new(head, post_body));

        assert_eq!(
            serde_json::to_value(&doc.head).unwrap(),
            json!([
                { "type": "meta", "props": { "name": "viewport" } },
                { "type": "link", "props": { "name": "generator" } },
                { "type": "meta", "props": { "property": "generator" } },
                { "type": "meta" }
            ])
        );
        // end-of-body is not touched
        assert_eq!(doc.post_body.len(), 1);
    }
}
