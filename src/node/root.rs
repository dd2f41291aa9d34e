//! Root UI element handed over by the root-element wrap hook.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `{ props: { children } }` plus anything else the host attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootElement {
    #[serde(default)]
    pub props: RootProps,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootProps {
    /// `None` only when the key is missing; an explicit `null` is kept.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub children: Option<Children>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Children are only filtered when they form a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Children {
    List(Vec<Value>),
    Other(Value),
}

impl RootElement {
    pub fn with_children(children: Vec<Value>) -> Self {
        Self {
            props: RootProps {
                children: Some(Children::List(children)),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    /// Children as a sequence, if they are one.
    pub fn child_list(&self) -> Option<&[Value]> {
        match &self.props.children {
            Some(Children::List(list)) => Some(list),
            _ => None,
        }
    }
}

/// `props.id` of a child node, when it is a string.
pub fn child_id(child: &Value) -> Option<&str> {
    child.pointer("/props/id").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_children_shapes() {
        let list: RootElement =
            serde_json::from_value(json!({ "props": { "children": [{ "props": { "id": "a" } }] } }))
                .unwrap();
        assert_eq!(list.child_list().map(<[Value]>::len), Some(1));

        let single: RootElement =
            serde_json::from_value(json!({ "props": { "children": { "props": { "id": "a" } } } }))
                .unwrap();
        assert!(single.child_list().is_none());

        let bare: RootElement = serde_json::from_value(json!({ "type": "div" })).unwrap();
        assert!(bare.child_list().is_none());
        assert_eq!(bare.extra.get("type"), Some(&json!("div")));
    }

    #[test]
    fn test_null_children_written_back() {
        let src = json!({ "props": { "children": null, "className": "app" } });
        let root: RootElement = serde_json::from_value(src.clone()).unwrap();
        assert_eq!(root.props.children, Some(Children::Other(Value::Null)));
        assert!(root.child_list().is_none());
        assert_eq!(serde_json::to_value(&root).unwrap(), src);
    }

    #[test]
    fn test_child_id() {
        assert_eq!(child_id(&json!({ "props": { "id": "main" } })), Some("main"));
        assert_eq!(child_id(&json!({ "props": {} })), None);
        assert_eq!(child_id(&json!("text")), None);
    }
}
