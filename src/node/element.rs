//! Head and end-of-body node descriptors.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::Props;

/// Ordered render list; survivors of any filter keep their relative order.
pub type NodeList = Vec<MarkupNode>;

/// One entry of a head or end-of-body list.
///
/// Lists mix literal markup elements with framework-managed slice
/// placeholders. The two shapes are told apart once, at decode time.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Element(ElementNode),
    Slice(SliceMarker),
}

impl MarkupNode {
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(elem) => Some(elem),
            Self::Slice(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementNode> {
        match self {
            Self::Element(elem) => Some(elem),
            Self::Slice(_) => None,
        }
    }

    pub fn as_slice(&self) -> Option<&SliceMarker> {
        match self {
            Self::Slice(slice) => Some(slice),
            Self::Element(_) => None,
        }
    }
}

// ============================================================================
// Element
// ============================================================================

/// A literal markup element: `{ type, props }` plus whatever else the host
/// attached (keys, refs), which is carried through untouched.
///
/// Decoding never fails on shape. An explicit `"type": null` stays
/// `Some(Value::Null)`, and a `props` that is not an object (`null`
/// included) is kept in `extra`, so both are written back as they came.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementNode {
    /// Element kind. Hosts may put non-string values here (component
    /// references); those never match a tag predicate.
    pub kind: Option<Value>,

    pub props: Option<Props>,

    pub extra: Map<String, Value>,
}

impl ElementNode {
    pub fn new(tag: &str, props: Props) -> Self {
        Self {
            kind: Some(Value::String(tag.to_owned())),
            props: Some(props),
            extra: Map::new(),
        }
    }

    fn from_map(mut map: Map<String, Value>) -> Self {
        let kind = map.shift_remove("type");
        let props = match map.shift_remove("props") {
            Some(Value::Object(props)) => Some(Props::from(props)),
            Some(other) => {
                map.insert("props".into(), other);
                None
            }
            None => None,
        };
        Self {
            kind,
            props,
            extra: map,
        }
    }

    /// Element kind when it is a string.
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        self.kind.as_ref().and_then(Value::as_str)
    }

    #[inline]
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }

    /// Whether `props[key]` is exactly the string `expected`.
    #[inline]
    pub fn prop_is(&self, key: &str, expected: &str) -> bool {
        self.props.as_ref().is_some_and(|p| p.is(key, expected))
    }

    #[inline]
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.as_ref().and_then(|p| p.get_str(key))
    }

    #[inline]
    pub fn has_prop(&self, key: &str) -> bool {
        self.props.as_ref().is_some_and(|p| p.has(key))
    }

    /// Turn this element into `<tag ...props>`, dropping every previous
    /// attribute.
    pub fn replace_with(&mut self, tag: &str, props: Props) {
        self.kind = Some(Value::String(tag.to_owned()));
        self.props = Some(props);
        self.extra.shift_remove("props");
    }
}

// ============================================================================
// Slice marker
// ============================================================================

/// Placeholder for a framework-managed content slice.
///
/// The original object is kept verbatim so it re-serializes unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceMarker {
    pub slice_id: String,
    raw: Map<String, Value>,
}

impl SliceMarker {
    pub fn new(slice_id: impl Into<String>) -> Self {
        let slice_id = slice_id.into();
        let mut raw = Map::new();
        raw.insert("sliceId".into(), Value::String(slice_id.clone()));
        Self { slice_id, raw }
    }

    /// Attribute mapping of a slice written in element shape
    /// (`{ type, props: { sliceId } }`).
    pub fn props_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.raw.get_mut("props").and_then(Value::as_object_mut)
    }

    /// Recognize a slice placeholder.
    ///
    /// A string `sliceId` on the entry itself always marks one. Inside
    /// `props` it only does for component entries: a lowercase string
    /// `type` names a literal element (`script`, `div`), which stays an
    /// element whatever its attributes.
    fn detect(map: &Map<String, Value>) -> Option<String> {
        if let Some(id) = map.get("sliceId").and_then(Value::as_str) {
            return Some(id.to_owned());
        }
        if map.get("type").and_then(Value::as_str).is_some_and(is_intrinsic_tag) {
            return None;
        }
        map.get("props")
            .and_then(|p| p.get("sliceId"))
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

/// Intrinsic element names start lowercase; component names don't.
fn is_intrinsic_tag(tag: &str) -> bool {
    tag.starts_with(|c: char| c.is_ascii_lowercase())
}

// ============================================================================
// serde
// ============================================================================

impl<'de> Deserialize<'de> for ElementNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Self::from_map)
    }
}

impl Serialize for ElementNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(kind) = &self.kind {
            map.serialize_entry("type", kind)?;
        }
        if let Some(props) = &self.props {
            map.serialize_entry("props", props)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MarkupNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;

        Ok(match SliceMarker::detect(&map) {
            Some(slice_id) => Self::Slice(SliceMarker { slice_id, raw: map }),
            None => Self::Element(ElementNode::from_map(map)),
        })
    }
}

impl Serialize for MarkupNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Element(elem) => elem.serialize(serializer),
            Self::Slice(slice) => slice.raw.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: Value) -> MarkupNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_decode_element() {
        let n = node(json!({ "type": "link", "props": { "rel": "preload" }, "key": "k1" }));
        let elem = n.as_element().expect("element");
        assert!(elem.is_tag("link"));
        assert!(elem.prop_is("rel", "preload"));
        assert_eq!(elem.extra.get("key"), Some(&json!("k1")));
    }

    #[test]
    fn test_decode_slice_top_level_and_nested() {
        let top = node(json!({ "sliceId": "_gatsby-scripts" }));
        assert_eq!(top.as_slice().unwrap().slice_id, "_gatsby-scripts");

        let nested = node(json!({ "type": "Slice", "props": { "sliceId": "footer" } }));
        assert_eq!(nested.as_slice().unwrap().slice_id, "footer");
    }

    #[test]
    fn test_slice_props_mut() {
        let mut nested = node(json!({ "type": "Slice", "props": { "sliceId": "x", "a": 1 } }));
        let MarkupNode::Slice(slice) = &mut nested else {
            panic!("expected slice");
        };
        slice.props_mut().unwrap().shift_remove("a");
        assert_eq!(
            serde_json::to_value(&nested).unwrap(),
            json!({ "type": "Slice", "props": { "sliceId": "x" } })
        );

        let mut top = SliceMarker::new("y");
        assert!(top.props_mut().is_none());
    }

    #[test]
    fn test_element_with_nested_slice_id_stays_element() {
        let n = node(json!({ "type": "script", "props": { "sliceId": "x" } }));
        let elem = n.as_element().expect("intrinsic tag is an element");
        assert!(elem.is_tag("script"));

        let n = node(json!({ "props": { "sliceId": "x" } }));
        assert_eq!(n.as_slice().unwrap().slice_id, "x");
    }

    #[test]
    fn test_explicit_nulls_survive() {
        let src = json!([
            { "type": null, "props": null, "key": "a" },
            { "type": "meta", "props": "odd" }
        ]);
        let list: NodeList = serde_json::from_value(src.clone()).unwrap();

        let first = list[0].as_element().unwrap();
        assert_eq!(first.kind, Some(Value::Null));
        assert_eq!(first.tag(), None);
        assert!(first.props.is_none());
        assert!(!first.has_prop("rel"));

        assert_eq!(serde_json::to_value(&list).unwrap(), src);
    }

    #[test]
    fn test_non_string_slice_id_is_element() {
        let n = node(json!({ "sliceId": 7 }));
        assert!(n.as_element().is_some());
    }

    #[test]
    fn test_missing_fields_decode() {
        let n = node(json!({}));
        let elem = n.as_element().unwrap();
        assert_eq!(elem.tag(), None);
        assert!(elem.props.is_none());
        assert!(!elem.has_prop("rel"));
    }

    #[test]
    fn test_component_type_is_not_a_tag() {
        let n = node(json!({ "type": { "name": "Helmet" }, "props": {} }));
        assert_eq!(n.as_element().unwrap().tag(), None);
    }

    #[test]
    fn test_reencode_is_verbatim() {
        let src = json!([
            { "type": "meta", "props": { "name": "generator", "content": "x" }, "key": "g" },
            { "type": "Slice", "props": { "sliceId": "_gatsby-scripts" } }
        ]);
        let list: NodeList = serde_json::from_value(src.clone()).unwrap();
        assert_eq!(serde_json::to_value(&list).unwrap(), src);
    }

    #[test]
    fn test_replace_with_drops_old_props() {
        let mut elem = ElementNode::new("style", Props::from_iter([("id".into(), json!("x"))]));
        elem.replace_with("link", Props::from_iter([("rel".into(), json!("stylesheet"))]));
        assert!(elem.is_tag("link"));
        assert!(!elem.has_prop("id"));
        assert!(elem.prop_is("rel", "stylesheet"));
    }
}
