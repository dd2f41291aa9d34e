//! Node descriptors exchanged with the host render pipeline.
//!
//! | Type          | Shape                                        |
//! |---------------|----------------------------------------------|
//! | `MarkupNode`  | head / end-of-body list entry                |
//! | `ElementNode` | `{ type, props }` literal element            |
//! | `SliceMarker` | `{ sliceId }` framework content slice        |
//! | `RootElement` | `{ props: { children } }` root UI element    |
//!
//! All of them decode from and encode to the host's JSON shape without
//! losing fields this crate does not look at.

mod element;
mod props;
mod root;

pub use element::{ElementNode, MarkupNode, NodeList, SliceMarker};
pub use props::Props;
pub use root::{Children, RootElement, RootProps, child_id};
