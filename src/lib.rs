//! nojs - post-render markup normalization for static sites.
//!
//! Sits between a static-site build's render step and its HTML emission.
//! In production builds it strips script preloads, bootstrap scripts, the
//! generator tag, framework instrumentation attributes and the route
//! announcer, and can turn inlined styles back into stylesheet links.
//!
//! ```ignore
//! use nojs::{BuildMode, NojsConfig, on_pre_render_html, wrap_root_element};
//!
//! let mode = BuildMode::from_env(); // once, at startup
//! let config = NojsConfig::load(None, &cwd)?;
//!
//! on_pre_render_html(&mut page, &config.head, mode);
//! if let Some(root) = wrap_root_element(&element, &config.root, mode) {
//!     element = root;
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod node;
pub mod pipeline;

pub use config::{HeadOptions, NojsConfig, RootOptions};
pub use crate::core::BuildMode;
pub use node::{Children, ElementNode, MarkupNode, NodeList, Props, RootElement, SliceMarker};
pub use pipeline::{PreRenderApi, filter_components, on_pre_render_html, wrap_root_element};
