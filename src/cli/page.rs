//! Page component files.
//!
//! A page file is the host's per-page render state serialized as JSON:
//!
//! ```json
//! {
//!   "head": [{ "type": "meta", "props": { "name": "generator" } }],
//!   "postBody": [{ "type": "script", "props": { "src": "/app.js" } }],
//!   "root": { "props": { "children": [] } }
//! }
//! ```
//!
//! Keys other than these are carried through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::NojsConfig;
use crate::core::BuildMode;
use crate::node::{NodeList, RootElement};
use crate::pipeline::{PreRenderApi, on_pre_render_html, wrap_root_element};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid page file `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub head: NodeList,

    #[serde(rename = "postBody", alias = "post_body", default)]
    pub post_body: NodeList,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<RootElement>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What processing a page changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageReport {
    pub head_removed: usize,
    pub post_body_removed: usize,
    pub root_replaced: bool,
}

impl PageReport {
    pub const fn nodes_removed(&self) -> usize {
        self.head_removed + self.post_body_removed
    }
}

impl Page {
    pub fn read(path: &Path) -> Result<Self, PageError> {
        let content = fs::read_to_string(path).map_err(|e| PageError::Io(path.to_path_buf(), e))?;
        serde_json::from_str(&content).map_err(|e| PageError::Json(path.to_path_buf(), e))
    }

    pub fn write(&self, path: &Path) -> Result<(), PageError> {
        let mut content =
            serde_json::to_string_pretty(self).map_err(|e| PageError::Json(path.to_path_buf(), e))?;
        content.push('\n');
        fs::write(path, content).map_err(|e| PageError::Io(path.to_path_buf(), e))
    }

    /// Run both host hooks over this page.
    pub fn process(&mut self, config: &NojsConfig, mode: BuildMode) -> PageReport {
        let (head_before, post_body_before) = (self.head.len(), self.post_body.len());

        on_pre_render_html(self, &config.head, mode);

        let replacement = self
            .root
            .as_ref()
            .and_then(|root| wrap_root_element(root, &config.root, mode));
        let root_replaced = replacement.is_some();
        if replacement.is_some() {
            self.root = replacement;
        }

        PageReport {
            head_removed: head_before - self.head.len(),
            post_body_removed: post_body_before - self.post_body.len(),
            root_replaced,
        }
    }
}

impl PreRenderApi for Page {
    fn head_components(&self) -> NodeList {
        self.head.clone()
    }

    fn replace_head_components(&mut self, head: NodeList) {
        self.head = head;
    }

    fn post_body_components(&self) -> NodeList {
        self.post_body.clone()
    }

    fn replace_post_body_components(&mut self, post_body: NodeList) {
        self.post_body = post_body;
    }
}
