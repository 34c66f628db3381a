//! The resume document root.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Content, Layout};
use crate::error::{Error, Result};

/// A validated resume: content plus one or more layouts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawResume")]
pub struct Resume {
    /// Factual resume data
    pub content: Content,
    /// Output configurations, never empty
    pub layouts: Vec<Layout>,
}

/// Wire shape: a single `layout` and a list of `layouts` are both accepted.
#[derive(Deserialize)]
struct RawResume {
    content: Content,
    #[serde(default)]
    layout: Option<Layout>,
    #[serde(default)]
    layouts: Option<Vec<Layout>>,
}

impl From<RawResume> for Resume {
    fn from(raw: RawResume) -> Self {
        let layouts = match (raw.layouts, raw.layout) {
            (Some(layouts), Some(_)) => {
                log::warn!("both `layout` and `layouts` are set, using `layouts`");
                layouts
            }
            (Some(layouts), None) => layouts,
            (None, Some(layout)) => vec![layout],
            (None, None) => Vec::new(),
        };
        Resume::new(raw.content, layouts)
    }
}

impl Resume {
    /// Create a resume. An empty layout list gets one default layout.
    pub fn new(content: Content, mut layouts: Vec<Layout>) -> Self {
        if layouts.is_empty() {
            layouts.push(Layout::default());
        }
        Self { content, layouts }
    }

    /// Convert a plain value into a typed resume.
    ///
    /// `null` values are dropped first, so an explicit `null` behaves exactly
    /// like a missing field.
    pub fn from_value(mut value: Value) -> Result<Self> {
        prune_nulls(&mut value);
        serde_json::from_value(value).map_err(Error::from)
    }

    /// Get a layout by index.
    pub fn layout(&self, index: usize) -> Result<&Layout> {
        self.layouts
            .get(index)
            .ok_or(Error::LayoutOutOfRange(index, self.layouts.len()))
    }

    /// Number of layouts.
    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }
}

/// Remove `null` members from objects and arrays, recursively.
pub fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(prune_nulls);
        }
        _ => {}
    }
}
