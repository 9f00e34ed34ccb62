use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Alignment, Color};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// A node in the composition description the host produces.
///
/// This is not a layout tree: it carries only what the embedding renderer
/// needs to stack overlay layers. That means child ordering (later = on
/// top), content alignment, a background fill, additive blur and
/// multiplicative scale applied to the subtree, and hit-test metadata for
/// dismissal scrims.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,
    pub alignment: Alignment,
    pub background: Option<Color>,
    /// Blur radius applied to this subtree. Additive across nesting.
    pub blur: f32,
    /// Uniform scale applied to this subtree. Multiplicative across nesting.
    pub scale: f32,
    pub clickable: bool,
    /// Custom data storage (scrims carry their owning entry id here).
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            alignment: Alignment::TopStart,
            background: None,
            blur: 0.0,
            scale: 1.0,
            clickable: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    /// A box that stacks its children in order (later = on top).
    pub fn stack() -> Self {
        Self {
            id: generate_id("stack"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child nodes, empty for leaves.
    pub fn child_slice(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
