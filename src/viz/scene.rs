//! In-memory element tree the renderers draw into.
//!
//! Nodes carry an optional id, a set of class markers (`bar`, `actual`,
//! `dimmed`, ...) and presentation attributes. Event handling mutates the tree
//! through class and id lookups; backends serialize it.

use std::collections::BTreeSet;

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Geometry of a node, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Group,
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Text { x: f64, y: f64, content: String, anchor: Anchor, rotate: Option<f64> },
}

/// Presentation attributes; `None` means inherit / backend default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    /// Dash and gap length in pixels.
    pub dash: Option<(u32, u32)>,
    pub opacity: Option<f64>,
    pub font_px: Option<u32>,
    pub font_weight_bold: bool,
    /// Opacity transition duration.
    pub transition_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub shape: Shape,
    pub style: Style,
    /// Hover text shown natively by SVG viewers.
    pub title: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(shape: Shape) -> Self {
        Self {
            id: None,
            classes: BTreeSet::new(),
            shape,
            style: Style::default(),
            title: None,
            children: Vec::new(),
        }
    }

    pub fn group() -> Self {
        Self::new(Shape::Group)
    }

    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(Shape::Rect { x, y, w, h })
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Shape::Line { x1, y1, x2, y2 })
    }

    pub fn text(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self::new(Shape::Text {
            x,
            y,
            content: content.into(),
            anchor: Anchor::Start,
            rotate: None,
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_anchor(mut self, a: Anchor) -> Self {
        if let Shape::Text { anchor, .. } = &mut self.shape {
            *anchor = a;
        }
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        if let Shape::Text { rotate, .. } = &mut self.shape {
            *rotate = Some(degrees);
        }
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Set or clear a class marker; returns whether the set changed.
    pub fn classed(&mut self, class: &str, on: bool) -> bool {
        if on {
            self.classes.insert(class.to_string())
        } else {
            self.classes.remove(class)
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.shape {
            Shape::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn set_text(&mut self, new: impl Into<String>) {
        if let Shape::Text { content, .. } = &mut self.shape {
            *content = new.into();
        }
    }

    fn visit<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for c in &self.children {
            c.visit(out);
        }
    }

    fn visit_mut(&mut self, f: &mut dyn FnMut(&mut Node)) {
        f(self);
        for c in &mut self.children {
            c.visit_mut(f);
        }
    }
}

/// The whole drawing: canvas size plus top-level nodes in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, nodes: Vec::new() }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Every node, depth first in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        let mut out = Vec::new();
        for n in &self.nodes {
            n.visit(&mut out);
        }
        out.into_iter()
    }

    pub fn select_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.iter().filter(move |n| n.has_class(class))
    }

    pub fn find_id(&self, id: &str) -> Option<&Node> {
        self.iter().find(|n| n.id.as_deref() == Some(id))
    }

    /// Run `f` on every node carrying `class`; returns how many matched.
    pub fn for_each_class_mut(&mut self, class: &str, mut f: impl FnMut(&mut Node)) -> usize {
        let mut hits = 0;
        for n in &mut self.nodes {
            n.visit_mut(&mut |node| {
                if node.has_class(class) {
                    f(node);
                    hits += 1;
                }
            });
        }
        hits
    }

    pub fn find_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        fn find<'a>(n: &'a mut Node, id: &str) -> Option<&'a mut Node> {
            if n.id.as_deref() == Some(id) {
                return Some(n);
            }
            n.children.iter_mut().find_map(|c| find(c, id))
        }
        self.nodes.iter_mut().find_map(|n| find(n, id))
    }
}
