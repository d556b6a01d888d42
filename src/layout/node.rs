use serde::Serialize;

use super::config::{Axis, LayoutConfig};
use crate::geometry::Rect;
use crate::render::{BorderKind, Style};

/// Arena index of a node. Valid only until the next `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Paint operation attached to a node, emitted once its rectangle is known.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderCommand {
    #[default]
    None,
    Text {
        text: String,
        style: Style,
    },
    Box {
        border: BorderKind,
        style: Style,
    },
    Rect {
        glyph: char,
        style: Style,
    },
}

impl RenderCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            RenderCommand::None => "none",
            RenderCommand::Text { .. } => "text",
            RenderCommand::Box { .. } => "box",
            RenderCommand::Rect { .. } => "rect",
        }
    }

    pub fn is_box(&self) -> bool {
        matches!(self, RenderCommand::Box { .. })
    }
}

/// One element of the per-frame arena.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub id: NodeId,
    pub config: LayoutConfig,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub is_container: bool,
    /// Unwrapped content extent stamped when the node was added.
    pub content_width: i32,
    pub content_height: i32,
    /// Pass 1 output.
    pub min_width: i32,
    pub min_height: i32,
    /// Pass 2 sizes, pass 3 position.
    pub final_rect: Rect,
    pub command: RenderCommand,
}

impl LayoutNode {
    pub(crate) fn new(
        id: NodeId,
        config: LayoutConfig,
        parent: Option<NodeId>,
        is_container: bool,
        command: RenderCommand,
    ) -> Self {
        Self {
            id,
            config,
            parent,
            first_child: None,
            last_child: None,
            next_sibling: None,
            is_container,
            content_width: 0,
            content_height: 0,
            min_width: 0,
            min_height: 0,
            final_rect: Rect::default(),
            command,
        }
    }

    pub fn min_along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.min_width,
            Axis::Y => self.min_height,
        }
    }

    pub(crate) fn set_min(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::X => self.min_width = value,
            Axis::Y => self.min_height = value,
        }
    }

    pub fn content_along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.content_width,
            Axis::Y => self.content_height,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_container
    }

    /// Text payload when this node renders text.
    pub fn text(&self) -> Option<&str> {
        match &self.command {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Iterator over a node's direct children, in insertion order.
pub struct Children<'a> {
    nodes: &'a [LayoutNode],
    next: Option<NodeId>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(nodes: &'a [LayoutNode], first: Option<NodeId>) -> Self {
        Self { nodes, next: first }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.nodes[current.0].next_sibling;
        Some(current)
    }
}

pub(crate) fn children(nodes: &[LayoutNode], id: NodeId) -> Children<'_> {
    Children::new(nodes, nodes[id.0].first_child)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_kinds() {
        assert_eq!(RenderCommand::None.kind(), "none");
        let boxed = RenderCommand::Box {
            border: BorderKind::Rounded,
            style: Style::new(),
        };
        assert!(boxed.is_box());
        assert_eq!(boxed.kind(), "box");
    }
}
