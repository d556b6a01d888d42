use serde::Serialize;
use serde_json::json;

use super::config::LayoutConfig;
use super::measure::measure;
use super::node::{Children, LayoutNode, NodeId, RenderCommand, children};
use super::position::position;
use super::resolve::{resolve, rewrap};
use crate::config::{EngineConfig, NestingPolicy};
use crate::error::{LayoutError, Result};
use crate::geometry::Rect;
use crate::logging::{LogLevel, event_with_fields, json_kv};
use crate::metrics::FrameStats;
use crate::render::emit::emit;
use crate::render::{BorderKind, Renderer, Style};
use crate::text::{DisplayWidth, TextMeasure, text_extent};

const LOG_TARGET: &str = "room::layout";

/// Per-frame layout tree plus the machinery to resolve and paint it.
///
/// Build the tree with the `begin_*`/`add_*` calls between a [`reset`] and a
/// [`finish`]. Node ids handed out are only meaningful until the next reset.
///
/// [`reset`]: LayoutContext::reset
/// [`finish`]: LayoutContext::finish
pub struct LayoutContext {
    nodes: Vec<LayoutNode>,
    open: Vec<NodeId>,
    last_root: Option<NodeId>,
    root_rect: Rect,
    measurer: Box<dyn TextMeasure>,
    config: EngineConfig,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutContext {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            nodes: Vec::new(),
            open: Vec::new(),
            last_root: None,
            root_rect: Rect::default(),
            measurer: Box::new(DisplayWidth),
            config,
        }
    }

    /// Swap the text measurer used for content sizing and wrapping.
    pub fn with_measurer<M>(mut self, measurer: M) -> Self
    where
        M: TextMeasure + 'static,
    {
        self.measurer = Box::new(measurer);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Start a new frame. Storage is kept for reuse.
    pub fn reset(&mut self, root_rect: Rect) {
        self.nodes.clear();
        self.open.clear();
        self.last_root = None;
        self.root_rect = root_rect;
    }

    /// Open a container under the current parent and make it the new parent.
    pub fn begin_container(&mut self, config: LayoutConfig) -> NodeId {
        let id = self.push_node(config, true, RenderCommand::None);
        self.open.push(id);
        id
    }

    /// Open a container that paints a border around its children.
    pub fn begin_box(&mut self, config: LayoutConfig, border: BorderKind, style: Style) -> NodeId {
        let id = self.push_node(config, true, RenderCommand::Box { border, style });
        self.open.push(id);
        id
    }

    /// Close the innermost open container.
    ///
    /// Never pops past the outermost level. An unmatched call is an error under
    /// [`NestingPolicy::Strict`] and a logged no-op under `Lenient`.
    pub fn end_container(&mut self) -> Result<()> {
        if self.open.pop().is_some() {
            return Ok(());
        }

        self.log(
            LogLevel::Warn,
            "unbalanced_end",
            [json_kv("nodes", json!(self.nodes.len()))],
        );
        match self.config.nesting {
            NestingPolicy::Strict => Err(LayoutError::UnbalancedEnd),
            NestingPolicy::Lenient => Ok(()),
        }
    }

    /// Add a non-container node under the current parent.
    pub fn add_leaf(&mut self, config: LayoutConfig, command: RenderCommand) -> NodeId {
        let extent = match &command {
            RenderCommand::Text { text, .. } => text_extent(text, self.measurer.as_ref()),
            _ => (0, 0),
        };
        let id = self.push_node(config, false, command);
        let node = &mut self.nodes[id.0];
        node.content_width = extent.0;
        node.content_height = extent.1;
        id
    }

    /// Add a text leaf sized to its widest line and line count.
    ///
    /// With `wrap_text` and a fit-content height the line count is recomputed
    /// once the width is known; a top-level text leaf wraps to the frame width.
    pub fn add_text(&mut self, config: LayoutConfig, text: impl Into<String>, style: Style) -> NodeId {
        self.add_leaf(
            config,
            RenderCommand::Text {
                text: text.into(),
                style,
            },
        )
    }

    pub fn add_box(&mut self, config: LayoutConfig, border: BorderKind, style: Style) -> NodeId {
        self.add_leaf(config, RenderCommand::Box { border, style })
    }

    pub fn add_rect(&mut self, config: LayoutConfig, glyph: char, style: Style) -> NodeId {
        self.add_leaf(config, RenderCommand::Rect { glyph, style })
    }

    /// Measure, resolve, position, then paint the frame into `renderer`.
    ///
    /// Calling it again without rebuilding recomputes the same rectangles.
    pub fn finish<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<FrameStats> {
        if !self.open.is_empty() {
            let depth = self.open.len();
            self.log(
                LogLevel::Warn,
                "unclosed_containers",
                [json_kv("open", json!(depth))],
            );
            if self.config.nesting == NestingPolicy::Strict {
                return Err(LayoutError::UnclosedContainers(depth));
            }
        }

        let mut stats = FrameStats {
            nodes: self.nodes.len(),
            ..FrameStats::default()
        };

        if !self.nodes.is_empty() {
            let roots: Vec<NodeId> = self.roots().collect();
            stats.roots = roots.len();

            for &root in &roots {
                measure(&mut self.nodes, root);
            }
            for &root in &roots {
                let node = &mut self.nodes[root.0];
                node.final_rect = self.root_rect;
                rewrap(node, self.measurer.as_ref());
                resolve(&mut self.nodes, root, self.measurer.as_ref());
            }
            for &root in &roots {
                position(&mut self.nodes, root);
            }
            for &root in &roots {
                emit(&self.nodes, root, self.root_rect, renderer, &mut stats)?;
            }
        }

        self.log(
            LogLevel::Debug,
            "frame_finished",
            [
                json_kv("nodes", json!(stats.nodes)),
                json_kv("roots", json!(stats.roots)),
                json_kv("draw_calls", json!(stats.draw_calls)),
                json_kv("skipped_subtrees", json!(stats.skipped_subtrees)),
            ],
        );
        self.record_metrics(&stats);
        Ok(stats)
    }

    pub fn node(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    /// Final rectangle of `id`; meaningful after [`finish`](LayoutContext::finish).
    pub fn rect_of(&self, id: NodeId) -> Option<Rect> {
        self.node(id).map(|node| node.final_rect)
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        if id.0 < self.nodes.len() {
            children(&self.nodes, id)
        } else {
            Children::new(&self.nodes, None)
        }
    }

    /// Top-level nodes: node 0 and any later nodes declared with no parent open.
    pub fn roots(&self) -> Children<'_> {
        let first = (!self.nodes.is_empty()).then_some(NodeId(0));
        Children::new(&self.nodes, first)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root_rect(&self) -> Rect {
        self.root_rect
    }

    /// Number of containers currently open.
    pub fn open_depth(&self) -> usize {
        self.open.len()
    }

    /// Serializable view of every node, in arena order.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.nodes
            .iter()
            .map(|node| NodeSnapshot {
                id: node.id.0,
                parent: node.parent.map(NodeId::index),
                kind: node.command.kind(),
                container: node.is_container,
                config: node.config,
                min_width: node.min_width,
                min_height: node.min_height,
                rect: node.final_rect,
            })
            .collect()
    }

    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    fn push_node(&mut self, config: LayoutConfig, is_container: bool, command: RenderCommand) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = self.open.last().copied();
        self.nodes
            .push(LayoutNode::new(id, config, parent, is_container, command));

        match parent {
            Some(parent) => {
                match self.nodes[parent.0].last_child {
                    Some(last) => self.nodes[last.0].next_sibling = Some(id),
                    None => self.nodes[parent.0].first_child = Some(id),
                }
                self.nodes[parent.0].last_child = Some(id);
            }
            None => {
                if let Some(last) = self.last_root {
                    self.nodes[last.0].next_sibling = Some(id);
                }
                self.last_root = Some(id);
            }
        }
        id
    }

    fn record_metrics(&self, stats: &FrameStats) {
        let Some(metrics) = self.config.metrics.as_ref() else {
            return;
        };
        let Ok(mut guard) = metrics.lock() else {
            return;
        };
        guard.record_frame(stats);

        let every = self.config.metrics_every;
        if every > 0 && guard.frames() % every == 0 {
            if let Some(logger) = self.config.logger.as_ref() {
                let event = guard
                    .snapshot()
                    .to_log_event(self.config.metrics_target.as_str());
                let _ = logger.log_event(event);
            }
        }
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, LOG_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

/// Debug view of one node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub id: usize,
    pub parent: Option<usize>,
    pub kind: &'static str,
    pub container: bool,
    pub config: LayoutConfig,
    pub min_width: i32,
    pub min_height: i32,
    pub rect: Rect,
}
