use crate::logging::{LogEvent, LogFields, LogLevel};
use serde::Serialize;
use serde_json::json;

/// Counters for a single `finish` call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    /// Nodes declared this frame.
    pub nodes: usize,
    /// Top-level nodes seeded with the frame rectangle.
    pub roots: usize,
    /// Paint calls handed to the renderer (clip updates excluded).
    pub draw_calls: usize,
    /// Subtrees pruned because they fell outside the accumulated clip.
    pub skipped_subtrees: usize,
}

/// Running totals across frames.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    frames: u64,
    nodes: u64,
    draw_calls: u64,
    skipped_subtrees: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&mut self, stats: &FrameStats) {
        self.frames = self.frames.saturating_add(1);
        self.nodes = self.nodes.saturating_add(stats.nodes as u64);
        self.draw_calls = self.draw_calls.saturating_add(stats.draw_calls as u64);
        self.skipped_subtrees = self
            .skipped_subtrees
            .saturating_add(stats.skipped_subtrees as u64);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            frames: self.frames,
            nodes: self.nodes,
            draw_calls: self.draw_calls,
            skipped_subtrees: self.skipped_subtrees,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub frames: u64,
    pub nodes: u64,
    pub draw_calls: u64,
    pub skipped_subtrees: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("frames".to_string(), json!(self.frames));
        map.insert("nodes".to_string(), json!(self.nodes));
        map.insert("draw_calls".to_string(), json!(self.draw_calls));
        map.insert("skipped_subtrees".to_string(), json!(self.skipped_subtrees));
        map
    }
}
