use crate::error::Result;
use crate::geometry::Rect;

use super::style::{BorderKind, Style};

/// Paint surface the layout engine draws into.
///
/// `set_clip` is called right before every paint call; implementations must
/// not draw outside the most recent clip.
pub trait Renderer {
    fn set_clip(&mut self, clip: Rect);

    fn draw_text(&mut self, rect: Rect, text: &str, style: &Style) -> Result<()>;

    fn draw_wrapped_text(&mut self, rect: Rect, text: &str, style: &Style) -> Result<()>;

    fn draw_box(&mut self, rect: Rect, border: BorderKind, style: &Style) -> Result<()>;

    fn draw_fill(&mut self, rect: Rect, glyph: char, style: &Style) -> Result<()>;
}

/// A paint call captured by [`RecordingRenderer`], with the clip active at the time.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Text {
        rect: Rect,
        clip: Rect,
        text: String,
        style: Style,
    },
    WrappedText {
        rect: Rect,
        clip: Rect,
        text: String,
        style: Style,
    },
    Box {
        rect: Rect,
        clip: Rect,
        border: BorderKind,
        style: Style,
    },
    Fill {
        rect: Rect,
        clip: Rect,
        glyph: char,
        style: Style,
    },
}

impl DrawCall {
    pub fn rect(&self) -> Rect {
        match self {
            DrawCall::Text { rect, .. }
            | DrawCall::WrappedText { rect, .. }
            | DrawCall::Box { rect, .. }
            | DrawCall::Fill { rect, .. } => *rect,
        }
    }

    pub fn clip(&self) -> Rect {
        match self {
            DrawCall::Text { clip, .. }
            | DrawCall::WrappedText { clip, .. }
            | DrawCall::Box { clip, .. }
            | DrawCall::Fill { clip, .. } => *clip,
        }
    }
}

/// Records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    clip: Rect,
    clip_updates: usize,
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clip_updates(&self) -> usize {
        self.clip_updates
    }

    /// Text payloads of every text call, in emission order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } | DrawCall::WrappedText { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
        self.clip_updates = 0;
    }
}

impl Renderer for RecordingRenderer {
    fn set_clip(&mut self, clip: Rect) {
        self.clip = clip;
        self.clip_updates += 1;
    }

    fn draw_text(&mut self, rect: Rect, text: &str, style: &Style) -> Result<()> {
        self.calls.push(DrawCall::Text {
            rect,
            clip: self.clip,
            text: text.to_string(),
            style: *style,
        });
        Ok(())
    }

    fn draw_wrapped_text(&mut self, rect: Rect, text: &str, style: &Style) -> Result<()> {
        self.calls.push(DrawCall::WrappedText {
            rect,
            clip: self.clip,
            text: text.to_string(),
            style: *style,
        });
        Ok(())
    }

    fn draw_box(&mut self, rect: Rect, border: BorderKind, style: &Style) -> Result<()> {
        self.calls.push(DrawCall::Box {
            rect,
            clip: self.clip,
            border,
            style: *style,
        });
        Ok(())
    }

    fn draw_fill(&mut self, rect: Rect, glyph: char, style: &Style) -> Result<()> {
        self.calls.push(DrawCall::Fill {
            rect,
            clip: self.clip,
            glyph,
            style: *style,
        });
        Ok(())
    }
}

/// Discards everything. Useful when only the computed rectangles matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn set_clip(&mut self, _clip: Rect) {}

    fn draw_text(&mut self, _rect: Rect, _text: &str, _style: &Style) -> Result<()> {
        Ok(())
    }

    fn draw_wrapped_text(&mut self, _rect: Rect, _text: &str, _style: &Style) -> Result<()> {
        Ok(())
    }

    fn draw_box(&mut self, _rect: Rect, _border: BorderKind, _style: &Style) -> Result<()> {
        Ok(())
    }

    fn draw_fill(&mut self, _rect: Rect, _glyph: char, _style: &Style) -> Result<()> {
        Ok(())
    }
}
