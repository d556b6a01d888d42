use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::geometry::Rect;
use crate::text::{DisplayWidth, wrap_lines};

use super::core::Renderer;
use super::style::{BorderKind, Style};

/// Renderer runtime parameters.
#[derive(Debug, Clone, Default)]
pub struct RendererSettings {
    /// Cursor position (x, y) restored by [`AnsiRenderer::present`].
    pub restore_cursor: Option<(u16, u16)>,
}

/// Writes paint calls as ANSI sequences into any `Write` handle.
///
/// Output is queued; call [`present`](AnsiRenderer::present) once per frame to
/// flush it.
pub struct AnsiRenderer<W: Write> {
    writer: W,
    clip: Rect,
    settings: RendererSettings,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(writer: W, settings: RendererSettings) -> Self {
        Self {
            writer,
            clip: Rect::default(),
            settings,
        }
    }

    pub fn with_default(writer: W) -> Self {
        Self::new(writer, RendererSettings::default())
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    /// Restore the cursor if requested and flush everything queued so far.
    pub fn present(&mut self) -> Result<()> {
        if let Some((x, y)) = self.settings.restore_cursor {
            queue!(self.writer, MoveTo(x, y))?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Print one line starting at `(x, y)`, keeping only cells inside both the
    /// line's own `width` and the active clip. Wide glyphs straddling an edge
    /// are dropped whole.
    fn put_line(&mut self, x: i32, y: i32, width: i32, line: &str, style: &Style) -> Result<()> {
        let bounds = self.clip.intersect(&Rect::new(x, y, width, 1));
        if bounds.is_empty() {
            return Ok(());
        }

        let mut col = x;
        let mut start = None;
        let mut visible = String::new();
        for ch in line.chars() {
            let cells = ch.width().unwrap_or(0) as i32;
            if cells == 0 {
                continue;
            }
            if col >= bounds.right() {
                break;
            }
            if col >= bounds.x && col + cells <= bounds.right() {
                start.get_or_insert(col);
                visible.push(ch);
            }
            col += cells;
        }

        let Some(start) = start else {
            return Ok(());
        };
        let (Ok(column), Ok(row)) = (u16::try_from(start), u16::try_from(y)) else {
            return Ok(());
        };

        queue!(self.writer, MoveTo(column, row))?;
        self.apply_style(style)?;
        queue!(self.writer, Print(visible))?;
        if !style.is_plain() {
            queue!(self.writer, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }

    fn apply_style(&mut self, style: &Style) -> Result<()> {
        if let Some(fg) = style.fg {
            queue!(self.writer, SetForegroundColor(fg))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.writer, SetBackgroundColor(bg))?;
        }
        if style.bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        if style.underline {
            queue!(self.writer, SetAttribute(Attribute::Underlined))?;
        }
        if style.reverse {
            queue!(self.writer, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn set_clip(&mut self, clip: Rect) {
        self.clip = clip;
    }

    fn draw_text(&mut self, rect: Rect, text: &str, style: &Style) -> Result<()> {
        for (row, line) in text.split('\n').take(rect.height.max(0) as usize).enumerate() {
            self.put_line(rect.x, rect.y + row as i32, rect.width, line, style)?;
        }
        Ok(())
    }

    fn draw_wrapped_text(&mut self, rect: Rect, text: &str, style: &Style) -> Result<()> {
        let lines = wrap_lines(text, rect.width, &DisplayWidth);
        for (row, line) in lines.iter().take(rect.height.max(0) as usize).enumerate() {
            self.put_line(rect.x, rect.y + row as i32, rect.width, line, style)?;
        }
        Ok(())
    }

    fn draw_box(&mut self, rect: Rect, border: BorderKind, style: &Style) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }

        let glyphs = border.glyphs();
        let inner = (rect.width - 2).max(0) as usize;
        let edge = |left: char, right: char| {
            let mut line = String::with_capacity(inner + 2);
            line.push(left);
            line.extend(std::iter::repeat_n(glyphs.horizontal, inner));
            if rect.width > 1 {
                line.push(right);
            }
            line
        };

        let top = edge(glyphs.top_left, glyphs.top_right);
        self.put_line(rect.x, rect.y, rect.width, &top, style)?;

        for row in 1..rect.height - 1 {
            let y = rect.y + row;
            let side = glyphs.vertical.to_string();
            self.put_line(rect.x, y, 1, &side, style)?;
            if rect.width > 1 {
                self.put_line(rect.right() - 1, y, 1, &side, style)?;
            }
        }

        if rect.height > 1 {
            let bottom = edge(glyphs.bottom_left, glyphs.bottom_right);
            self.put_line(rect.x, rect.bottom() - 1, rect.width, &bottom, style)?;
        }
        Ok(())
    }

    fn draw_fill(&mut self, rect: Rect, glyph: char, style: &Style) -> Result<()> {
        let glyph_width = glyph.width().unwrap_or(1).max(1) as i32;
        let count = (rect.width / glyph_width).max(0) as usize;
        let line: String = std::iter::repeat_n(glyph, count).collect();
        for row in 0..rect.height {
            self.put_line(rect.x, rect.y + row, rect.width, &line, style)?;
        }
        Ok(())
    }
}
