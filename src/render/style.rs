use crossterm::style::Color;
use serde::Serialize;

/// Colours and attributes handed through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Border variants for boxed nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BorderKind {
    #[default]
    Single,
    Double,
    Rounded,
    Heavy,
    Ascii,
}

/// Glyphs used to draw one border variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderKind {
    pub fn glyphs(self) -> BorderGlyphs {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = match self {
            BorderKind::Single => ('┌', '┐', '└', '┘', '─', '│'),
            BorderKind::Double => ('╔', '╗', '╚', '╝', '═', '║'),
            BorderKind::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
            BorderKind::Heavy => ('┏', '┓', '┗', '┛', '━', '┃'),
            BorderKind::Ascii => ('+', '+', '+', '+', '-', '|'),
        };
        BorderGlyphs {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_glyph_sets_differ() {
        assert_eq!(BorderKind::Single.glyphs().top_left, '┌');
        assert_eq!(BorderKind::Ascii.glyphs().vertical, '|');
        assert_ne!(BorderKind::Double.glyphs(), BorderKind::Heavy.glyphs());
    }

    #[test]
    fn plain_style_detection() {
        assert!(Style::new().is_plain());
        assert!(!Style::new().bold().is_plain());
        assert!(!Style::new().fg(Color::Red).is_plain());
    }
}
