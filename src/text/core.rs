/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Fixed-width glyph counting used to size text nodes.
pub trait TextMeasure: Send {
    /// Number of cells `text` occupies on a single line.
    fn width(&self, text: &str) -> usize;

    /// Size of `text` once greedily wrapped to `max_width` cells.
    fn measure_wrapped(&self, text: &str, max_width: i32) -> (i32, i32) {
        let lines = wrap_lines(text, max_width, self);
        let width = lines
            .iter()
            .map(|line| self.width(line))
            .max()
            .unwrap_or(0);
        (to_cells(width), to_cells(lines.len()))
    }
}

/// Default measurer backed by `unicode-width`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayWidth;

impl TextMeasure for DisplayWidth {
    fn width(&self, text: &str) -> usize {
        display_width(text)
    }
}

/// Wrap with the default measurer.
pub fn measure_wrapped(text: &str, max_width: i32) -> (i32, i32) {
    DisplayWidth.measure_wrapped(text, max_width)
}

/// Unwrapped extent of `text`: widest line by number of lines.
pub fn text_extent<M: TextMeasure + ?Sized>(text: &str, measure: &M) -> (i32, i32) {
    let mut width = 0;
    let mut lines = 0;
    for line in text.split('\n') {
        width = width.max(measure.width(line));
        lines += 1;
    }
    (to_cells(width), to_cells(lines))
}

/// Greedy word wrap on spaces.
///
/// Words never get split: one wider than `max_width` still takes a full line of
/// its own. Newlines force a break, and an empty paragraph yields an empty line.
pub fn wrap_lines<M: TextMeasure + ?Sized>(text: &str, max_width: i32, measure: &M) -> Vec<String> {
    let limit = usize::try_from(max_width).unwrap_or(0);
    let space = measure.width(" ");
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
            let word_width = measure.width(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= limit {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }

        lines.push(current);
    }

    lines
}

fn to_cells(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
