//! Fitting keyword text into a cell
//!
//! [`fit`] is a pure function: given the text, the cell rectangle and a
//! measurer it returns the font size and the position of every line. It does
//! not touch any image, so both backends draw exactly the same layout.

use super::text_metrics::TextMeasure;

const ELLIPSIS: char = '\u{2026}';

/// Axis-aligned rectangle in pixels, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - 2.0 * amount).max(0.0),
            height: (self.height - 2.0 * amount).max(0.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `other` lies completely inside this rectangle
    pub fn contains(&self, other: &Bounds) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }
}

/// One positioned line of text; `y` is the top of the line box
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// Result of fitting text into a cell
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub font_size: f32,
    pub line_height: f32,
    /// Offset from a line's top to its baseline
    pub ascent: f32,
    pub lines: Vec<TextLine>,
}

impl TextLayout {
    /// Bounding box of every line, or `None` when nothing is drawn
    pub fn extent(&self) -> Option<Bounds> {
        let first = self.lines.first()?;
        let last = self.lines.last()?;
        let left = self.lines.iter().map(|l| l.x).fold(f32::MAX, f32::min);
        let right = self
            .lines
            .iter()
            .map(|l| l.x + l.width)
            .fold(f32::MIN, f32::max);
        Some(Bounds::new(
            left,
            first.y,
            right - left,
            last.y + self.line_height - first.y,
        ))
    }

    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Fit `text` into `cell`, keeping `padding` pixels clear on every side.
///
/// Words are wrapped greedily starting at `max_size`; the font shrinks one
/// pixel at a time until the block fits. At `min_size`, words that are still
/// too wide are broken between characters and lines that do not fit
/// vertically are dropped, the last kept line ending in an ellipsis.
/// Lines are centered horizontally and the block vertically.
pub fn fit<M>(text: &str, cell: Bounds, padding: f32, max_size: f32, min_size: f32, measurer: &M) -> TextLayout
where
    M: TextMeasure + ?Sized,
{
    let area = cell.inset(padding);
    let fits_width = |line: &str, size: f32| measurer.measure_width(line, size) <= area.width;

    // A line is `size` pixels tall, so larger sizes can never fit
    let mut size = max_size.min(area.height).max(min_size);
    while size >= min_size {
        let lines = wrap(text, area.width, size, measurer, false);
        let height = lines.len() as f32 * measurer.line_height(size);
        if height <= area.height && lines.iter().all(|l| fits_width(l.as_str(), size)) {
            return place(lines, size, area, measurer);
        }
        size -= 1.0;
    }

    let size = min_size;
    let mut lines = wrap(text, area.width, size, measurer, true);
    let max_lines = (area.height / measurer.line_height(size)).floor() as usize;

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            truncate_with_ellipsis(last, area.width, size, measurer);
        }
    }

    // A single glyph can still be wider than a very narrow cell
    lines.retain(|l| fits_width(l.as_str(), size));

    log::debug!("Text {:?} needed the minimum font size {}", text, size);
    place(lines, size, area, measurer)
}

/// Greedy word wrap. With `break_words`, words wider than the line are split
/// into character runs that fit.
fn wrap<M>(text: &str, max_width: f32, size: f32, measurer: &M, break_words: bool) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut pieces: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        if break_words && measurer.measure_width(word, size) > max_width {
            pieces.extend(break_word(word, max_width, size, measurer));
        } else {
            pieces.push(word.to_string());
        }
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for piece in pieces {
        if current.is_empty() {
            current = piece;
            continue;
        }
        let candidate = format!("{} {}", current, piece);
        if measurer.measure_width(&candidate, size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, piece));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn break_word<M>(word: &str, max_width: f32, size: f32, measurer: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut runs = Vec::new();
    let mut current = String::new();

    for c in word.chars() {
        current.push(c);
        if current.chars().count() > 1 && measurer.measure_width(&current, size) > max_width {
            current.pop();
            runs.push(std::mem::take(&mut current));
            current.push(c);
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

fn truncate_with_ellipsis<M>(line: &mut String, max_width: f32, size: f32, measurer: &M)
where
    M: TextMeasure + ?Sized,
{
    line.push(ELLIPSIS);
    while measurer.measure_width(line, size) > max_width {
        line.pop();
        if line.pop().is_none() {
            break;
        }
        line.push(ELLIPSIS);
    }
}

fn place<M>(lines: Vec<String>, size: f32, area: Bounds, measurer: &M) -> TextLayout
where
    M: TextMeasure + ?Sized,
{
    let line_height = measurer.line_height(size);
    let block_height = lines.len() as f32 * line_height;
    let top = area.y + ((area.height - block_height) / 2.0).max(0.0);

    let lines = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let width = measurer.measure_width(&text, size);
            let x = area.x + ((area.width - width) / 2.0).max(0.0);
            TextLine {
                text,
                x,
                y: top + i as f32 * line_height,
                width,
            }
        })
        .collect();

    TextLayout {
        font_size: size,
        line_height,
        ascent: measurer.ascent(size),
        lines,
    }
}
