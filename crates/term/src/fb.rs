//! Framebuffer and style types for terminal rendering.
//!
//! Wide glyphs (CJK) occupy two columns: the glyph sits in the left cell and
//! the right cell holds [`WIDE_CONTINUATION`], which the encoder skips.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub use crate::types::Rgb;

/// Placeholder for the right half of a double-width glyph.
pub const WIDE_CONTINUATION: char = '\0';

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub fn is_continuation(&self) -> bool {
        self.ch == WIDE_CONTINUATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Display width of `s` in terminal columns.
pub fn text_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Display width of a single char (0 for control and combining chars).
pub fn char_width(ch: char) -> u16 {
    UnicodeWidthChar::width(ch).unwrap_or(0) as u16
}

/// Longest prefix of `s` that fits in `max` columns.
pub fn truncate_to_width(s: &str, max: u16) -> &str {
    let mut used = 0u16;
    for (i, ch) in s.char_indices() {
        let w = char_width(ch);
        if used + w > max {
            return &s[..i];
        }
        used += w;
    }
    s
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one cell, blanking the other half of any wide glyph it splits.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(i) = self.idx(x, y) else {
            return;
        };
        let old = self.cells[i];
        if old.is_continuation() && !cell.is_continuation() && x > 0 {
            let owner = i - 1;
            self.cells[owner].ch = ' ';
        }
        if char_width(old.ch) == 2 {
            if let Some(next) = self.idx(x + 1, y) {
                if self.cells[next].is_continuation() {
                    self.cells[next].ch = ' ';
                }
            }
        }
        self.cells[i] = cell;
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Draw `ch` with `fg`, keeping whatever background the cell already has.
    pub fn put_glyph(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if let Some(cell) = self.get(x, y) {
            let style = CellStyle { fg, ..cell.style };
            self.put_char(x, y, ch, style);
        }
    }

    /// Draw a string; returns the number of columns used.
    ///
    /// Stops at the right edge rather than splitting a wide glyph.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            if cx as u32 + w as u32 > self.width as u32 {
                break;
            }
            self.put_char(cx, y, ch, style);
            if w == 2 {
                self.set(
                    cx + 1,
                    y,
                    Cell {
                        ch: WIDE_CONTINUATION,
                        style,
                    },
                );
            }
            cx += w;
        }
        cx - x
    }

    /// Draw a string centered horizontally within `[x, x + w)`.
    pub fn put_str_centered(&mut self, x: u16, w: u16, y: u16, s: &str, style: CellStyle) {
        let s = truncate_to_width(s, w);
        let tw = text_width(s);
        let start = x.saturating_add(w.saturating_sub(tw) / 2);
        self.put_str(start, y, s, style);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Rounded single-line box border.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        self.put_char(x, y, '╭', style);
        self.put_char(x + w - 1, y, '╮', style);
        self.put_char(x, y + h - 1, '╰', style);
        self.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            self.put_char(x + dx, y, '─', style);
            self.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y + dy, '│', style);
            self.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Row `y` as a string, skipping wide-glyph continuation cells.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("高橋 龍"), 7);
        assert_eq!(text_width("高a"), 3);
        assert_eq!(truncate_to_width("高橋", 3), "高");
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn wide_glyph_takes_two_cells() {
        let mut fb = FrameBuffer::new(6, 1);
        let used = fb.put_str(0, 0, "高a", CellStyle::default());
        assert_eq!(used, 3);
        assert_eq!(fb.get(0, 0).unwrap().ch, '高');
        assert!(fb.get(1, 0).unwrap().is_continuation());
        assert_eq!(fb.get(2, 0).unwrap().ch, 'a');
        assert_eq!(fb.row_text(0), "高a   ");
    }

    #[test]
    fn wide_glyph_not_split_at_edge() {
        let mut fb = FrameBuffer::new(3, 1);
        let used = fb.put_str(0, 0, "a高高", CellStyle::default());
        assert_eq!(used, 3);
        assert_eq!(fb.get(1, 0).unwrap().ch, '高');
        assert!(fb.get(2, 0).unwrap().is_continuation());
    }

    #[test]
    fn overwriting_half_a_wide_glyph_blanks_the_other_half() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "高", CellStyle::default());
        fb.put_char(1, 0, 'x', CellStyle::default());
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
        assert_eq!(fb.get(1, 0).unwrap().ch, 'x');

        fb.put_str(2, 0, "高", CellStyle::default());
        fb.put_char(2, 0, 'y', CellStyle::default());
        assert_eq!(fb.get(3, 0).unwrap().ch, ' ');
    }

    #[test]
    fn put_glyph_keeps_background() {
        let mut fb = FrameBuffer::new(2, 1);
        let bg = Rgb::new(1, 2, 3);
        fb.clear(CellStyle::new(Rgb::new(0, 0, 0), bg).into_cell(' '));
        fb.put_glyph(0, 0, '•', Rgb::new(9, 9, 9));
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, '•');
        assert_eq!(cell.style.bg, bg);
        assert_eq!(cell.style.fg, Rgb::new(9, 9, 9));
    }

    #[test]
    fn centered_text() {
        let mut fb = FrameBuffer::new(10, 1);
        fb.put_str_centered(0, 10, 0, "ab", CellStyle::default());
        assert_eq!(fb.get(4, 0).unwrap().ch, 'a');
        assert_eq!(fb.get(5, 0).unwrap().ch, 'b');
    }
}
