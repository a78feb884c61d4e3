//! QuizView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout is designed for a 24-row screen and centered vertically on taller
//! ones. Effects live on the logical canvas and are projected onto the
//! viewport, underneath the text.

use crate::core::{theme, Celebration, Flourish, GameState, RandomSource};
use crate::fb::{text_width, truncate_to_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Phase, QuizAction, Side, BLACK, BLUE, CANVAS_HEIGHT, CANVAS_WIDTH, CELEBRATION_PULSE_AMPLITUDE,
    GOLD, GRAY, GREEN, LIGHT_BLUE, LIGHT_GREEN, LIGHT_RED, RED, WHITE,
};
use crate::wrap::wrap_text;

const DESIGN_HEIGHT: u16 = 24;

pub const TITLE: &str = "AWS 人名クイズ";
pub const PROMPT: &str = "この名前は何のAWSサービス？";
pub const NEXT_LABEL: &str = "Next Question";
pub const CELEBRATION_TEXT: &str = "素晴らしい!";
pub const RESTART_HINT: &str = "リスタート: R キー / 終了: Q キー";

/// Marks explanation text cut off by a short terminal.
const ELLIPSIS: char = '…';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && (col - self.x) < self.w
            && (row - self.y) < self.h
    }
}

/// Effects drawn under the text for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Effects<'a> {
    pub celebration: Option<&'a Celebration>,
    /// Scale of the celebration text, present only while it is visible.
    pub text_scale: Option<f32>,
    pub flourish: Option<&'a Flourish>,
}

/// Row positions and clickable areas for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizLayout {
    pub title_y: u16,
    pub progress: Rect,
    pub progress_label_y: u16,
    pub prompt_y: u16,
    pub name_y: u16,
    pub celebration_y: u16,
    pub left: Rect,
    pub right: Rect,
    pub feedback_y: u16,
    pub explanation: Rect,
    pub next: Rect,
    pub result_y: u16,
}

impl QuizLayout {
    pub fn compute(viewport: Viewport, button_w: u16, margin: u16) -> Self {
        let w = viewport.width;
        let top = viewport.height.saturating_sub(DESIGN_HEIGHT) / 2;
        let row = |dy: u16| top.saturating_add(dy);

        let gap = 4;
        let bw = button_w.min(w.saturating_sub(3 * gap) / 2);
        let buttons_x = w.saturating_sub(2 * bw + gap) / 2;

        let next_w = text_width(NEXT_LABEL) + 6;
        let next = Rect::new(w.saturating_sub(next_w) / 2, row(20), next_w, 3);

        let explanation_y = row(14);
        Self {
            title_y: row(1),
            progress: Rect::new(margin, row(3), w.saturating_sub(2 * margin), 1),
            progress_label_y: row(4),
            prompt_y: row(6),
            name_y: row(8),
            celebration_y: row(10),
            left: Rect::new(buttons_x, row(12), bw, 3),
            right: Rect::new(buttons_x + bw + gap, row(12), bw, 3),
            feedback_y: row(12),
            explanation: Rect::new(
                margin + 1,
                explanation_y,
                w.saturating_sub(2 * (margin + 1)),
                next.y.saturating_sub(explanation_y + 1),
            ),
            next,
            result_y: row(7),
        }
    }
}

/// Terminal renderer for the quiz screens.
pub struct QuizView {
    /// Maximum option button width in columns.
    button_w: u16,
    /// Horizontal margin for the progress bar and explanation text.
    margin: u16,
}

impl Default for QuizView {
    fn default() -> Self {
        Self {
            button_w: 30,
            margin: 4,
        }
    }
}

impl QuizView {
    pub fn new(button_w: u16, margin: u16) -> Self {
        Self { button_w, margin }
    }

    pub fn layout(&self, viewport: Viewport) -> QuizLayout {
        QuizLayout::compute(viewport, self.button_w, self.margin)
    }

    /// Map a click at (`col`, `row`) to the action of the button under it.
    pub fn hit_test(
        &self,
        phase: Phase,
        viewport: Viewport,
        col: u16,
        row: u16,
    ) -> Option<QuizAction> {
        let layout = self.layout(viewport);
        match phase {
            Phase::Answering if layout.left.contains(col, row) => {
                Some(QuizAction::Select(Side::Left))
            }
            Phase::Answering if layout.right.contains(col, row) => {
                Some(QuizAction::Select(Side::Right))
            }
            Phase::Feedback if layout.next.contains(col, row) => Some(QuizAction::Advance),
            _ => None,
        }
    }

    /// Render the current state into an existing framebuffer.
    ///
    /// This is the allocation-light hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into<R: RandomSource>(
        &self,
        state: &GameState<R>,
        effects: &Effects<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        let layout = self.layout(viewport);

        let band_theme = state.result_band().map(theme);
        let bg = match (state.phase(), state.feedback()) {
            (Phase::Feedback, Some(f)) if f.correct => LIGHT_GREEN,
            (Phase::Feedback, Some(_)) => LIGHT_RED,
            (Phase::Finished, _) => band_theme.map(|t| t.background).unwrap_or(WHITE),
            _ => WHITE,
        };
        fb.clear(CellStyle::new(BLACK, bg).into_cell(' '));

        if let Some(celebration) = effects.celebration {
            for p in celebration.particles() {
                if let Some((x, y)) = project(p.x, p.y, viewport) {
                    fb.put_glyph(x, y, particle_glyph(p.size), p.color);
                }
            }
        }
        if let Some(flourish) = effects.flourish {
            draw_flourish(fb, flourish, viewport);
        }

        let w = viewport.width;
        let text = CellStyle::new(BLACK, bg);
        fb.put_str_centered(0, w, layout.title_y, TITLE, CellStyle::new(BLUE, bg).bold());

        let item = match (state.phase(), state.current_item()) {
            (Phase::Finished, _) | (_, None) => {
                self.draw_results(fb, state, &layout, bg);
                return;
            }
            (_, Some(item)) => item,
        };

        let score = format!("スコア: {}/{}", state.score(), state.total());
        fb.put_str(2, layout.title_y, &score, text);

        self.draw_progress(fb, state.current_index(), state.total(), &layout, bg);
        let label = format!("問題 {}/{}", state.current_index() + 1, state.total());
        fb.put_str_centered(0, w, layout.progress_label_y, &label, text);

        fb.put_str_centered(0, w, layout.prompt_y, PROMPT, text);
        fb.put_str_centered(
            0,
            w,
            layout.name_y,
            &item.prompt,
            CellStyle::new(BLUE, bg).bold(),
        );

        match state.feedback() {
            None => {
                for (side, rect) in [(Side::Left, layout.left), (Side::Right, layout.right)] {
                    let label = state.option_text(side).unwrap_or_default();
                    draw_button(fb, rect, label, CellStyle::new(BLACK, GRAY));
                }
            }
            Some(feedback) => {
                if let Some(scale) = effects.text_scale {
                    draw_celebration_text(fb, w, layout.celebration_y, scale, bg);
                }

                let (msg, color) = if feedback.correct {
                    ("正解!".to_string(), GREEN)
                } else {
                    (format!("不正解! 正解は {} です。", item.correct), RED)
                };
                let style = CellStyle::new(color, bg).bold();
                fb.put_str_centered(0, w, layout.feedback_y, &msg, style);

                let area = layout.explanation;
                let lines = wrap_text(&feedback.explanation, area.w);
                let shown = lines.len().min(area.h as usize);
                for (i, (line, y)) in lines.iter().zip(area.y..).take(shown).enumerate() {
                    if i + 1 == shown && shown < lines.len() {
                        let cut = truncate_to_width(line, area.w.saturating_sub(1));
                        let line = format!("{}{}", cut.trim_end(), ELLIPSIS);
                        fb.put_str_centered(area.x, area.w, y, &line, text);
                    } else {
                        fb.put_str_centered(area.x, area.w, y, line, text);
                    }
                }

                draw_button(fb, layout.next, NEXT_LABEL, CellStyle::new(WHITE, BLUE).bold());
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: RandomSource>(
        &self,
        state: &GameState<R>,
        effects: &Effects<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, effects, viewport, &mut fb);
        fb
    }

    fn draw_progress(
        &self,
        fb: &mut FrameBuffer,
        index: usize,
        total: usize,
        layout: &QuizLayout,
        bg: Rgb,
    ) {
        let bar = layout.progress;
        if bar.w == 0 || total == 0 {
            return;
        }
        let filled = (bar.w as usize * index / total) as u16;
        fb.fill_rect(bar.x, bar.y, bar.w, 1, ' ', CellStyle::new(BLACK, GRAY));
        fb.fill_rect(bar.x, bar.y, filled, 1, ' ', CellStyle::new(BLACK, LIGHT_BLUE));

        for i in 1..total {
            let dx = (bar.w as usize * i / total) as u16;
            let seg_bg = if dx < filled { LIGHT_BLUE } else { GRAY };
            fb.put_char(bar.x + dx, bar.y, '│', CellStyle::new(BLACK, seg_bg));
        }
        let edge = CellStyle::new(BLACK, bg);
        if bar.x > 0 {
            fb.put_char(bar.x - 1, bar.y, '▕', edge);
        }
        fb.put_char(bar.x.saturating_add(bar.w), bar.y, '▏', edge);
    }

    fn draw_results<R: RandomSource>(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState<R>,
        layout: &QuizLayout,
        bg: Rgb,
    ) {
        let w = fb.width();
        let Some(band_theme) = state.result_band().map(theme) else {
            return;
        };
        let accent = CellStyle::new(band_theme.accent, bg);

        let score = format!("最終スコア: {}/{}", state.score(), state.total());
        fb.put_str_centered(0, w, layout.result_y, &score, accent.bold());
        fb.put_str_centered(0, w, layout.result_y + 3, band_theme.message_ja, accent);
        fb.put_str_centered(0, w, layout.result_y + 5, band_theme.message_en, accent);
        fb.put_str_centered(0, w, layout.result_y + 9, RESTART_HINT, CellStyle::new(BLACK, bg));
    }
}

/// Project a canvas point onto a viewport cell.
pub fn project(x: f32, y: f32, viewport: Viewport) -> Option<(u16, u16)> {
    if viewport.width == 0 || viewport.height == 0 || !x.is_finite() || !y.is_finite() {
        return None;
    }
    let col = (x / CANVAS_WIDTH * viewport.width as f32).floor();
    let row = (y / CANVAS_HEIGHT * viewport.height as f32).floor();
    Some((
        col.clamp(0.0, (viewport.width - 1) as f32) as u16,
        row.clamp(0.0, (viewport.height - 1) as f32) as u16,
    ))
}

fn particle_glyph(size: u8) -> char {
    match size {
        0..=8 => '·',
        9..=11 => '•',
        _ => '●',
    }
}

fn draw_flourish(fb: &mut FrameBuffer, flourish: &Flourish, viewport: Viewport) {
    for dot in &flourish.dots {
        if let Some((x, y)) = project(dot.x, dot.y, viewport) {
            let ch = if dot.radius <= 5 { '·' } else { '•' };
            fb.put_glyph(x, y, ch, GOLD);
        }
    }
    for star in &flourish.stars {
        let Some(center) = project(star.x, star.y, viewport) else {
            continue;
        };
        // Outer vertices only; inner ones nearly always land on the center.
        for &(px, py) in star.points().iter().step_by(2) {
            if let Some(tip) = project(px, py, viewport) {
                if tip != center {
                    fb.put_glyph(tip.0, tip.1, '·', GOLD);
                }
            }
        }
        fb.put_glyph(center.0, center.1, '★', GOLD);
    }
}

fn draw_button(fb: &mut FrameBuffer, rect: Rect, label: &str, style: CellStyle) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
    fb.draw_box(rect.x, rect.y, rect.w, rect.h, CellStyle { bold: false, ..style });
    let inner = rect.w.saturating_sub(4);
    let label = truncate_to_width(label, inner);
    fb.put_str_centered(rect.x + 2, inner, rect.y + rect.h / 2, label, style);
}

/// The pulse shows as sparkles on both sides; bold near the peak.
fn draw_celebration_text(fb: &mut FrameBuffer, w: u16, y: u16, scale: f32, bg: Rgb) {
    let pulse = ((scale - 1.0) / CELEBRATION_PULSE_AMPLITUDE).clamp(0.0, 1.0);
    let sparkles = "✦".repeat((pulse * 3.0).round() as usize);
    let text = format!("{sparkles} {CELEBRATION_TEXT} {sparkles}");
    let mut style = CellStyle::new(GOLD, bg);
    if pulse >= 0.5 {
        style = style.bold();
    }
    fb.put_str_centered(0, w, y, &text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bounds, ParticleSystem, QuestionBank, SimpleRng};

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn vp() -> Viewport {
        Viewport::new(80, 24)
    }

    #[test]
    fn answering_screen_shows_question_and_options() {
        let state = GameState::new(QuestionBank::builtin(), 3);
        let fb = QuizView::default().render(&state, &Effects::default(), vp());
        let text = screen_text(&fb);
        let item = state.current_item().unwrap();
        assert!(text.contains(TITLE));
        assert!(text.contains(PROMPT));
        assert!(text.contains(&item.prompt));
        assert!(text.contains(&item.correct));
        assert!(text.contains(&item.incorrect));
        assert!(text.contains("スコア: 0/5"));
        assert!(text.contains("問題 1/5"));
    }

    #[test]
    fn feedback_screen_colors_and_next_button() {
        let mut state = GameState::new(QuestionBank::builtin(), 3);
        let wrong = state.correct_side().other();
        state.apply_action(QuizAction::Select(wrong));

        let fb = QuizView::default().render(&state, &Effects::default(), vp());
        let text = screen_text(&fb);
        assert!(text.contains("不正解!"));
        assert!(text.contains(NEXT_LABEL));
        assert_eq!(fb.get(0, 0).unwrap().style.bg, LIGHT_RED);
        assert!(!text.contains(CELEBRATION_TEXT));
    }

    #[test]
    fn celebration_text_drawn_once_while_visible() {
        let mut state = GameState::new(QuestionBank::builtin(), 3);
        let side = state.correct_side();
        state.apply_action(QuizAction::Select(side));

        let mut particles = ParticleSystem::new(Bounds::default());
        particles.trigger(&mut SimpleRng::new(1), 0);
        let effects = Effects {
            celebration: particles.celebration(),
            text_scale: particles.text_scale(500),
            flourish: None,
        };
        let fb = QuizView::default().render(&state, &effects, vp());
        let text = screen_text(&fb);
        assert_eq!(text.matches(CELEBRATION_TEXT).count(), 1);
        assert!(text.contains("正解!"));
        assert_eq!(fb.get(79, 23).unwrap().style.bg, LIGHT_GREEN);
    }

    #[test]
    fn results_screen_uses_band_theme() {
        let mut state = GameState::new(QuestionBank::builtin(), 3);
        while !state.is_finished() {
            let side = state.correct_side();
            state.apply_action(QuizAction::Select(side));
            state.apply_action(QuizAction::Advance);
        }
        let band_theme = theme(state.result_band().unwrap());
        let fb = QuizView::default().render(&state, &Effects::default(), vp());
        let text = screen_text(&fb);
        assert!(text.contains("最終スコア: 5/5"));
        assert!(text.contains(band_theme.message_ja));
        assert!(text.contains(band_theme.message_en));
        assert!(text.contains(RESTART_HINT));
        assert_eq!(fb.get(0, 23).unwrap().style.bg, band_theme.background);
    }

    #[test]
    fn hit_test_per_phase() {
        let view = QuizView::default();
        let layout = view.layout(vp());
        let (lx, ly) = (layout.left.x + 1, layout.left.y + 1);
        let (rx, ry) = (layout.right.x + 1, layout.right.y + 1);
        let (nx, ny) = (layout.next.x + 1, layout.next.y + 1);

        assert_eq!(
            view.hit_test(Phase::Answering, vp(), lx, ly),
            Some(QuizAction::Select(Side::Left))
        );
        assert_eq!(
            view.hit_test(Phase::Answering, vp(), rx, ry),
            Some(QuizAction::Select(Side::Right))
        );
        assert_eq!(view.hit_test(Phase::Answering, vp(), nx, ny), None);
        assert_eq!(
            view.hit_test(Phase::Feedback, vp(), nx, ny),
            Some(QuizAction::Advance)
        );
        assert_eq!(view.hit_test(Phase::Feedback, vp(), lx, ly), None);
        assert_eq!(view.hit_test(Phase::Finished, vp(), nx, ny), None);
        assert_eq!(view.hit_test(Phase::Answering, vp(), 0, 0), None);
    }

    #[test]
    fn clipped_explanation_ends_with_ellipsis() {
        let words: Vec<String> = (0..60).map(|i| format!("word{}", i)).collect();
        let bank = QuestionBank::from_items(vec![crate::core::QuizItem::new(
            "雲井 保",
            "Amazon S3",
            "Amazon EBS",
            &words.join(" "),
        )])
        .unwrap();
        let mut state = GameState::with_rng(bank, 1, SimpleRng::new(1));
        let side = state.correct_side();
        state.apply_action(QuizAction::Select(side));

        let view = QuizView::default();
        let v = Viewport::new(40, 24);
        let area = view.layout(v).explanation;
        assert!(wrap_text(&words.join(" "), area.w).len() > area.h as usize);

        let fb = view.render(&state, &Effects::default(), v);
        let last = fb.row_text(area.y + area.h - 1);
        assert!(last.trim_end().ends_with(ELLIPSIS));
        assert!(text_width(last.trim()) <= area.w);
        for y in area.y..area.y + area.h - 1 {
            assert!(!fb.row_text(y).contains(ELLIPSIS));
        }
        assert!(!screen_text(&fb).contains("word59"));
    }

    #[test]
    fn explanation_that_fits_has_no_ellipsis() {
        let mut state = GameState::new(QuestionBank::builtin(), 3);
        let side = state.correct_side();
        state.apply_action(QuizAction::Select(side));
        let fb = QuizView::default().render(&state, &Effects::default(), vp());
        assert!(!screen_text(&fb).contains(ELLIPSIS));
    }

    #[test]
    fn buttons_do_not_overlap() {
        let layout = QuizView::default().layout(vp());
        assert!(layout.left.x + layout.left.w < layout.right.x);
        assert!(layout.right.x + layout.right.w <= 80);
        assert!(layout.explanation.y + layout.explanation.h <= layout.next.y);
    }

    #[test]
    fn projection_clamps_to_viewport() {
        let v = Viewport::new(80, 24);
        assert_eq!(project(0.0, 0.0, v), Some((0, 0)));
        assert_eq!(project(CANVAS_WIDTH, CANVAS_HEIGHT, v), Some((79, 23)));
        assert_eq!(project(400.0, 300.0, v), Some((40, 12)));
        assert_eq!(project(1.0, 1.0, Viewport::new(0, 0)), None);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let state = GameState::new(QuestionBank::builtin(), 3);
        for (w, h) in [(0, 0), (1, 1), (10, 3), (20, 30)] {
            let fb = QuizView::default().render(&state, &Effects::default(), Viewport::new(w, h));
            assert_eq!(fb.width(), w);
        }
    }
}
