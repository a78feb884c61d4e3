use tui_quiz::core::{GameState, QuestionBank, QuizItem};
use tui_quiz::engine::QuizApp;
use tui_quiz::term::{
    encode_diff_into, encode_full_into, text_width, wrap_text, Effects, FrameBuffer, QuizView,
    Viewport,
};
use tui_quiz::types::{Phase, QuizAction, Side, SESSION_LEN};

fn screen(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn one_item_bank(explanation: &str) -> QuestionBank {
    QuestionBank::from_items(vec![QuizItem::new(
        "高橋 龍",
        "Amazon EC2",
        "Amazon Lightsail",
        explanation,
    )])
    .unwrap()
}

#[test]
fn term_view_clicking_the_left_button_answers_left() {
    let view = QuizView::default();
    let vp = Viewport::new(100, 30);
    let mut state = GameState::new(QuestionBank::builtin(), 17);
    let layout = view.layout(vp);

    let action = view
        .hit_test(state.phase(), vp, layout.left.x, layout.left.y)
        .unwrap();
    assert_eq!(action, QuizAction::Select(Side::Left));
    state.apply_action(action);
    assert_eq!(state.feedback().unwrap().chosen, Side::Left);

    // The option buttons stop responding once feedback is shown.
    let (cx, cy) = (layout.right.x, layout.right.y);
    assert_eq!(view.hit_test(state.phase(), vp, cx, cy), None);
}

#[test]
fn term_view_left_label_matches_left_option() {
    let view = QuizView::default();
    let vp = Viewport::new(80, 24);
    let state = GameState::new(QuestionBank::builtin(), 17);
    let fb = view.render(&state, &Effects::default(), vp);
    let layout = view.layout(vp);

    let label_row = fb.row_text(layout.left.y + 1);
    let left = state.option_text(Side::Left).unwrap();
    let right = state.option_text(Side::Right).unwrap();
    let li = label_row.find(left).unwrap();
    let ri = label_row.rfind(right).unwrap();
    assert!(li < ri);
}

#[test]
fn term_view_explanation_is_wrapped_inside_viewport() {
    let explanation = "高橋 (Takahashi) means 'high bridge', representing the connection to the cloud. \
                       龍 (Ryu) means 'dragon', symbolizing EC2's powerful computing capabilities.";
    let mut state = GameState::with_rng(
        one_item_bank(explanation),
        1,
        tui_quiz::core::SimpleRng::new(1),
    );
    let side = state.correct_side();
    state.apply_action(QuizAction::Select(side));

    let view = QuizView::default();
    let vp = Viewport::new(60, 24);
    let fb = view.render(&state, &Effects::default(), vp);
    let text = screen(&fb);
    assert!(text.contains("(Takahashi)"));
    assert!(text.contains("capabilities."));

    let area = view.layout(vp).explanation;
    for line in wrap_text(explanation, area.w) {
        assert!(text_width(&line) <= area.w);
    }
}

#[test]
fn term_view_wrong_answer_names_correct_option() {
    let mut state = GameState::with_rng(one_item_bank(""), 1, tui_quiz::core::SimpleRng::new(2));
    let wrong = state.correct_side().other();
    state.apply_action(QuizAction::Select(wrong));
    let fb = QuizView::default().render(&state, &Effects::default(), Viewport::new(80, 24));
    assert!(screen(&fb).contains("不正解! 正解は Amazon EC2 です。"));
}

#[test]
fn term_view_app_frames_through_a_whole_session() {
    let view = QuizView::default();
    let vp = Viewport::new(80, 24);
    let mut app = QuizApp::seeded(QuestionBank::builtin(), SESSION_LEN, 55);
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    let mut now = 0;

    while app.state().phase() != Phase::Finished {
        let layout = view.layout(vp);
        let target = match app.state().phase() {
            Phase::Answering => {
                let rect = if app.state().correct_side() == Side::Left {
                    layout.left
                } else {
                    layout.right
                };
                (rect.x + 1, rect.y + 1)
            }
            _ => (layout.next.x + 1, layout.next.y + 1),
        };
        let action = view
            .hit_test(app.state().phase(), vp, target.0, target.1)
            .unwrap();
        app.handle(action, now);

        for _ in 0..10 {
            now += 16;
            app.update(now);
            let flourish = app.flourish();
            let effects = Effects {
                celebration: app.particles().celebration(),
                text_scale: app.celebration_text_scale(now),
                flourish: flourish.as_ref(),
            };
            view.render_into(app.state(), &effects, vp, &mut fb);
        }
    }

    let text = screen(&fb);
    assert!(text.contains(&format!("最終スコア: {}/{}", SESSION_LEN, SESSION_LEN)));
    assert!(text.contains('★'));
}

#[test]
fn term_encoder_diff_is_smaller_than_full_redraw() {
    let view = QuizView::default();
    let vp = Viewport::new(80, 24);
    let mut state = GameState::new(QuestionBank::builtin(), 8);
    let before = view.render(&state, &Effects::default(), vp);
    let side = state.correct_side();
    state.apply_action(QuizAction::Select(side));
    state.apply_action(QuizAction::Advance);
    let after = view.render(&state, &Effects::default(), vp);

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len());
}
