//! Terminal quiz runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no widget toolkit). Configuration comes from `QUIZ_*` environment
//! variables, see `tui_quiz::engine::config`.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_quiz::core::QuestionBank;
use tui_quiz::engine::{open_sink, AppConfig, QuizApp};
use tui_quiz::input::{click_position, handle_key_event, should_quit};
use tui_quiz::term::{Effects, FrameBuffer, QuizView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config);

    let bank = config.load_bank().unwrap_or_else(|e| {
        log::warn!("{}; using the built-in question bank", e);
        QuestionBank::builtin()
    });
    let seed = config.seed.unwrap_or_else(time_seed);
    log::info!(
        "bank: {} items, session: {}, seed: {}, sound: {}",
        bank.len(),
        config.session_len,
        seed,
        config.sound.as_str()
    );

    let app = QuizApp::seeded(bank, config.session_len, seed).with_audio(open_sink(config.sound));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, app, config.frame_duration());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &AppConfig) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().filter_or("QUIZ_LOG", "warn"));
    if let Some(path) = &config.log_path {
        match File::create(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("cannot open log file {}: {}", path, e),
        }
    }
    builder.init();
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut app: QuizApp, frame: Duration) -> Result<()> {
    let view = QuizView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let start = Instant::now();

    loop {
        let frame_start = Instant::now();
        let now_ms = start.elapsed().as_millis() as u64;
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        // Drain pending input.
        while event::poll(Duration::ZERO)? {
            let phase = app.state().phase();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key, phase) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key, phase) {
                        app.handle(action, now_ms);
                    }
                }
                Event::Mouse(mouse) => {
                    let action = click_position(mouse)
                        .and_then(|(col, row)| view.hit_test(phase, viewport, col, row));
                    if let Some(action) = action {
                        app.handle(action, now_ms);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        app.update(now_ms);

        let flourish = app.flourish();
        let effects = Effects {
            celebration: app.particles().celebration(),
            text_scale: app.celebration_text_scale(now_ms),
            flourish: flourish.as_ref(),
        };
        view.render_into(app.state(), &effects, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Wait for input or the next frame tick.
        let timeout = frame
            .checked_sub(frame_start.elapsed())
            .unwrap_or(Duration::ZERO);
        event::poll(timeout)?;
    }
}
