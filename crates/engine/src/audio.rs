//! Answer sounds.
//!
//! Sound is an optional capability: the app holds an
//! `Option<Box<dyn AudioSink>>` and a missing or broken device only costs the
//! sound, never the game.

use std::io::{self, Write};
use std::time::Duration;

use crate::types::{CORRECT_TONE_HZ, INCORRECT_TONE_HZ, TONE_MS};

/// The two fixed tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Correct,
    Incorrect,
}

impl Tone {
    pub fn frequency_hz(&self) -> f32 {
        match self {
            Tone::Correct => CORRECT_TONE_HZ,
            Tone::Incorrect => INCORRECT_TONE_HZ,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(TONE_MS)
    }
}

/// Something that can play a [`Tone`]. Playback must not block the frame loop.
pub trait AudioSink {
    fn play(&mut self, tone: Tone);

    fn name(&self) -> &'static str;
}

/// How answers should sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundMode {
    Off,
    /// Terminal bell (BEL); both tones sound the same.
    Bell,
    /// Sine tones through the system audio device.
    Tone,
}

impl SoundMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" | "0" | "false" => Some(SoundMode::Off),
            "bell" => Some(SoundMode::Bell),
            "tone" | "tones" | "on" => Some(SoundMode::Tone),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundMode::Off => "off",
            SoundMode::Bell => "bell",
            SoundMode::Tone => "tone",
        }
    }
}

/// Rings the terminal bell.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, _tone: Tone) {
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            log::debug!("terminal bell failed: {}", e);
        }
    }

    fn name(&self) -> &'static str {
        "bell"
    }
}

#[cfg(feature = "audio")]
pub use tone::{AudioError, ToneSink};

#[cfg(feature = "audio")]
mod tone {
    use rodio::source::{SineWave, Source};
    use rodio::{OutputStream, OutputStreamHandle};
    use thiserror::Error;

    use super::{AudioSink, Tone};
    use crate::types::TONE_AMPLITUDE;

    #[derive(Debug, Error)]
    pub enum AudioError {
        #[error("no audio output device: {0}")]
        Device(#[from] rodio::StreamError),
    }

    /// Sine tones via rodio. The stream must outlive every queued sound.
    pub struct ToneSink {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl ToneSink {
        pub fn open() -> Result<Self, AudioError> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }
    }

    impl AudioSink for ToneSink {
        fn play(&mut self, tone: Tone) {
            let source = SineWave::new(tone.frequency_hz())
                .take_duration(tone.duration())
                .amplify(TONE_AMPLITUDE);
            if let Err(e) = self.handle.play_raw(source) {
                log::warn!("could not play {:?} tone: {}", tone, e);
            }
        }

        fn name(&self) -> &'static str {
            "tone"
        }
    }
}

/// Build the sink for `mode`, degrading to the bell and then to silence.
pub fn open_sink(mode: SoundMode) -> Option<Box<dyn AudioSink>> {
    match mode {
        SoundMode::Off => None,
        SoundMode::Bell => Some(Box::new(TerminalBell::stdout())),
        SoundMode::Tone => open_tone_sink(),
    }
}

#[cfg(feature = "audio")]
fn open_tone_sink() -> Option<Box<dyn AudioSink>> {
    match ToneSink::open() {
        Ok(sink) => Some(Box::new(sink)),
        Err(e) => {
            log::warn!("{}; falling back to terminal bell", e);
            Some(Box::new(TerminalBell::stdout()))
        }
    }
}

#[cfg(not(feature = "audio"))]
fn open_tone_sink() -> Option<Box<dyn AudioSink>> {
    log::warn!("built without the `audio` feature; falling back to terminal bell");
    Some(Box::new(TerminalBell::stdout()))
}
