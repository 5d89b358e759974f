//! Cue types for the cosmetic pulses and one-shot sounds.
//!
//! The engine never owns a timer. Operations return cues describing what
//! the shell should play and when to call the matching `clear_*` hook; the
//! shell keeps the cancellable timer handles.

use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::constants::{GLITCH_PULSE_MS, STATIC_PULSE_MS};
use crate::data::{Note, Settings};

/// One-shot sounds the shell knows how to play. Looping channels (theme,
/// ambient) are driven separately through [`crate::session::PageTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    PageTurn,
    Click,
    Static,
}

/// A static overlay burst. Restarting while one is in flight just restarts
/// the shell timer; the flag is a single boolean either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPulse {
    pub duration_ms: u32,
}

impl Default for StaticPulse {
    fn default() -> Self {
        Self {
            duration_ms: STATIC_PULSE_MS,
        }
    }
}

/// A text glitch pulse. Triggers while one is active are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlitchPulse {
    pub duration_ms: u32,
    /// Whether this pulse left a whisper in the notes feed.
    pub whispered: bool,
}

impl GlitchPulse {
    #[must_use]
    pub const fn new(whispered: bool) -> Self {
        Self {
            duration_ms: GLITCH_PULSE_MS,
            whispered,
        }
    }
}

/// Roll for a whisper note. The caller prepends it to the feed.
pub fn roll_whisper(
    rng: &mut ChaCha20Rng,
    settings: &Settings,
    timestamp: String,
) -> Option<Note> {
    if settings.whispers.is_empty() || rng.random::<f32>() >= settings.glitch_note_chance {
        return None;
    }
    let index = rng.random_range(0..settings.whispers.len());
    Some(Note {
        timestamp,
        text: format!("[UNKNOWN SOURCE]: {}", settings.whispers[index]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn whisper_roll_is_deterministic_per_seed() {
        let settings = Settings::default();
        let mut a = ChaCha20Rng::seed_from_u64(7);
        let mut b = ChaCha20Rng::seed_from_u64(7);

        let first = (0..16)
            .map(|_| roll_whisper(&mut a, &settings, "t".into()).map(|n| n.text))
            .collect::<Vec<_>>();
        let second = (0..16)
            .map(|_| roll_whisper(&mut b, &settings, "t".into()).map(|n| n.text))
            .collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn whisper_text_quotes_unknown_source() {
        let settings = Settings {
            glitch_note_chance: 1.0,
            ..Settings::default()
        };
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let note = roll_whisper(&mut rng, &settings, "04/15/2025 - 10:00".into())
            .expect("chance 1.0 always whispers");
        assert!(note.text.starts_with("[UNKNOWN SOURCE]: "));
        assert!(
            settings
                .whispers
                .iter()
                .any(|w| note.text.ends_with(w.as_str()))
        );
    }

    #[test]
    fn whisper_never_rolls_at_zero_chance() {
        let settings = Settings {
            glitch_note_chance: 0.0,
            ..Settings::default()
        };
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        for _ in 0..32 {
            assert!(roll_whisper(&mut rng, &settings, "t".into()).is_none());
        }
    }
}
