use thiserror::Error;

use crate::Clock;
use crate::constants::{CHOICE_STATIC_LEAD_MS, PAGE_TURN_MS};
use crate::data::{Choice, EvidenceRecord, Note, Page, StoryData};
use crate::effects::{GlitchPulse, SoundCue, StaticPulse, roll_whisper};
use crate::markup::has_trigger_word;
use crate::state::GameState;

/// Errors raised when an id fails to resolve against the story table.
///
/// Lookup misses leave state untouched; the shell logs them and nothing
/// else happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoryError {
    #[error("no entry or ending with id `{0}`")]
    UnknownPage(String),
    #[error("evidence `{evidence}` is not present on page `{page}`")]
    UnknownEvidence { page: String, evidence: String },
    #[error("no page is open")]
    NoPageOpen,
    #[error("the story has no entries")]
    EmptyStory,
}

/// Cue returned by a successful page turn. The shell plays the page-turn
/// sound, switches the ambient channel when a track is named, and calls
/// [`StorySession::finish_turn`] once `duration_ms` elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTurn {
    pub ambient: Option<String>,
    pub duration_ms: u32,
}

/// Cue returned by a choice: fire the static burst now, open `next` after
/// `lead_ms`. The two are sequenced, not concurrent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub next: String,
    pub lead_ms: u32,
    pub static_pulse: StaticPulse,
}

/// Result of an evidence click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceOutcome {
    /// New find: the shell plays the click sound, plus the static burst for
    /// pulsing spots.
    Collected { static_pulse: Option<StaticPulse> },
    /// Second click on the same spot; nothing changed.
    AlreadyCollected,
}

/// Result of clicking a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightOutcome {
    pub sound: SoundCue,
    pub static_pulse: Option<StaticPulse>,
}

/// High-level session binding the static story table to a mutable game
/// state. All mutation flows through here; the presentation layer only
/// reads.
#[derive(Debug, Clone)]
pub struct StorySession<C: Clock> {
    story: StoryData,
    state: GameState,
    clock: C,
}

impl<C: Clock> StorySession<C> {
    /// Construct a fresh session on the cover screen, seeding the collected
    /// evidence and notes feed from the story's initial items.
    #[must_use]
    pub fn new(story: StoryData, seed: u64, clock: C) -> Self {
        let mut state = GameState::default().with_seed(seed);
        state.collected = story.initial_evidence.clone();
        // Initial notes are authored oldest-first; the feed renders newest
        // first.
        state.notes = story.initial_notes.iter().rev().cloned().collect();
        Self {
            story,
            state,
            clock,
        }
    }

    #[must_use]
    pub fn story(&self) -> &StoryData {
        &self.story
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn with_state_mut<R>(&mut self, f: impl FnOnce(&mut GameState) -> R) -> R {
        f(&mut self.state)
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Resolve the page the reader is looking at, if any.
    #[must_use]
    pub fn current_page(&self) -> Option<Page<'_>> {
        self.state
            .current
            .as_deref()
            .and_then(|id| self.story.page(id))
    }

    /// Leave the cover and open the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::EmptyStory`] when the story has no entries.
    pub fn begin(&mut self) -> Result<PageTurn, StoryError> {
        let first = self
            .story
            .first_entry()
            .map(|entry| entry.id.clone())
            .ok_or(StoryError::EmptyStory)?;
        self.open_page(&first)
    }

    /// Open a page by id.
    ///
    /// Appends the id to the visited history if new, points the history
    /// index at it, and starts the turn animation. The id appears exactly
    /// once in the history no matter how often the page is revisited.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::UnknownPage`] when the id resolves to neither
    /// an entry nor an ending; state is left untouched.
    pub fn open_page(&mut self, id: &str) -> Result<PageTurn, StoryError> {
        let ambient = match self.story.page(id) {
            Some(Page::Entry(entry)) => entry.ambient_sound.clone(),
            Some(Page::Ending(_)) => None,
            None => return Err(StoryError::UnknownPage(id.to_string())),
        };

        if !self.state.visited.iter().any(|visited| visited == id) {
            self.state.visited.push(id.to_string());
        }
        self.state.current = Some(id.to_string());
        self.state.current_index = self.state.visited.iter().position(|visited| visited == id);
        self.state.turning = true;

        Ok(PageTurn {
            ambient,
            duration_ms: PAGE_TURN_MS,
        })
    }

    /// Timer hook: the turn animation finished.
    pub fn finish_turn(&mut self) {
        self.state.turning = false;
    }

    /// Step back through the visited history. `None` while turning, on the
    /// cover, or at the first page.
    pub fn back(&mut self) -> Option<PageTurn> {
        if self.state.turning || self.state.at_history_start() {
            return None;
        }
        let index = self.state.current_index?;
        let previous = self.state.visited.get(index.checked_sub(1)?)?.clone();
        self.open_page(&previous).ok()
    }

    /// Replay the visited history forward. `None` while turning or at the
    /// newest page.
    pub fn forward(&mut self) -> Option<PageTurn> {
        if self.state.turning || self.state.at_history_end() {
            return None;
        }
        let index = self.state.current_index?;
        let next = self.state.visited.get(index + 1)?.clone();
        self.open_page(&next).ok()
    }

    /// Take a choice. `None` while the page is still turning.
    ///
    /// The flag, when present, is appended unconditionally; taking the same
    /// choice twice records it twice. The returned cue sequences the static
    /// burst ahead of the page turn.
    pub fn choose(&mut self, choice: &Choice) -> Option<PendingTurn> {
        if self.state.turning {
            return None;
        }
        if let Some(flag) = &choice.flag {
            self.state.flags.push(flag.clone());
        }
        let static_pulse = self.trigger_static();
        Some(PendingTurn {
            next: choice.next.clone(),
            lead_ms: CHOICE_STATIC_LEAD_MS,
            static_pulse,
        })
    }

    /// Collect an evidence hotspot on the current entry.
    ///
    /// Idempotent per id: a repeat click reports
    /// [`EvidenceOutcome::AlreadyCollected`] and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::NoPageOpen`] on the cover and
    /// [`StoryError::UnknownEvidence`] when the current page carries no
    /// spot with this id (endings never do).
    pub fn collect_evidence(&mut self, evidence_id: &str) -> Result<EvidenceOutcome, StoryError> {
        if self.state.has_collected(evidence_id) {
            return Ok(EvidenceOutcome::AlreadyCollected);
        }
        let current = self.state.current.clone().ok_or(StoryError::NoPageOpen)?;
        let Some(spot) = self
            .story
            .entry(&current)
            .and_then(|entry| entry.evidence.iter().find(|spot| spot.id == evidence_id))
        else {
            return Err(StoryError::UnknownEvidence {
                page: current,
                evidence: evidence_id.to_string(),
            });
        };

        let entry_title = self
            .story
            .entry(&current)
            .map(|entry| entry.title.clone())
            .unwrap_or_default();
        let record = EvidenceRecord {
            id: spot.id.clone(),
            title: format!("Evidence from {entry_title}"),
            content: spot.description.clone(),
        };
        let note = Note {
            timestamp: self.clock.now().to_string(),
            text: format!("Found evidence: {}", spot.description),
        };
        let pulsing = spot.pulsing;

        self.state.collected.push(record);
        self.state.record_note(note);
        self.state.evidence_found += 1;
        let static_pulse = pulsing.then(|| self.trigger_static());
        Ok(EvidenceOutcome::Collected { static_pulse })
    }

    /// Append a free-text note. Blank or whitespace-only input is a no-op.
    pub fn add_note(&mut self, text: &str) -> Option<SoundCue> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let note = Note {
            timestamp: self.clock.now().to_string(),
            text: trimmed.to_string(),
        };
        self.state.record_note(note);
        Some(SoundCue::Click)
    }

    /// Record a clicked highlight span as a note; trigger-word spans also
    /// fire the static burst.
    pub fn note_highlight(&mut self, text: &str) -> HighlightOutcome {
        let note = Note {
            timestamp: self.clock.now().to_string(),
            text: format!("Noted: \"{text}\""),
        };
        self.state.record_note(note);
        let triggers = has_trigger_word(text, &self.story.settings.static_trigger_words);
        let static_pulse = triggers.then(|| self.trigger_static());
        HighlightOutcome {
            sound: SoundCue::Click,
            static_pulse,
        }
    }

    /// Fire the static overlay burst. Always succeeds; a burst already in
    /// flight just has its window restarted by the shell.
    pub fn trigger_static(&mut self) -> StaticPulse {
        self.state.static_active = true;
        StaticPulse::default()
    }

    /// Timer hook: the static burst window elapsed.
    pub fn clear_static(&mut self) {
        self.state.static_active = false;
    }

    /// Fire the text glitch pulse. `None` while one is active: overlapping
    /// glitches are deliberately dropped.
    pub fn trigger_glitch(&mut self) -> Option<GlitchPulse> {
        if self.state.glitch_active {
            return None;
        }
        self.state.glitch_active = true;
        let stamp = self.clock.now().to_string();
        let whisper = roll_whisper(self.state.rng(), &self.story.settings, stamp);
        let whispered = whisper.is_some();
        if let Some(note) = whisper {
            self.state.record_note(note);
        }
        Some(GlitchPulse::new(whispered))
    }

    /// Timer hook: the glitch window elapsed.
    pub fn clear_glitch(&mut self) {
        self.state.glitch_active = false;
    }

    /// Flip the mute flag and report the new value. The shell pauses or
    /// resumes the looping channels; one-shots check the flag per play.
    pub fn toggle_audio(&mut self) -> bool {
        self.state.muted = !self.state.muted;
        self.state.muted
    }

    pub fn toggle_notes(&mut self) -> SoundCue {
        self.state.notes_open = !self.state.notes_open;
        SoundCue::Click
    }

    pub fn zoom(&mut self, image: &str) {
        self.state.zoomed_image = Some(image.to_string());
    }

    pub fn close_zoom(&mut self) {
        self.state.zoomed_image = None;
    }
}
