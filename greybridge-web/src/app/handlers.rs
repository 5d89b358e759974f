//! Callback builders wiring the engine to browser events and timers.
//!
//! Every handler applies one mutation through [`SessionCell::mutate`] and
//! then performs whatever cues the engine returned. Timer callbacks hold a
//! `Weak` reference to the timer bag, so an unmounted book schedules
//! nothing further.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use yew::prelude::*;

use greybridge_story::{Choice, EvidenceOutcome, PageTurn, SoundCue, StaticPulse};

use crate::app::state::{AppState, SessionCell, TimerBag};
use crate::audio::AudioChannels;
use crate::dom;

type AudioRef = Rc<RefCell<Option<AudioChannels>>>;
type TimerRef = Rc<RefCell<TimerBag>>;
type Slot = fn(&mut TimerBag) -> &mut Option<dom::TimerHandle>;

/// The full set of callbacks the view hands to its components.
#[derive(Clone)]
pub struct Handlers {
    pub begin: Callback<()>,
    pub choose: Callback<Choice>,
    pub collect: Callback<String>,
    pub add_note: Callback<String>,
    pub toggle_notes: Callback<()>,
    pub toggle_audio: Callback<()>,
    pub back: Callback<()>,
    pub forward: Callback<()>,
    pub highlight: Callback<String>,
    pub glitch: Callback<()>,
    pub zoom: Callback<String>,
    pub close_zoom: Callback<()>,
}

fn play(audio: &AudioRef, cue: SoundCue, muted: bool) {
    if let Some(channels) = audio.borrow().as_ref() {
        channels.play_cue(cue, muted);
    }
}

fn schedule_into(
    timers: &TimerRef,
    slot: Slot,
    delay_ms: u32,
    callback: impl FnOnce() + 'static,
) {
    match dom::schedule(delay_ms, callback) {
        Ok(handle) => *slot(&mut timers.borrow_mut()) = Some(handle),
        Err(err) => dom::console_error(&format!(
            "failed to schedule effect timer: {}",
            dom::js_error_message(&err)
        )),
    }
}

fn schedule_turn_finish(cell: &SessionCell, timers: &TimerRef, delay_ms: u32) {
    let cell = cell.clone();
    schedule_into(timers, |bag| &mut bag.turn, delay_ms, move || {
        cell.mutate(|session| session.finish_turn());
    });
}

fn run_static_pulse(
    cell: &SessionCell,
    timers: &TimerRef,
    audio: &AudioRef,
    pulse: StaticPulse,
    muted: bool,
) {
    play(audio, SoundCue::Static, muted);
    let cell = cell.clone();
    schedule_into(timers, |bag| &mut bag.static_burst, pulse.duration_ms, move || {
        cell.mutate(|session| session.clear_static());
    });
}

fn apply_turn(cell: &SessionCell, timers: &TimerRef, audio: &AudioRef, turn: &PageTurn, muted: bool) {
    play(audio, SoundCue::PageTurn, muted);
    if let Some(track) = &turn.ambient
        && let Some(channels) = audio.borrow().as_ref()
    {
        channels.set_ambient(track, muted);
    }
    schedule_turn_finish(cell, timers, turn.duration_ms);
}

fn open_page(cell: &SessionCell, timers: &TimerRef, audio: &AudioRef, id: &str) {
    let outcome = cell.mutate(|session| {
        session
            .open_page(id)
            .map(|turn| (turn, session.state().muted))
    });
    match outcome {
        Ok((turn, muted)) => apply_turn(cell, timers, audio, &turn, muted),
        Err(err) => log::error!("navigation failed: {err}"),
    }
}

#[must_use]
pub fn build_handlers(state: &AppState) -> Handlers {
    Handlers {
        begin: build_begin(state),
        choose: build_choose(state),
        collect: build_collect(state),
        add_note: build_add_note(state),
        toggle_notes: build_toggle_notes(state),
        toggle_audio: build_toggle_audio(state),
        back: build_nav(state, Direction::Back),
        forward: build_nav(state, Direction::Forward),
        highlight: build_highlight(state),
        glitch: build_glitch(state),
        zoom: build_zoom(state),
        close_zoom: build_close_zoom(state),
    }
}

fn build_begin(state: &AppState) -> Callback<()> {
    let cell = state.cell.clone();
    let timers = state.timers.clone();
    let audio = state.audio.clone();
    Callback::from(move |()| {
        // First user gesture: safe point to create the audio channels.
        if audio.borrow().is_none() {
            match AudioChannels::new() {
                Ok(channels) => *audio.borrow_mut() = Some(channels),
                Err(err) => log::warn!("audio unavailable: {}", dom::js_error_message(&err)),
            }
        }
        let outcome = cell.mutate(|session| {
            session
                .begin()
                .map(|turn| (turn, session.state().muted))
        });
        match outcome {
            Ok((turn, muted)) => {
                if let Some(channels) = audio.borrow().as_ref() {
                    channels.start_theme(muted);
                }
                apply_turn(&cell, &timers, &audio, &turn, muted);
            }
            Err(err) => log::error!("cannot open the book: {err}"),
        }
    })
}

fn build_choose(state: &AppState) -> Callback<Choice> {
    let cell = state.cell.clone();
    let timers = state.timers.clone();
    let audio = state.audio.clone();
    Callback::from(move |choice: Choice| {
        let Some((pending, muted)) = cell.mutate(|session| {
            let pending = session.choose(&choice)?;
            Some((pending, session.state().muted))
        }) else {
            return;
        };

        run_static_pulse(&cell, &timers, &audio, pending.static_pulse, muted);

        let lead_ms = pending.lead_ms;
        let next_id = pending.next;
        let cell = cell.clone();
        let audio = audio.clone();
        let weak_timers = Rc::downgrade(&timers);
        schedule_into(&timers, |bag| &mut bag.choice, lead_ms, move || {
            if let Some(timers) = Weak::upgrade(&weak_timers) {
                open_page(&cell, &timers, &audio, &next_id);
            }
        });
    })
}

fn build_collect(state: &AppState) -> Callback<String> {
    let cell = state.cell.clone();
    let timers = state.timers.clone();
    let audio = state.audio.clone();
    Callback::from(move |evidence_id: String| {
        let outcome = cell.mutate(|session| {
            session
                .collect_evidence(&evidence_id)
                .map(|outcome| (outcome, session.state().muted))
        });
        match outcome {
            Ok((EvidenceOutcome::Collected { static_pulse }, muted)) => {
                play(&audio, SoundCue::Click, muted);
                if let Some(pulse) = static_pulse {
                    run_static_pulse(&cell, &timers, &audio, pulse, muted);
                }
            }
            Ok((EvidenceOutcome::AlreadyCollected, _)) => {}
            Err(err) => log::error!("evidence lookup failed: {err}"),
        }
    })
}

fn build_add_note(state: &AppState) -> Callback<String> {
    let cell = state.cell.clone();
    let audio = state.audio.clone();
    Callback::from(move |text: String| {
        let cue = cell.mutate(|session| {
            session
                .add_note(&text)
                .map(|cue| (cue, session.state().muted))
        });
        if let Some((cue, muted)) = cue {
            play(&audio, cue, muted);
        }
    })
}

fn build_toggle_notes(state: &AppState) -> Callback<()> {
    let cell = state.cell.clone();
    let audio = state.audio.clone();
    Callback::from(move |()| {
        let (cue, muted) = cell.mutate(|session| {
            let cue = session.toggle_notes();
            (cue, session.state().muted)
        });
        play(&audio, cue, muted);
    })
}

fn build_toggle_audio(state: &AppState) -> Callback<()> {
    let cell = state.cell.clone();
    let audio = state.audio.clone();
    Callback::from(move |()| {
        let muted = cell.mutate(|session| session.toggle_audio());
        if let Some(channels) = audio.borrow().as_ref() {
            channels.set_muted(muted);
        }
    })
}

#[derive(Clone, Copy)]
enum Direction {
    Back,
    Forward,
}

fn build_nav(state: &AppState, direction: Direction) -> Callback<()> {
    let cell = state.cell.clone();
    let timers = state.timers.clone();
    let audio = state.audio.clone();
    Callback::from(move |()| {
        let turn = cell.mutate(|session| {
            let turn = match direction {
                Direction::Back => session.back(),
                Direction::Forward => session.forward(),
            };
            turn.map(|turn| (turn, session.state().muted))
        });
        if let Some((turn, muted)) = turn {
            apply_turn(&cell, &timers, &audio, &turn, muted);
        }
    })
}

fn build_highlight(state: &AppState) -> Callback<String> {
    let cell = state.cell.clone();
    let timers = state.timers.clone();
    let audio = state.audio.clone();
    Callback::from(move |text: String| {
        let (outcome, muted) = cell.mutate(|session| {
            let outcome = session.note_highlight(&text);
            (outcome, session.state().muted)
        });
        play(&audio, outcome.sound, muted);
        if let Some(pulse) = outcome.static_pulse {
            run_static_pulse(&cell, &timers, &audio, pulse, muted);
        }
    })
}

fn build_glitch(state: &AppState) -> Callback<()> {
    let cell = state.cell.clone();
    let timers = state.timers.clone();
    let audio = state.audio.clone();
    Callback::from(move |()| {
        let Some((pulse, muted)) = cell.mutate(|session| {
            let pulse = session.trigger_glitch()?;
            Some((pulse, session.state().muted))
        }) else {
            return;
        };
        play(&audio, SoundCue::Static, muted);
        let cell = cell.clone();
        schedule_into(&timers, |bag| &mut bag.glitch, pulse.duration_ms, move || {
            cell.mutate(|session| session.clear_glitch());
        });
    })
}

fn build_zoom(state: &AppState) -> Callback<String> {
    let cell = state.cell.clone();
    let audio = state.audio.clone();
    Callback::from(move |image: String| {
        let muted = cell.mutate(|session| {
            session.zoom(&image);
            session.state().muted
        });
        play(&audio, SoundCue::Click, muted);
    })
}

fn build_close_zoom(state: &AppState) -> Callback<()> {
    let cell = state.cell.clone();
    Callback::from(move |()| {
        cell.mutate(|session| session.close_zoom());
    })
}
