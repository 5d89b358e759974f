use std::cell::{Ref, RefCell};
use std::rc::Rc;

use yew::prelude::*;

use greybridge_story::{StoryData, StorySession};

use crate::audio::AudioChannels;
use crate::clock::BrowserClock;
use crate::dom::TimerHandle;

/// Pending timer handles, one slot per effect. Storing a new handle drops
/// (and thereby cancels) the previous one, and the whole bag dies with the
/// component, so no timer ever fires into a torn-down UI.
#[derive(Default)]
pub struct TimerBag {
    pub turn: Option<TimerHandle>,
    pub choice: Option<TimerHandle>,
    pub static_burst: Option<TimerHandle>,
    pub glitch: Option<TimerHandle>,
}

/// Shared handle to the session plus the render version that invalidates
/// the view. Event and timer callbacks mutate through here so they always
/// see the latest state, never a stale render snapshot.
#[derive(Clone)]
pub struct SessionCell {
    session: Rc<RefCell<StorySession<BrowserClock>>>,
    version: UseStateHandle<u32>,
}

impl SessionCell {
    pub fn borrow(&self) -> Ref<'_, StorySession<BrowserClock>> {
        self.session.borrow()
    }

    /// Apply a mutation and schedule a re-render.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut StorySession<BrowserClock>) -> R) -> R {
        let result = f(&mut self.session.borrow_mut());
        self.version.set((*self.version).wrapping_add(1));
        result
    }
}

#[derive(Clone)]
pub struct AppState {
    pub cell: SessionCell,
    pub timers: Rc<RefCell<TimerBag>>,
    pub audio: Rc<RefCell<Option<AudioChannels>>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let session = use_mut_ref(|| StorySession::new(load_story(), entropy_seed(), BrowserClock));
    let version = use_state(|| 0_u32);
    AppState {
        cell: SessionCell { session, version },
        timers: use_mut_ref(TimerBag::default),
        audio: use_mut_ref(|| None),
    }
}

/// The story table ships embedded in the bundle; a parse failure degrades
/// to the empty story rather than a broken page.
fn load_story() -> StoryData {
    StoryData::from_json(include_str!("../../static/assets/data/story.json")).unwrap_or_else(
        |err| {
            log::error!("story content failed to parse: {err}");
            StoryData::empty()
        },
    )
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
const fn entropy_seed() -> u64 {
    0x6E47_B00C
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_story_loads() {
        let story = load_story();
        assert!(!story.entries.is_empty(), "shipped story should parse");
    }
}
