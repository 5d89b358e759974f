//! The book's five audio channels: two looping beds and three one-shots.
//!
//! Channels are created on the first user gesture so autoplay policy has a
//! gesture to anchor to. A playback rejection is non-fatal and discarded;
//! the page simply stays quiet.

use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

use greybridge_story::SoundCue;

use crate::paths::audio_url;

const THEME_VOLUME: f64 = 0.1;
const AMBIENT_VOLUME: f64 = 0.3;
const STATIC_VOLUME: f64 = 0.3;
const CLICK_VOLUME: f64 = 0.2;

pub struct AudioChannels {
    theme: HtmlAudioElement,
    ambient: HtmlAudioElement,
    page_turn: HtmlAudioElement,
    click: HtmlAudioElement,
    static_burst: HtmlAudioElement,
}

impl AudioChannels {
    /// Build the channel set.
    ///
    /// # Errors
    /// Returns an error if the browser refuses to construct an audio
    /// element.
    pub fn new() -> Result<Self, JsValue> {
        let theme = HtmlAudioElement::new_with_src(&audio_url("main-theme"))?;
        theme.set_loop(true);
        theme.set_volume(THEME_VOLUME);

        let ambient = HtmlAudioElement::new_with_src(&audio_url("ambient"))?;
        ambient.set_loop(true);
        ambient.set_volume(AMBIENT_VOLUME);

        let page_turn = HtmlAudioElement::new_with_src(&audio_url("page-turn"))?;

        let click = HtmlAudioElement::new_with_src(&audio_url("click"))?;
        click.set_volume(CLICK_VOLUME);

        let static_burst = HtmlAudioElement::new_with_src(&audio_url("static"))?;
        static_burst.set_volume(STATIC_VOLUME);

        Ok(Self {
            theme,
            ambient,
            page_turn,
            click,
            static_burst,
        })
    }

    /// Start the looping theme bed. No-op while muted.
    pub fn start_theme(&self, muted: bool) {
        if !muted {
            Self::play(&self.theme);
        }
    }

    /// Play a one-shot from the start. One-shots check the mute flag per
    /// play rather than being paused and resumed.
    pub fn play_cue(&self, cue: SoundCue, muted: bool) {
        if muted {
            return;
        }
        let element = match cue {
            SoundCue::PageTurn => &self.page_turn,
            SoundCue::Click => &self.click,
            SoundCue::Static => &self.static_burst,
        };
        element.set_current_time(0.0);
        Self::play(element);
    }

    /// Switch the ambient bed to the named track, restarting only when the
    /// track actually changes.
    pub fn set_ambient(&self, track: &str, muted: bool) {
        let url = audio_url(track);
        if !self.ambient.src().ends_with(&url) {
            self.ambient.set_src(&url);
            self.ambient.set_current_time(0.0);
        }
        if !muted {
            Self::play(&self.ambient);
        }
    }

    /// Pause or resume the two looping beds.
    pub fn set_muted(&self, muted: bool) {
        if muted {
            let _ = self.theme.pause();
            let _ = self.ambient.pause();
        } else {
            Self::play(&self.theme);
            Self::play(&self.ambient);
        }
    }

    fn play(element: &HtmlAudioElement) {
        // Autoplay policy may reject; nothing visibly happens either way.
        let _ = element.play();
    }
}
