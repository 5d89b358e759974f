//! Helpers for constructing URLs to media assets from content fields.
//!
//! Assets follow conventional path patterns; a missing file degrades at the
//! platform level (broken image, failed audio load) without surfacing an
//! error.

/// When `PUBLIC_URL` is set at compile time (e.g., `/play` for GitHub
/// Pages), generated URLs are prefixed accordingly. Local builds without
/// `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL for a left-page or zoomed image named by a content field.
#[must_use]
pub fn image_url(name: &str) -> String {
    asset_path(&format!("images/{name}.jpg"))
}

/// URL for an audio channel or one-shot sound.
#[must_use]
pub fn audio_url(name: &str) -> String {
    asset_path(&format!("audio/{name}.mp3"))
}

/// URL for a UI icon.
#[must_use]
pub fn icon_url(name: &str) -> String {
    asset_path(&format!("icons/{name}.svg"))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
