use yew::prelude::*;

use crate::paths::image_url;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    /// Image name from the content table, not a URL.
    pub image: String,
    pub on_close: Callback<()>,
}

/// Full-screen examination view. Clicking anywhere dismisses it.
#[function_component(ZoomOverlay)]
pub fn zoom_overlay(p: &Props) -> Html {
    let onclick = p.on_close.reform(|_: MouseEvent| ());
    html! {
        <div class="image-zoom-overlay active" {onclick}>
            <img class="zoomed-image" src={image_url(&p.image)} alt="Zoomed page image" />
            <div class="close-zoom">{ "×" }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn overlay_shows_the_named_image() {
        let html = block_on(
            LocalServerRenderer::<ZoomOverlay>::with_props(Props {
                image: "town-overview".into(),
                on_close: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("/images/town-overview.jpg"));
    }
}
