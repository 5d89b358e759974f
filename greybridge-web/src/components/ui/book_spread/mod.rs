mod view_model;
#[cfg(test)]
mod tests;

use yew::prelude::*;

use greybridge_story::{Choice, EvidenceSpot, Settings};

use crate::components::ui::story_text::StoryText;
use crate::paths::image_url;

pub use view_model::{SpreadViewModel, build_spread_viewmodel};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub view: SpreadViewModel,
    pub turning: bool,
    pub glitch_active: bool,
    pub evidence_found: u32,
    pub total_evidence: u32,
    /// Ids of already-collected evidence, for marker styling.
    pub collected: Vec<String>,
    pub settings: Settings,
    pub on_choice: Callback<Choice>,
    pub on_collect: Callback<String>,
    pub on_zoom: Callback<String>,
    pub on_highlight: Callback<String>,
    pub on_glitch: Callback<()>,
    pub on_toggle_notes: Callback<()>,
}

/// The open book: image page on the left, text and choices on the right.
#[function_component(BookSpread)]
pub fn book_spread(p: &Props) -> Html {
    let zoom = {
        let on_zoom = p.on_zoom.clone();
        let image = p.view.image.clone();
        Callback::from(move |_: MouseEvent| on_zoom.emit(image.clone()))
    };
    let toggle_notes = p.on_toggle_notes.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("book-open", p.turning.then_some("page-animating"))}>
            <div class="book-page left-page">
                <div class="page-image-container">
                    <div class="magnifying-glass" title="Examine image" onclick={zoom}></div>
                    <img class="page-image"
                         src={image_url(&p.view.image)}
                         alt={p.view.title.clone()} />
                    { p.view.evidence.iter().map(|spot| render_marker(spot, p)).collect::<Html>() }
                    {
                        (!p.view.evidence.is_empty()).then(|| html! {
                            <div class="evidence-collection">
                                <div class="evidence-icon"></div>
                                <span>
                                    { "Evidence: " }
                                    <span class="evidence-count">
                                        { format!("{}/{}", p.evidence_found, p.total_evidence) }
                                    </span>
                                </span>
                            </div>
                        }).unwrap_or_default()
                    }
                </div>
                <div class="page-number">{ p.view.left_page_number }</div>
            </div>
            <div class="book-page right-page">
                <div class="page-content">
                    {
                        (!p.view.title.is_empty()).then(|| html! {
                            <h2 class="page-title">{ p.view.title.clone() }</h2>
                        }).unwrap_or_default()
                    }
                    <StoryText blocks={p.view.blocks.clone()}
                               settings={p.settings.clone()}
                               glitch_active={p.glitch_active}
                               on_highlight={p.on_highlight.clone()}
                               on_glitch={p.on_glitch.clone()} />
                    {
                        (!p.view.choices.is_empty()).then(|| html! {
                            <div class="choices-container">
                                { p.view.choices.iter().map(|choice| render_choice(choice, p)).collect::<Html>() }
                            </div>
                        }).unwrap_or_default()
                    }
                </div>
                <div class="page-number">{ p.view.right_page_number }</div>
                <div class="notes-toggle"
                     title="Open investigation notes"
                     onclick={toggle_notes}></div>
            </div>
        </div>
    }
}

fn render_marker(spot: &EvidenceSpot, p: &Props) -> Html {
    let found = p.collected.iter().any(|id| id == &spot.id);
    let onclick = {
        let on_collect = p.on_collect.clone();
        let id = spot.id.clone();
        Callback::from(move |_: MouseEvent| on_collect.emit(id.clone()))
    };
    html! {
        <div class={classes!(
                "evidence-marker",
                (spot.pulsing && !found).then_some("pulsing"),
                found.then_some("found"),
             )}
             style={format!("top: {}; left: {};", spot.position.top, spot.position.left)}
             data-evidence-id={spot.id.clone()}
             title={spot.description.clone()}
             {onclick}>
        </div>
    }
}

fn render_choice(choice: &Choice, p: &Props) -> Html {
    let onclick = {
        let on_choice = p.on_choice.clone();
        let choice = choice.clone();
        Callback::from(move |_: MouseEvent| on_choice.emit(choice.clone()))
    };
    html! {
        <button class="choice-btn" disabled={p.turning} {onclick}>
            { choice.text.clone() }
        </button>
    }
}
