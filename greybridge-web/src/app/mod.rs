pub mod handlers;
pub mod state;

use yew::prelude::*;

use crate::components::ui::book_spread::{BookSpread, build_spread_viewmodel};
use crate::components::ui::cover::Cover;
use crate::components::ui::notes_panel::NotesPanel;
use crate::components::ui::zoom_overlay::ZoomOverlay;
use crate::paths::icon_url;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    let handlers = handlers::build_handlers(&app_state);

    // Snapshot the session for this render; mutation happens in handlers.
    let (game, settings, view) = {
        let session = app_state.cell.borrow();
        let game = session.state().clone();
        let settings = session.story().settings.clone();
        let view = session
            .current_page()
            .map(|page| build_spread_viewmodel(page, session.state()));
        (game, settings, view)
    };

    let collected_ids = game
        .collected
        .iter()
        .map(|record| record.id.clone())
        .collect::<Vec<_>>();
    let prev_disabled = game.turning || game.at_history_start();
    let next_disabled = game.turning || game.at_history_end();
    let audio_icon = if game.muted { "audio-off" } else { "audio-on" };

    html! {
        <div class="game-container">
            <h1 class="game-title">{ "ECHOES OF GREYBRIDGE" }</h1>

            <div class={classes!("static-overlay", game.static_active.then_some("active"))}></div>

            {
                game.zoomed_image.as_ref().map(|image| html! {
                    <ZoomOverlay image={image.clone()} on_close={handlers.close_zoom.clone()} />
                }).unwrap_or_default()
            }

            <button class="audio-toggle"
                    title="Toggle audio"
                    onclick={handlers.toggle_audio.reform(|_: MouseEvent| ())}>
                <img src={icon_url(audio_icon)} alt="Audio toggle" />
            </button>

            <div class="book-container">
            {
                match view {
                    None => html! { <Cover on_begin={handlers.begin.clone()} /> },
                    Some(view) => html! {
                        <>
                            <BookSpread view={view}
                                        turning={game.turning}
                                        glitch_active={game.glitch_active}
                                        evidence_found={game.evidence_found}
                                        total_evidence={settings.total_evidence}
                                        collected={collected_ids}
                                        settings={settings.clone()}
                                        on_choice={handlers.choose.clone()}
                                        on_collect={handlers.collect.clone()}
                                        on_zoom={handlers.zoom.clone()}
                                        on_highlight={handlers.highlight.clone()}
                                        on_glitch={handlers.glitch.clone()}
                                        on_toggle_notes={handlers.toggle_notes.clone()} />
                            <nav class="page-nav">
                                <button id="prev-btn"
                                        disabled={prev_disabled}
                                        onclick={handlers.back.reform(|_: MouseEvent| ())}>
                                    { "Previous" }
                                </button>
                                <button id="next-btn"
                                        disabled={next_disabled}
                                        onclick={handlers.forward.reform(|_: MouseEvent| ())}>
                                    { "Next" }
                                </button>
                            </nav>
                        </>
                    },
                }
            }
            </div>

            <NotesPanel open={game.notes_open}
                        notes={game.notes.clone()}
                        evidence={game.collected.clone()}
                        on_add={handlers.add_note.clone()}
                        on_toggle={handlers.toggle_notes.clone()} />
        </div>
    }
}
