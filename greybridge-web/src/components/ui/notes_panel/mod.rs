
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use greybridge_story::{EvidenceRecord, Note};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub open: bool,
    /// Newest first; the feed renders in the order given.
    pub notes: Vec<Note>,
    pub evidence: Vec<EvidenceRecord>,
    pub on_add: Callback<String>,
    pub on_toggle: Callback<()>,
}

/// Sliding investigation panel: notes feed, collected evidence, and the
/// note composer. Enter submits; Shift+Enter keeps typing.
#[function_component(NotesPanel)]
pub fn notes_panel(p: &Props) -> Html {
    let draft = use_state(String::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(area.value());
        })
    };

    let submit = {
        let draft = draft.clone();
        let on_add = p.on_add.clone();
        Callback::from(move |()| {
            on_add.emit((*draft).clone());
            draft.set(String::new());
        })
    };

    let onkeydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                submit.emit(());
            }
        })
    };

    let close = p.on_toggle.reform(|_: MouseEvent| ());
    let add = submit.reform(|_: MouseEvent| ());

    html! {
        <aside class={classes!("notes-panel", p.open.then_some("active"))}>
            <header class="notes-header">
                <h3>{ "INVESTIGATION NOTES" }</h3>
                <button class="notes-close" onclick={close}>{ "×" }</button>
            </header>
            <div class="notes-content">
                {
                    p.notes.iter().map(|note| html! {
                        <div class="note-item">
                            <div class="note-timestamp">{ note.timestamp.clone() }</div>
                            <div class="note-text">{ note.text.clone() }</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <section class="evidence-list">
                <h4>{ "COLLECTED EVIDENCE" }</h4>
                {
                    p.evidence.iter().map(|record| html! {
                        <div class="evidence-item">
                            <div class="evidence-title">{ record.title.clone() }</div>
                            <div class="evidence-text">{ record.content.clone() }</div>
                        </div>
                    }).collect::<Html>()
                }
            </section>
            <footer class="notes-composer">
                <textarea class="notes-textarea"
                          placeholder="Record an observation..."
                          value={(*draft).clone()}
                          {oninput}
                          {onkeydown}>
                </textarea>
                <button class="add-note-btn" onclick={add}>{ "Add note" }</button>
            </footer>
        </aside>
    }
}
