use yew::prelude::*;

use greybridge_story::{BlockKind, ContentBlock, Settings, TextSpan, scan_spans};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub blocks: Vec<ContentBlock>,
    pub settings: Settings,
    pub glitch_active: bool,
    pub on_highlight: Callback<String>,
    pub on_glitch: Callback<()>,
}

/// Right-page text. Bracketed spans become clickable highlights; spans
/// carrying a static trigger word are also glitch-triggering.
#[function_component(StoryText)]
pub fn story_text(p: &Props) -> Html {
    html! {
        <div class="story-text">
            { p.blocks.iter().map(|block| render_block(block, p)).collect::<Html>() }
        </div>
    }
}

fn render_block(block: &ContentBlock, p: &Props) -> Html {
    let spans = scan_spans(&block.text, &p.settings);
    let glitching =
        p.glitch_active && spans.iter().any(|span| matches!(span, TextSpan::Highlight { glitchy: true, .. }));
    let body = spans
        .iter()
        .map(|span| render_span(span, p))
        .collect::<Html>();

    match block.kind {
        BlockKind::Header => html! {
            <p class="story-header"><b>{ body }</b></p>
        },
        BlockKind::Special => html! {
            <p class={classes!("story-special", glitching.then_some("glitch-active"))}>{ body }</p>
        },
        BlockKind::Paragraph => html! {
            <p class={classes!("story-paragraph", glitching.then_some("glitch-active"))}>{ body }</p>
        },
    }
}

fn render_span(span: &TextSpan, p: &Props) -> Html {
    match span {
        TextSpan::Plain(text) => html! { <span>{ text.clone() }</span> },
        TextSpan::Highlight { text, glitchy } => {
            let glitchy = *glitchy;
            let label = text.clone();
            let on_highlight = p.on_highlight.clone();
            let on_glitch = p.on_glitch.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                on_highlight.emit(label.clone());
                if glitchy {
                    on_glitch.emit(());
                }
            });
            html! {
                <span class={classes!("highlightable", glitchy.then_some("glitch-text"))}
                      data-text={text.clone()}
                      {onclick}>
                    { text.clone() }
                </span>
            }
        }
    }
}
