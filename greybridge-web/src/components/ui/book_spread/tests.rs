use super::*;
use futures::executor::block_on;
use greybridge_story::{GameState, StoryData};
use yew::LocalServerRenderer;

fn story() -> StoryData {
    StoryData::from_json(
        r#"{
            "settings": { "total_evidence": 2 },
            "entries": [
                {
                    "id": "001",
                    "title": "The Forest Road",
                    "left_image": "forest-road",
                    "content": [ { "text": "It's [waiting]." } ],
                    "evidence": [
                        { "id": "ev-001-1",
                          "position": { "top": "25%", "left": "15%" },
                          "description": "Car door left open." },
                        { "id": "ev-001-2",
                          "position": { "top": "45%", "left": "65%" },
                          "description": "Broken side mirror.",
                          "pulsing": true }
                    ],
                    "choices": [
                        { "text": "Press on", "next": "002", "flag": "brave" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap()
}

fn props(turning: bool, collected: Vec<String>) -> Props {
    let story = story();
    let mut state = GameState::default();
    state.visited = vec!["001".into()];
    state.current = Some("001".into());
    state.current_index = Some(0);
    let view = build_spread_viewmodel(story.page("001").unwrap(), &state);
    Props {
        view,
        turning,
        glitch_active: false,
        evidence_found: collected.len() as u32,
        total_evidence: story.settings.total_evidence,
        collected,
        settings: story.settings,
        on_choice: Callback::noop(),
        on_collect: Callback::noop(),
        on_zoom: Callback::noop(),
        on_highlight: Callback::noop(),
        on_glitch: Callback::noop(),
        on_toggle_notes: Callback::noop(),
    }
}

#[test]
fn spread_renders_markers_and_counter() {
    let html = block_on(LocalServerRenderer::<BookSpread>::with_props(props(false, vec![])).render());
    assert!(
        html.contains("data-evidence-id=\"ev-001-1\""),
        "marker ids render: {html}"
    );
    assert!(html.contains("pulsing"), "pulsing marker class: {html}");
    assert!(html.contains("0/2"), "counter shows found/total: {html}");
    assert!(
        html.contains("/images/forest-road.jpg"),
        "left image path: {html}"
    );
}

#[test]
fn collected_markers_stop_pulsing_and_read_found() {
    let html = block_on(
        LocalServerRenderer::<BookSpread>::with_props(props(false, vec!["ev-001-2".into()]))
            .render(),
    );
    assert!(html.contains("found"), "found class: {html}");
    assert!(!html.contains("pulsing"), "found markers stop pulsing: {html}");
    assert!(html.contains("1/2"), "counter counts the find: {html}");
}

#[test]
fn choices_are_disabled_while_turning() {
    let idle = block_on(LocalServerRenderer::<BookSpread>::with_props(props(false, vec![])).render());
    assert!(!idle.contains("disabled"), "idle buttons enabled: {idle}");

    let turning = block_on(LocalServerRenderer::<BookSpread>::with_props(props(true, vec![])).render());
    assert!(turning.contains("disabled"), "turning disables: {turning}");
    assert!(
        turning.contains("page-animating"),
        "turn animation class: {turning}"
    );
}
