//! Scripted playthrough over the shipped story content.

use greybridge_story::{
    EvidenceOutcome, FixedClock, LocalStamp, StoryData, StoryError, StorySession,
};

fn session() -> StorySession<FixedClock> {
    let story = StoryData::from_json(include_str!(
        "../../greybridge-web/static/assets/data/story.json"
    ))
    .expect("shipped story parses");
    StorySession::new(
        story,
        0x6E47_B00C,
        FixedClock(LocalStamp::new(2025, 4, 15, 9, 43)),
    )
}

#[test]
fn a_full_investigation_reaches_the_ending() {
    let mut session = session();

    session.begin().expect("the book opens");
    session.finish_turn();
    assert_eq!(session.state().current.as_deref(), Some("intro"));

    // Take the procedural route to the police station.
    let choice = session
        .current_page()
        .and_then(|page| match page {
            greybridge_story::Page::Entry(entry) => entry.choices.first().cloned(),
            greybridge_story::Page::Ending(_) => None,
        })
        .expect("intro offers choices");
    let pending = session.choose(&choice).expect("idle choice resolves");
    assert_eq!(pending.next, "police-station");
    assert_eq!(session.state().flags, ["procedural"]);

    session.open_page(&pending.next).unwrap();
    session.finish_turn();

    // Pick up the radio evidence, then follow the static to the radio room.
    let outcome = session.collect_evidence("ev-radio").unwrap();
    assert!(matches!(outcome, EvidenceOutcome::Collected { .. }));
    assert_eq!(session.state().evidence_found, 1);

    session.open_page("dispatch-radio").unwrap();
    session.finish_turn();

    session.open_page("ending-a").unwrap();
    session.finish_turn();
    let page = session.current_page().expect("ending resolves");
    assert!(page.is_ending());
    assert_eq!(page.title(), "The Book Closes");

    assert_eq!(
        session.state().visited,
        ["intro", "police-station", "dispatch-radio", "ending-a"]
    );
    assert_eq!(session.state().current_index, Some(3));
}

#[test]
fn dangling_choice_targets_fail_at_navigation_time() {
    let mut session = session();
    session.begin().unwrap();
    session.finish_turn();
    session.open_page("police-station").unwrap();
    session.finish_turn();

    // "Look through the personal desk of Chief Thomas" was never authored.
    let before = session.state().clone();
    let err = session.open_page("chief-desk").unwrap_err();
    assert_eq!(err, StoryError::UnknownPage("chief-desk".into()));
    assert_eq!(*session.state(), before);
}

#[test]
fn initial_items_are_present_before_the_first_page() {
    let session = session();
    let state = session.state();
    assert_eq!(state.collected.len(), 2);
    assert_eq!(state.collected[0].id, "ev-initial-1");
    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.evidence_found, 0, "initial evidence is not a find");
}

#[test]
fn backtracking_then_diverging_appends_to_history() {
    let mut session = session();
    session.begin().unwrap();
    session.finish_turn();
    session.open_page("newspaper").unwrap();
    session.finish_turn();

    session.back().expect("intro is behind us");
    session.finish_turn();
    assert_eq!(session.state().current.as_deref(), Some("intro"));

    session.open_page("town-hall").unwrap();
    session.finish_turn();
    assert_eq!(
        session.state().visited,
        ["intro", "newspaper", "town-hall"],
        "divergence appends; history is never rewritten"
    );
    assert_eq!(session.state().current_index, Some(2));

    // Forward replay now walks the recorded order.
    session.back().expect("newspaper is behind us");
    session.finish_turn();
    assert_eq!(session.state().current.as_deref(), Some("newspaper"));
    session.forward().expect("town hall is ahead");
    session.finish_turn();
    assert_eq!(session.state().current.as_deref(), Some("town-hall"));
}
