//! Server-side render checks for the top-level app shell.

use futures::executor::block_on;
use greybridge_web::app::App;
use yew::LocalServerRenderer;

#[test]
fn app_boots_to_the_cover() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("ECHOES OF GREYBRIDGE"), "title: {html}");
    assert!(html.contains("CASE FILE #37"), "cover card: {html}");
    assert!(
        html.contains("Click to begin investigation"),
        "cover prompt: {html}"
    );
    assert!(
        !html.contains("choice-btn"),
        "no choices before the book opens: {html}"
    );
}

#[test]
fn notes_panel_ships_with_the_initial_observations() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("INVESTIGATION NOTES"), "panel header: {html}");
    assert!(
        html.contains("04/15/2025 - 09:43"),
        "initial note timestamp: {html}"
    );
    assert!(
        html.contains("Assignment Brief"),
        "initial evidence: {html}"
    );
}

#[test]
fn static_overlay_is_present_but_idle() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("static-overlay"), "overlay exists: {html}");
    assert!(
        !html.contains("static-overlay active"),
        "overlay idle at boot: {html}"
    );
}
