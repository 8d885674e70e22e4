//! Toggle behaviour driven through the test harness.

use flipswitch_core::{AccessibleRole, Widget};
use flipswitch_test::Harness;
use flipswitch_widgets::{Icon, ToggleChanged, ToggleConfig, ToggleControl};
use std::sync::{Arc, Mutex};

fn recorded(config: ToggleConfig) -> (Harness<ToggleControl>, Arc<Mutex<Vec<bool>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let toggle = ToggleControl::new(config).on_toggle(move |on| sink.lock().unwrap().push(on));
    (Harness::new(toggle), calls)
}

#[test]
fn test_mounts_off_with_default_look() {
    let (harness, calls) = recorded(ToggleConfig::default());

    harness
        .assert_style("thumb", "transform", "translate(-10px)")
        .assert_style("thumb", "background-color", "#2FA8DD")
        .assert_style("thumb", "width", "25px")
        .assert_style("track", "background-color", "#2394c4")
        .assert_style("track-wrapper", "height", "1em")
        .assert_style("track-wrapper", "width", "34px")
        .assert_not_exists("icon")
        .assert_not_exists("tooltip");
    assert!(!harness.widget().is_selected());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_click_turns_on() {
    let (mut harness, calls) = recorded(ToggleConfig::default());

    harness.click("track");

    assert_eq!(*calls.lock().unwrap(), vec![true]);
    assert_eq!(
        harness.messages::<ToggleChanged>(),
        vec![ToggleChanged { on: true }]
    );
    harness
        .assert_style("thumb", "transform", "translate(20px)")
        .assert_style("thumb", "background-color", "#fff")
        .assert_style("track", "background-color", "#fafafa");
}

#[test]
fn test_second_click_turns_off() {
    let (mut harness, calls) = recorded(ToggleConfig::default());

    harness.click("track").click("track");

    assert_eq!(*calls.lock().unwrap(), vec![true, false]);
    harness
        .assert_style("thumb", "transform", "translate(-10px)")
        .assert_style("thumb", "background-color", "#2FA8DD")
        .assert_style("track", "background-color", "#2394c4");
}

#[test]
fn test_clicking_thumb_or_container_toggles() {
    let (mut harness, calls) = recorded(ToggleConfig::default());

    harness.click("thumb");
    harness.click("[data-testid='missing']");
    harness.click("container");

    assert_eq!(*calls.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_click_without_callback() {
    let mut harness = Harness::new(ToggleControl::default());
    harness.click("track-wrapper");
    assert!(harness.widget().is_selected());
    harness.assert_style("thumb", "transform", "translate(20px)");
}

#[test]
fn test_icons_follow_state() {
    let config = ToggleConfig::new()
        .thumb_off_icon(Icon::new("☾").label("moon"))
        .thumb_on_icon(Icon::new("☀").color("#f5a623"));
    let (mut harness, _) = recorded(config);

    harness.assert_count("thumb > icon", 1).assert_text("icon", "☾");
    assert_eq!(harness.widget().accessible_description(), Some("moon"));
    harness.click("track");
    harness
        .assert_text("icon", "☀")
        .assert_style("icon", "color", "#f5a623");
    assert_eq!(harness.widget().accessible_description(), None);
}

#[test]
fn test_single_icon_is_not_rendered() {
    for config in [
        ToggleConfig::new().thumb_on_icon(Icon::new("☀")),
        ToggleConfig::new().thumb_off_icon(Icon::new("☾")),
    ] {
        let (mut harness, _) = recorded(config);
        harness.assert_not_exists("icon");
        harness.click("track");
        harness.assert_not_exists("icon");
    }
}

#[test]
fn test_tooltip_reveals_on_hover() {
    let config = ToggleConfig::new().tooltip(true).tooltip_text("Flip me");
    let (mut harness, calls) = recorded(config);

    harness
        .assert_text("tooltip", "Flip me")
        .assert_style("tooltip", "visibility", "hidden")
        .assert_style("tooltip", "opacity", "0")
        .assert_style("tooltip", "margin", "39px 12px 0 20px");

    harness.hover("container");
    harness
        .assert_style("tooltip", "visibility", "visible")
        .assert_style("tooltip", "opacity", "1");

    // A revealed tooltip keeps the container hovered
    harness.hover("tooltip");
    harness.assert_style("tooltip", "visibility", "visible");

    harness.unhover();
    harness.assert_style("tooltip", "visibility", "hidden");

    harness.click("track");
    assert_eq!(*calls.lock().unwrap(), vec![true]);
}

#[test]
fn test_hidden_tooltip_is_inert() {
    let (mut harness, calls) = recorded(ToggleConfig::new().tooltip(true));

    harness.hover("tooltip");
    harness.assert_style("tooltip", "visibility", "hidden");

    harness.click("tooltip");
    assert!(calls.lock().unwrap().is_empty());
    assert!(harness.messages::<ToggleChanged>().is_empty());
}

#[test]
fn test_wrapper_hover_raises_thumb_shadow() {
    let mut harness = Harness::new(ToggleControl::default());
    harness.assert_style(
        "thumb",
        "box-shadow",
        "0 0 3px rgba(0, 0, 0, 0.12), 0 3px 6px rgba(0, 0, 0, 0.24)",
    );

    harness.hover("track-wrapper");
    harness.assert_style(
        "thumb",
        "box-shadow",
        "0 0 5px rgba(0, 0, 0, 0.16), 0 5px 10px rgba(0, 0, 0, 0.32)",
    );
}

#[test]
fn test_test_id_and_accessibility() {
    let toggle = ToggleControl::new(ToggleConfig::new().tooltip(true).tooltip_text("Dark mode"))
        .test_id("dark-mode");
    let harness = Harness::new(toggle);

    harness
        .assert_exists("[data-testid='dark-mode']")
        .assert_exists("[data-testid='dark-mode'] > track-wrapper > track > thumb");
    assert_eq!(harness.widget().accessible_role(), AccessibleRole::Switch);
    assert_eq!(Widget::accessible_name(harness.widget()), Some("Dark mode"));
}

#[test]
fn test_paint_follows_state() {
    let mut harness = Harness::new(ToggleControl::default());
    let off = harness.paint();
    harness.click("track");
    let on = harness.paint();

    assert_eq!(off.command_count(), 2);
    assert_eq!(on.command_count(), 2);
    assert_ne!(off.commands()[0], on.commands()[0]);
    assert_ne!(off.commands()[1], on.commands()[1]);
}
