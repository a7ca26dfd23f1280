// Host-side tests for the pure helpers of the web front-end.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod css {
    include!("../src/css.rs");
}
mod keymap {
    include!("../src/keymap.rs");
}

use keymap::*;

#[test]
fn shortcuts_map_scene_and_zoom_keys() {
    assert_eq!(shortcut_for_key("k"), Some(Shortcut::Kiss));
    assert_eq!(shortcut_for_key("K"), Some(Shortcut::Kiss));
    assert_eq!(shortcut_for_key("s"), Some(Shortcut::Search));
    assert_eq!(shortcut_for_key("0"), Some(Shortcut::ResetZoom));
    assert_eq!(shortcut_for_key("Enter"), None);
    assert_eq!(shortcut_for_key(""), None);
}

#[test]
fn heart_transform_formats_css() {
    assert_eq!(
        css::heart_flight_transform(-12.34, -400.0, 1.5, 90.0),
        "translate(-12.3px, -400.0px) scale(1.500) rotate(90.0deg)"
    );
    assert_eq!(css::px(80.0), "80.0px");
}

#[test]
fn default_rotation_is_a_supported_quarter_turn() {
    let rotation = kisscam_core::Rotation::try_from(constants::DEFAULT_ROTATION_DEG).unwrap();
    assert!(rotation.is_quarter_turn());
    assert_eq!(constants::VIDEO_READY_STATE, 2);
}
