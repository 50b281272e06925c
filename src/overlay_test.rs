use super::*;

// =============================================================
// Visibility
// =============================================================

#[test]
fn visibility_default_is_hidden() {
    assert_eq!(Visibility::default(), Visibility::Hidden);
    assert!(!Visibility::default().is_shown());
}

#[test]
fn visibility_css_display_uses_shown_value() {
    assert_eq!(Visibility::Shown.css_display("flex"), "flex");
    assert_eq!(Visibility::Hidden.css_display("flex"), "none");
}

// =============================================================
// Transition
// =============================================================

#[test]
fn open_from_hidden_shows() {
    assert_eq!(Transition::Open.target(), Visibility::Shown);
}

#[test]
fn open_from_shown_stays_shown() {
    assert_eq!(Transition::Open.target(), Visibility::Shown);
}

#[test]
fn close_always_hides() {
    assert_eq!(Transition::Close.target(), Visibility::Hidden);
    assert_eq!(Transition::Close.target(), Visibility::Hidden);
}

#[test]
fn background_click_always_hides() {
    assert_eq!(Transition::BackgroundClick.target(), Visibility::Hidden);
    assert_eq!(Transition::BackgroundClick.target(), Visibility::Hidden);
}
