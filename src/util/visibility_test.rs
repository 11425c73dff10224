use super::*;

#[test]
fn visibility_default_is_shown() {
    assert_eq!(Visibility::default(), Visibility::Shown);
}

#[test]
fn display_maps_to_block_and_none() {
    assert_eq!(Visibility::Shown.display(), "block");
    assert_eq!(Visibility::Hidden.display(), "none");
}

#[test]
fn from_shown_round_trips_flag() {
    assert!(Visibility::from_shown(true).is_shown());
    assert!(!Visibility::from_shown(false).is_shown());
}
