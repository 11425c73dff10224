use super::*;

#[test]
fn reveal_delay_grows_by_stagger_per_index() {
    let stagger = Duration::from_millis(100);
    assert_eq!(reveal_delay(0, stagger), Duration::ZERO);
    assert_eq!(reveal_delay(1, stagger), Duration::from_millis(100));
    assert_eq!(reveal_delay(5, stagger), Duration::from_millis(500));
}

#[test]
fn reveal_delay_saturates_on_huge_index() {
    let delay = reveal_delay(usize::MAX, Duration::from_secs(u64::MAX));
    assert_eq!(delay, Duration::MAX);
}

#[test]
fn animation_delay_style_uses_whole_milliseconds() {
    assert_eq!(animation_delay_style(Duration::from_millis(300)), "animation-delay: 300ms");
    assert_eq!(animation_delay_style(Duration::ZERO), "animation-delay: 0ms");
}
