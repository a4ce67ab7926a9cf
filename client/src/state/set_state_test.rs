use super::*;

#[test]
fn value_variant_ignores_current() {
    assert_eq!(SetState::Value(3).apply(&10), 3);
}

#[test]
fn update_variant_reads_current() {
    assert!(!SetState::update(|open: &bool| !open).apply(&true));
}

#[test]
fn from_value_builds_replacement() {
    let next: SetState<Option<&str>> = Some("panel").into();
    assert_eq!(next.apply(&None), Some("panel"));
}
