use super::*;

#[test]
fn levels_are_ordered() {
    assert!(ConsentLevel::StrictlyNecessary < ConsentLevel::Functionality);
    assert!(ConsentLevel::Functionality < ConsentLevel::Performance);
    assert!(ConsentLevel::Performance < ConsentLevel::Targeting);
}

#[test]
fn strictly_necessary_is_implicit() {
    let set = ConsentSet::default();
    assert!(set.allows(ConsentLevel::StrictlyNecessary));
    assert!(!set.allows(ConsentLevel::Functionality));
}

#[test]
fn default_consent_grants_functionality() {
    let set: ConsentSet = DEFAULT_CONSENT.into_iter().collect();
    assert!(set.allows(ConsentLevel::Functionality));
    assert!(!set.allows(ConsentLevel::Targeting));
}

#[test]
fn transitions_lists_changed_levels_only() {
    let before = ConsentSet::new([ConsentLevel::Functionality, ConsentLevel::Performance]);
    let after = ConsentSet::new([ConsentLevel::StrictlyNecessary, ConsentLevel::Performance, ConsentLevel::Targeting]);

    let changed: Vec<_> = before.transitions(&after).into_iter().collect();
    assert_eq!(changed, vec![ConsentLevel::Functionality, ConsentLevel::Targeting]);
}

#[test]
fn level_serializes_screaming_snake() {
    let json = serde_json::to_string(&ConsentLevel::StrictlyNecessary).unwrap();
    assert_eq!(json, "\"STRICTLY_NECESSARY\"");
}
