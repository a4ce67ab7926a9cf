use super::*;
use std::collections::HashSet;

#[test]
fn sequential_ids_count_up_from_one() {
    let ids = SequentialIds::new();
    assert_eq!(ids.next_id(), "n1");
    assert_eq!(ids.next_id(), "n2");
    assert_eq!(ids.next_id(), "n3");
}

#[test]
fn uuid_ids_are_prefixed_and_unique() {
    let ids = UuidIds;
    let generated: HashSet<String> = (0..256).map(|_| ids.next_id()).collect();
    assert_eq!(generated.len(), 256);
    assert!(generated.iter().all(|id| id.starts_with('n') && id.len() == 37));
}
