use querystats_domain::{DomainError, StatusMapping, Verdict};

#[test]
fn test_pihole_ftl_mapping() {
    let mapping = StatusMapping::pihole_ftl();

    for status in [2, 3, 12, 13, 14, 17] {
        assert_eq!(mapping.verdict_for(status), Some(Verdict::Allowed), "{status}");
    }
    for status in [1, 4, 5, 6, 7, 8, 9, 10, 11, 15, 16, 18] {
        assert_eq!(mapping.verdict_for(status), Some(Verdict::Blocked), "{status}");
    }
    assert_eq!(mapping.verdict_for(0), None);
    assert_eq!(mapping.verdict_for(99), None);
}

#[test]
fn test_default_is_pihole_ftl() {
    assert_eq!(StatusMapping::default(), StatusMapping::pihole_ftl());
}

#[test]
fn test_custom_mapping() {
    let mapping = StatusMapping::new(&[0], &[1]).unwrap();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.verdict_for(0), Some(Verdict::Allowed));
    assert_eq!(mapping.verdict_for(2), None);
    assert_eq!(mapping.statuses(Verdict::Blocked), vec![1]);
}

#[test]
fn test_overlapping_status_rejected() {
    let result = StatusMapping::new(&[2, 3], &[3]);
    assert!(matches!(result, Err(DomainError::InvalidStatusMapping(_))));
}

#[test]
fn test_empty_mapping() {
    let mapping = StatusMapping::new(&[], &[]).unwrap();
    assert!(mapping.is_empty());
}
