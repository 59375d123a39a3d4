mod helpers;

use chrono::Weekday;
use helpers::{ts, RawRowBuilder};
use querystats_domain::{DomainError, StatusMapping, Verdict};
use std::time::Duration;

#[test]
fn test_into_record_classifies_allowed() {
    let record = RawRowBuilder::new()
        .build()
        .into_record(&StatusMapping::pihole_ftl())
        .unwrap();

    assert_eq!(record.verdict, Verdict::Allowed);
    assert_eq!(&*record.domain, "example.com");
    assert_eq!(&*record.client, "192.168.1.10");
    assert_eq!(record.reply_time, Some(Duration::from_millis(2)));
}

#[test]
fn test_into_record_classifies_gravity_block() {
    let record = RawRowBuilder::new()
        .status(Some(1))
        .build()
        .into_record(&StatusMapping::pihole_ftl())
        .unwrap();

    assert!(record.is_blocked());
}

#[test]
fn test_into_record_rejects_unmapped_status() {
    let result = RawRowBuilder::new()
        .status(Some(0))
        .build()
        .into_record(&StatusMapping::pihole_ftl());

    assert_eq!(result, Err(DomainError::InvalidVerdict(0)));
}

#[test]
fn test_into_record_rejects_missing_fields() {
    let mapping = StatusMapping::pihole_ftl();
    let rows = [
        RawRowBuilder::new().timestamp(None).build(),
        RawRowBuilder::new().domain(None).build(),
        RawRowBuilder::new().client(None).build(),
        RawRowBuilder::new().status(None).build(),
    ];

    for row in rows {
        assert!(matches!(
            row.into_record(&mapping),
            Err(DomainError::MalformedRecord(_))
        ));
    }
}

#[test]
fn test_into_record_rejects_blank_domain() {
    let result = RawRowBuilder::new()
        .domain(Some("   "))
        .build()
        .into_record(&StatusMapping::pihole_ftl());

    assert_eq!(
        result,
        Err(DomainError::MalformedRecord("empty domain".to_string()))
    );
}

#[test]
fn test_into_record_drops_invalid_reply_time() {
    let mapping = StatusMapping::pihole_ftl();
    for reply_time in [-1.0, f64::NAN, f64::INFINITY] {
        let record = RawRowBuilder::new()
            .reply_time(Some(reply_time))
            .build()
            .into_record(&mapping)
            .unwrap();
        assert_eq!(record.reply_time, None);
    }
}

#[test]
fn test_record_calendar_fields_follow_offset() {
    let record = RawRowBuilder::new()
        .timestamp(Some(ts("2024-01-06T23:30:00-05:00")))
        .build()
        .into_record(&StatusMapping::pihole_ftl())
        .unwrap();

    assert_eq!(record.hour(), 23);
    assert_eq!(record.weekday(), Weekday::Sat);
    assert_eq!(record.date().to_string(), "2024-01-06");
}

#[test]
fn test_verdict_display() {
    assert_eq!(Verdict::Allowed.to_string(), "allowed");
    assert_eq!(Verdict::Blocked.to_string(), "blocked");
    assert_eq!(serde_json::to_string(&Verdict::Blocked).unwrap(), "\"blocked\"");
}
