//! Request items: identifiers, start time and duration encoding.

use std::collections::HashSet;

use appinsights::{RequestTelemetry, Telemetry};
use chrono::{FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};

use super::test_utils::{deterministic_factory, is_canonical_uuid};

#[test]
fn get_home_end_to_end() {
    let t0 = Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_nano_opt(17, 45, 3, 987_654_321)
            .unwrap(),
    );
    let item = RequestTelemetry::new("GET /home", t0, TimeDelta::seconds(90), "200", true);
    let data = item.data();

    assert_eq!(item.base_type_name(), "Request");
    assert_eq!(data.name(), "GET /home");
    assert_eq!(data.duration(), "00.00:01:30.0000");
    assert_eq!(data.response_code(), "200");
    assert!(data.success());
    assert_eq!(data.start_time(), "2024-02-29T17:45:03.987654321Z");
    assert_eq!(data.ver(), 2);
}

#[test]
fn generated_ids_are_canonical_and_unique() {
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let item = RequestTelemetry::new("GET /", Utc::now(), TimeDelta::zero(), "200", true);
        let id = item.data().id().to_string();
        assert!(is_canonical_uuid(&id), "not canonical: {}", id);
        assert!(seen.insert(id), "duplicate request id");
    }
}

#[test]
fn injected_id_source_is_used_once_per_request() {
    let (factory, _) = deterministic_factory();
    let ids: Vec<String> = (0..3)
        .map(|_| {
            factory
                .request("POST /jobs", Utc::now(), TimeDelta::zero(), "202", true)
                .data()
                .id()
                .to_string()
        })
        .collect();
    assert_eq!(
        ids,
        [
            "00000000-0000-0000-0000-000000000001",
            "00000000-0000-0000-0000-000000000002",
            "00000000-0000-0000-0000-000000000003",
        ]
    );
    // Building other variants does not consume ids.
    factory.event("noise");
    let next = factory.request("GET /", Utc::now(), TimeDelta::zero(), "200", true);
    assert_eq!(next.data().id(), "00000000-0000-0000-0000-000000000004");
}

#[test]
fn start_time_keeps_caller_offset() {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let start = offset.with_ymd_and_hms(2024, 7, 4, 9, 30, 0).unwrap();
    let item = RequestTelemetry::new("GET /", start, TimeDelta::zero(), "200", true);
    assert_eq!(item.data().start_time(), "2024-07-04T09:30:00-05:00");
}

#[test]
fn long_and_failed_request() {
    let duration = TimeDelta::days(1)
        + TimeDelta::hours(2)
        + TimeDelta::minutes(3)
        + TimeDelta::seconds(4)
        + TimeDelta::microseconds(5000);
    let item = RequestTelemetry::new("GET /report", Utc::now(), duration, "504", false);
    assert_eq!(item.data().duration(), "01.02:03:04.5000");
    assert_eq!(item.data().response_code(), "504");
    assert!(!item.data().success());
}

#[test]
fn request_payload_wire_shape() {
    let (factory, _) = deterministic_factory();
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let item = factory.request("GET /", start, TimeDelta::zero(), "", true);
    let value = serde_json::to_value(item.base_data()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "ver": 2,
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "GET /",
            "startTime": "2024-01-01T00:00:00Z",
            "duration": "00.00:00:00.0000",
            "responseCode": "",
            "success": true
        })
    );
}
