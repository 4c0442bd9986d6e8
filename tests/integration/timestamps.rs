//! Item timestamps come from the clock at construction time.

use appinsights::{
    EventTelemetry, MetricTelemetry, RequestTelemetry, SeverityLevel, Telemetry, TraceTelemetry,
};
use chrono::{TimeDelta, TimeZone, Utc};

use super::test_utils::{deterministic_factory, epoch_2024};

#[test]
fn wall_clock_timestamp_falls_inside_the_call_window() {
    let before = Utc::now();
    let items: Vec<Box<dyn Telemetry>> = vec![
        Box::new(TraceTelemetry::new("t", SeverityLevel::Warning)),
        Box::new(EventTelemetry::new("e")),
        Box::new(MetricTelemetry::new("m", 2.0)),
        Box::new(RequestTelemetry::new(
            "r",
            Utc::now(),
            TimeDelta::milliseconds(5),
            "200",
            true,
        )),
    ];
    let after = Utc::now();

    for item in &items {
        assert!(
            item.timestamp() >= before && item.timestamp() <= after,
            "{} timestamp {} outside [{}, {}]",
            item.base_type_name(),
            item.timestamp(),
            before,
            after
        );
    }
}

#[test]
fn timestamp_is_fixed_at_construction() {
    let (factory, clock) = deterministic_factory();
    let item = factory.event("early");
    clock.set(epoch_2024() + TimeDelta::hours(5));
    assert_eq!(item.timestamp(), epoch_2024());

    let later = factory.event("late");
    assert_eq!(later.timestamp(), epoch_2024() + TimeDelta::hours(5));
}

#[test]
fn request_start_time_is_independent_of_item_timestamp() {
    let (factory, _) = deterministic_factory();
    let start = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
    let item = factory.request("GET /old", start, TimeDelta::seconds(2), "200", true);
    assert_eq!(item.timestamp(), epoch_2024());
    assert_eq!(item.data().start_time(), "1999-12-31T23:59:59Z");
}
