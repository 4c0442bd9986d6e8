//! Property-based tests for item construction invariants

use appinsights::{ItemFactory, SeverityLevel, Telemetry, SCHEMA_VERSION};
use chrono::{TimeDelta, Utc};
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = SeverityLevel> {
    prop_oneof![
        Just(SeverityLevel::Verbose),
        Just(SeverityLevel::Information),
        Just(SeverityLevel::Warning),
        Just(SeverityLevel::Error),
        Just(SeverityLevel::Critical),
    ]
}

proptest! {
    #[test]
    fn trace_is_always_message_v2(message in ".*", level in severity()) {
        let item = ItemFactory::system().trace(message.clone(), level);
        prop_assert_eq!(item.base_type_name(), "Message");
        prop_assert_eq!(item.base_data().version(), SCHEMA_VERSION);
        prop_assert_eq!(item.data().message(), message.as_str());
    }

    #[test]
    fn metric_point_matches_inputs(name in "[a-z_]{0,24}", value in any::<f32>()) {
        let item = ItemFactory::system().metric(name.clone(), value);
        let points = item.data().metrics();
        prop_assert_eq!(points.len(), 1);
        prop_assert_eq!(points[0].name(), name.as_str());
        prop_assert_eq!(points[0].value().to_bits(), value.to_bits());
        prop_assert_eq!(points[0].count(), 1);
    }

    #[test]
    fn request_echoes_caller_fields(
        name in ".{0,40}",
        code in "[0-9]{3}",
        success in any::<bool>(),
        millis in 0i64..10_000_000,
    ) {
        let item = ItemFactory::system().request(
            name.clone(),
            Utc::now(),
            TimeDelta::milliseconds(millis),
            code.clone(),
            success,
        );
        prop_assert_eq!(item.data().name(), name.as_str());
        prop_assert_eq!(item.data().response_code(), code.as_str());
        prop_assert_eq!(item.data().success(), success);
        prop_assert_eq!(item.data().id().len(), 36);
    }
}
