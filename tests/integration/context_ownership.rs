//! Each item owns a distinct context.

use appinsights::context::tag_keys;
use appinsights::providers::ContextProvider;
use appinsights::{EventTelemetry, ItemFactory, Telemetry, TelemetryContext};
use std::sync::atomic::{AtomicU64, Ordering};

#[test]
fn sequential_items_never_share_a_context() {
    let first = EventTelemetry::new("a");
    let second = EventTelemetry::new("a");
    assert!(!std::ptr::eq(first.context(), second.context()));
    // Same contents, separate instances.
    assert_eq!(first.context(), second.context());
}

/// Stamps each context with a serial number so instances can be told apart.
#[derive(Default)]
struct SerialContexts(AtomicU64);

impl ContextProvider for SerialContexts {
    fn new_context(&self) -> TelemetryContext {
        let serial = self.0.fetch_add(1, Ordering::SeqCst);
        let mut context = TelemetryContext::new();
        context.insert_tag(tag_keys::OPERATION_ID, serial.to_string());
        context
    }
}

#[test]
fn provider_is_consulted_once_per_item() {
    let factory = ItemFactory::new().with_context_provider(SerialContexts::default());
    let a = factory.trace("x", Default::default());
    let b = factory.metric("y", 1.0);
    let c = factory.event("z");

    let serials: Vec<&str> = [a.context(), b.context(), c.context()]
        .into_iter()
        .map(|ctx| ctx.tag(tag_keys::OPERATION_ID).unwrap())
        .collect();
    assert_eq!(serials, ["0", "1", "2"]);
}

#[test]
fn cloned_item_gets_its_own_copy() {
    let original = EventTelemetry::new("clone-me");
    let copy = original.clone();
    assert_eq!(original, copy);
    assert!(!std::ptr::eq(original.context(), copy.context()));
}
