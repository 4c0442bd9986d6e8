//! Integration tests for telemetry item construction

mod test_utils;

mod context_ownership;
mod request_telemetry;
mod timestamps;
