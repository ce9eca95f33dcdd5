#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gaugehub_core::protocol::{ErrorBody, KickEvent};
use gaugehub_core::GaugeHubError;

#[test]
fn error_body_carries_code_and_message() {
    let e = GaugeHubError::NotFound("cpu_usage".into());
    let body = ErrorBody::from(&e);
    assert_eq!(body.code, "NOT_FOUND");
    assert_eq!(body.message, "not found: cpu_usage");
}

#[test]
fn kick_event_is_tagged() {
    let ev = KickEvent::All { count: 3 };
    let json = serde_json::to_value(&ev).unwrap();
    assert_eq!(json["kind"], "all");
    assert_eq!(json["count"], 3);

    let ev: KickEvent = serde_json::from_str(r#"{"kind":"agent","id":"agent-1"}"#).unwrap();
    assert_eq!(ev, KickEvent::Agent { id: "agent-1".into() });
}
