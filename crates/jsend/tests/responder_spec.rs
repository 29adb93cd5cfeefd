use jsend::*;
use serde_json::{json, Value};
use std::sync::Mutex;

#[derive(Default)]
struct RecordingSink {
    calls: Mutex<Vec<(u16, Value)>>,
}

impl RecordingSink {
    fn calls(&self) -> Vec<(u16, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ResponseSink for RecordingSink {
    fn send_json(&self, status: u16, body: Value) -> Result<(), SinkError> {
        self.calls.lock().unwrap().push((status, body));
        Ok(())
    }
}

struct RejectingSink;

impl ResponseSink for RejectingSink {
    fn send_json(&self, _status: u16, _body: Value) -> Result<(), SinkError> {
        Err(SinkError::new("connection closed"))
    }
}

#[test]
fn given_success_envelope_without_status_when_sending_then_forwards_200() {
    let sink = RecordingSink::default();
    let responder = JSend::lenient().responder(&sink);

    responder
        .send(json!({"status": "success", "data": {"id": 1}}), None)
        .expect("Should send");

    assert_eq!(
        sink.calls(),
        vec![(200, json!({"status": "success", "data": {"id": 1}}))]
    );
}

#[test]
fn given_fail_envelope_with_explicit_status_when_sending_then_status_overrides_default() {
    let sink = RecordingSink::default();
    let responder = JSend::lenient().responder(&sink);

    responder
        .send(json!({"status": "fail", "data": "bad input"}), Some(422))
        .expect("Should send");

    assert_eq!(
        sink.calls(),
        vec![(422, json!({"status": "fail", "data": "bad input"}))]
    );
}

#[test]
fn given_error_envelope_without_status_when_sending_then_forwards_500() {
    let sink = RecordingSink::default();
    let responder = JSend::lenient().responder(&sink);

    responder
        .send(json!({"status": "error", "message": "boom"}), None)
        .expect("Should send");

    assert_eq!(sink.calls()[0].0, 500);
}

#[test]
fn given_bogus_envelope_when_sending_then_sink_is_never_invoked() {
    let sink = RecordingSink::default();
    let responder = JSend::lenient().responder(&sink);

    let err = responder
        .send(json!({"status": "bogus"}), None)
        .expect_err("Should reject");

    assert!(matches!(
        err,
        SendError::Unclassified(ValidationError::UnknownStatus(ref s)) if s == "bogus"
    ));
    assert!(sink.calls().is_empty());
}

#[test]
fn given_bogus_envelope_when_sending_with_legacy_compat_then_silently_drops() {
    let sink = RecordingSink::default();
    let responder = JSend::lenient()
        .with_compat(Compat::legacy())
        .responder(&sink);

    responder
        .send(json!({"status": "bogus"}), Some(200))
        .expect("Legacy send never fails");

    assert!(sink.calls().is_empty());
}

#[test]
fn given_lenient_extra_keys_when_sending_then_candidate_is_forwarded_unchanged() {
    let sink = RecordingSink::default();
    let responder = JSend::strict().responder(&sink);
    let candidate = json!({"status": "success", "data": 1, "request_id": "r-1"});

    responder.send(candidate.clone(), None).expect("Should send");

    assert_eq!(sink.calls(), vec![(200, candidate)]);
}

#[test]
fn given_helpers_when_sending_then_default_buckets_apply() {
    let sink = RecordingSink::default();
    let responder = JSend::lenient().responder(&sink);

    responder.send_success(json!([1, 2]), None).unwrap();
    responder.send_fail(json!({"email": "taken"}), None).unwrap();
    responder.send_error("db down", None).unwrap();

    assert_eq!(
        sink.calls(),
        vec![
            (200, json!({"status": "success", "data": [1, 2]})),
            (400, json!({"status": "fail", "data": {"email": "taken"}})),
            (500, json!({"status": "error", "message": "db down"})),
        ]
    );
}

#[test]
fn given_helpers_with_explicit_status_when_sending_then_status_is_used() {
    let sink = RecordingSink::default();
    let responder = JSend::lenient().responder(&sink);

    responder.send_success(Value::Null, Some(201)).unwrap();
    responder.send_fail("conflict", Some(409)).unwrap();
    responder
        .send_error(ErrorDetails::new("unavailable").code(17), Some(503))
        .unwrap();

    let statuses: Vec<u16> = sink.calls().into_iter().map(|(s, _)| s).collect();
    assert_eq!(statuses, vec![201, 409, 503]);
    assert_eq!(sink.calls()[2].1["code"], 17);
}

#[test]
fn given_failing_sink_when_sending_then_error_is_surfaced() {
    let responder = JSend::lenient().responder(RejectingSink);

    let err = responder.send_success(1, None).expect_err("Should fail");

    assert!(matches!(err, SendError::Sink(_)));
    assert!(err.to_string().contains("connection closed"));
}

#[test]
fn given_owned_sink_when_sending_then_calls_are_visible_through_responder() {
    let responder = JSend::strict().responder(RecordingSink::default());

    responder
        .send(json!({"status": "success", "data": 1, "trace": "abc"}), None)
        .expect("Should send");
    responder
        .send_fail(json!({"id": "required"}), None)
        .expect("Should send");

    assert_eq!(
        responder.sink().calls(),
        vec![
            (200, json!({"status": "success", "data": 1, "trace": "abc"})),
            (400, json!({"status": "fail", "data": {"id": "required"}})),
        ]
    );
}
