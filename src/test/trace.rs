use crate::trace::{TraceEvent, TraceEventKind, TraceLogger, TracePhase};

#[test]
fn trace_event_serializes_flat_with_kind_tag() {
    let ev = TraceEvent {
        t_ns: 53_000_000_000,
        kind: TraceEventKind::Departure {
            arrival_ns: 1_000_000_000,
            wait_s: 52.0,
            queue_len: 2,
        },
    };
    let v: serde_json::Value = serde_json::to_value(&ev).expect("serialize");
    assert_eq!(v["kind"], "departure");
    assert_eq!(v["t_ns"], 53_000_000_000u64);
    assert_eq!(v["queue_len"], 2);

    let back: TraceEvent = serde_json::from_value(v).expect("deserialize");
    assert_eq!(back, ev);
}

#[test]
fn green_windows_pair_green_with_following_phase_change() {
    let mut t = TraceLogger::default();
    t.push(0, TraceEventKind::Phase { phase: TracePhase::Red });
    t.push(10, TraceEventKind::Phase { phase: TracePhase::Yellow });
    t.push(12, TraceEventKind::Phase { phase: TracePhase::Green });
    t.push(13, TraceEventKind::Arrival { queue_len: 1 });
    t.push(20, TraceEventKind::Phase { phase: TracePhase::Red });
    t.push(30, TraceEventKind::Phase { phase: TracePhase::Yellow });
    t.push(32, TraceEventKind::Phase { phase: TracePhase::Green });

    assert_eq!(t.green_windows(), vec![(12, 20), (32, u64::MAX)]);
}
