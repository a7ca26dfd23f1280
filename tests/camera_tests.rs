// Host-side tests for the camera acquisition fallback, driven with pollster.

use kisscam_core::*;
use std::cell::RefCell;

#[test]
fn plan_prefers_exact_rear_camera_at_full_hd() {
    let [first, second] = acquisition_plan();
    assert_eq!(first.facing, Facing::Environment);
    assert!(first.exact_facing);
    assert_eq!(first.ideal_size, Some((1920, 1080)));
    assert_eq!(second.facing, Facing::Environment);
    assert!(!second.exact_facing);
    assert_eq!(second.ideal_size, None);
    assert_eq!(Facing::Environment.as_str(), "environment");
}

#[test]
fn first_success_stops_the_plan() {
    let seen = RefCell::new(Vec::new());
    let acquired = pollster::block_on(acquire_with_fallback(&acquisition_plan(), |req| {
        seen.borrow_mut().push(req);
        async move { Ok::<_, String>("stream") }
    }))
    .unwrap();
    assert_eq!(acquired.stream, "stream");
    assert_eq!(acquired.attempt, 0);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn falls_back_to_relaxed_constraints() {
    let acquired = pollster::block_on(acquire_with_fallback(&acquisition_plan(), |req| async move {
        if req.exact_facing {
            Err("OverconstrainedError")
        } else {
            Ok(42u32)
        }
    }))
    .unwrap();
    assert_eq!(acquired.stream, 42);
    assert_eq!(acquired.attempt, 1);
    assert_eq!(acquired.request, CameraRequest::relaxed());
}

#[test]
fn total_failure_reports_every_attempt() {
    let err = pollster::block_on(acquire_with_fallback(&acquisition_plan(), |_| async {
        Err::<(), _>("NotAllowedError")
    }))
    .unwrap_err();
    match &err {
        KissCamError::CameraUnavailable { reasons } => {
            assert_eq!(reasons.len(), 2);
            assert!(reasons.iter().all(|r| r.contains("NotAllowedError")));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().starts_with("camera unavailable after 2 attempt(s)"));
}
