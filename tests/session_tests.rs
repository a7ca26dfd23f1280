// Host-side tests for the session dispatcher and render loop ordering.

mod common;

use common::{down, ms, mv, surface, DrawCall, RecordingSink, RecordingTarget};
use kisscam_core::*;

fn session(rotation: Rotation) -> KissCam {
    let config = KissCamConfig::default()
        .with_rotation(rotation)
        .with_seed(1);
    KissCam::new(&config, surface(1920.0, 1080.0))
}

#[test]
fn waits_quietly_until_the_camera_reports_a_size() {
    let mut cam = session(Rotation::CounterClockwise);
    let mut sink = RecordingSink::default();
    let mut target = RecordingTarget::default();
    for frame in 0..120 {
        let outcome = cam.tick(ms(frame * 16), MediaFrame::NOT_READY, &mut sink, &mut target);
        assert_eq!(outcome, TickOutcome::WaitingForMedia);
    }
    assert!(target.calls.is_empty());
    assert_eq!(cam.render_loop().frames_waiting(), 120);
    assert_eq!(cam.render_loop().frames_drawn(), 0);
}

#[test]
fn ready_frame_is_cleared_then_drawn() {
    let mut cam = session(Rotation::CounterClockwise);
    let mut sink = RecordingSink::default();
    let mut target = RecordingTarget::default();
    let outcome = cam.tick(ms(0), MediaFrame::new(1080, 1920), &mut sink, &mut target);
    assert_eq!(outcome, TickOutcome::Drawn);
    assert_eq!(target.calls.len(), 2);
    assert_eq!(
        target.calls[0],
        DrawCall::Clear {
            width: 1920,
            height: 1080
        }
    );
    let DrawCall::Frame(plan) = &target.calls[1] else {
        panic!("expected a draw call, got {:?}", target.calls[1]);
    };
    assert!((plan.rect.draw_width - 1920.0).abs() < 0.01);
    assert!((plan.rect.draw_height - 1080.0).abs() < 0.01);
    assert_eq!(plan.rect.scale, 1.0);
}

#[test]
fn pointer_events_land_before_the_next_frame() {
    let mut cam = session(Rotation::Identity);
    let mut sink = RecordingSink::default();
    let mut target = RecordingTarget::default();
    cam.push(ms(1), SessionEvent::Pointer(down(1, 0.0, 0.0)));
    cam.push(ms(1), SessionEvent::Pointer(down(2, 100.0, 0.0)));
    cam.push(ms(5), SessionEvent::Pointer(mv(2, 200.0, 0.0)));
    assert_eq!(cam.gesture_phase(), GesturePhase::Idle);

    cam.tick(ms(16), MediaFrame::new(1920, 1080), &mut sink, &mut target);
    assert_eq!(cam.gesture_phase(), GesturePhase::Tracking);
    let Some(DrawCall::Frame(plan)) = target.calls.last() else {
        panic!("no frame drawn");
    };
    assert_eq!(plan.rect.scale, 2.0);
}

#[test]
fn resize_updates_the_surface_used_for_drawing() {
    let mut cam = session(Rotation::Identity);
    let mut sink = RecordingSink::default();
    let mut target = RecordingTarget::default();
    let resized = Surface::new(1000.0, 2000.0, 2.0).unwrap();
    cam.push(ms(0), SessionEvent::Resize(resized));
    cam.tick(ms(16), MediaFrame::new(1920, 1080), &mut sink, &mut target);

    assert_eq!(cam.surface(), &resized);
    assert_eq!(
        target.calls[0],
        DrawCall::Clear {
            width: 2000,
            height: 4000
        }
    );
    let DrawCall::Frame(plan) = &target.calls[1] else {
        panic!("expected a draw call");
    };
    // landscape media on a portrait surface: height pinned, width overflows
    assert!((plan.rect.draw_height - 2000.0).abs() < 0.01);
    assert!(plan.rect.draw_width > 1000.0);
    assert_eq!(plan.rect.origin, glam::Vec2::new(500.0, 1000.0));
}

#[test]
fn reset_zoom_event_returns_to_unit_scale() {
    let mut cam = session(Rotation::Identity);
    let mut sink = RecordingSink::default();
    cam.push(ms(0), SessionEvent::Pointer(down(1, 0.0, 0.0)));
    cam.push(ms(0), SessionEvent::Pointer(down(2, 100.0, 0.0)));
    cam.push(ms(5), SessionEvent::Pointer(mv(2, 300.0, 0.0)));
    cam.dispatch(&mut sink);
    assert!((cam.zoom().current_scale() - 3.0).abs() < 1e-6);

    cam.push(ms(10), SessionEvent::ResetZoom);
    assert_eq!(cam.dispatch(&mut sink), 1);
    assert_eq!(cam.zoom().current_scale(), 1.0);
}

#[test]
fn timers_fire_during_tick() {
    let mut cam = session(Rotation::Identity);
    let mut sink = RecordingSink::default();
    let mut target = RecordingTarget::default();
    cam.push(ms(0), SessionEvent::SetKissing);
    cam.tick(ms(0), MediaFrame::new(640, 480), &mut sink, &mut target);
    let Some(DrawCall::Frame(pulsed)) = target.calls.last().cloned() else {
        panic!("no frame drawn");
    };
    assert!((pulsed.rect.scale - PULSE_FACTOR).abs() < 1e-6);

    cam.tick(PULSE_DURATION, MediaFrame::new(640, 480), &mut sink, &mut target);
    let Some(DrawCall::Frame(settled)) = target.calls.last().cloned() else {
        panic!("no frame drawn");
    };
    assert_eq!(settled.rect.scale, 1.0);
}

#[test]
fn empty_surface_is_not_reported_as_waiting_for_camera() {
    let mut cam = session(Rotation::Identity);
    let mut sink = RecordingSink::default();
    let mut target = RecordingTarget::default();
    cam.push(ms(0), SessionEvent::Resize(surface(0.0, 0.0)));
    let outcome = cam.tick(ms(16), MediaFrame::new(1920, 1080), &mut sink, &mut target);
    assert_eq!(outcome, TickOutcome::NoSurface);
    assert!(target.calls.is_empty());
    assert_eq!(cam.render_loop().frames_without_surface(), 1);
    assert_eq!(cam.render_loop().frames_waiting(), 0);

    cam.push(ms(20), SessionEvent::Resize(surface(800.0, 600.0)));
    let outcome = cam.tick(ms(32), MediaFrame::new(1920, 1080), &mut sink, &mut target);
    assert_eq!(outcome, TickOutcome::Drawn);
}
