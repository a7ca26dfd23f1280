use std::time::Duration;

// Shared tuning constants for zoom, gestures and the kiss scene.

// Zoom limits
pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 4.0;

// Two single-pointer releases closer than this reset the zoom
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

// Pointer separations at or below this are treated as coincident
pub const MIN_PINCH_DISTANCE: f32 = 1e-3;

// Zoom pulse played when entering the kiss scene
pub const PULSE_FACTOR: f32 = 1.12;
pub const PULSE_DURATION: Duration = Duration::from_millis(900);

// Heart burst
pub const KISS_BURST_COUNT: usize = 64;
pub const BURST_SPREAD_PX: f32 = 320.0; // side of the square particles start in
pub const HEART_SIZE_LARGE_PX: (f32, f32) = (80.0, 160.0);
pub const HEART_SIZE_SMALL_PX: (f32, f32) = (28.0, 56.0);
pub const HEART_DRIFT_X_PX: f32 = 500.0; // full horizontal drift range, centered on 0
pub const HEART_RISE_MIN_PX: f32 = 150.0;
pub const HEART_RISE_SPAN_PX: f32 = 560.0;
pub const HEART_END_SCALE: (f32, f32) = (0.9, 2.3);
pub const HEART_LIFETIME_MIN: Duration = Duration::from_millis(2000);
pub const HEART_LIFETIME_JITTER: Duration = Duration::from_millis(600);

// Camera request hint
pub const CAMERA_IDEAL_WIDTH: u32 = 1920;
pub const CAMERA_IDEAL_HEIGHT: u32 = 1080;

// Scene copy
pub const SEARCHING_MESSAGE: &str = "Who shall be the lucky couple?";
pub const KISSING_MESSAGE: &str = "KISS!";
