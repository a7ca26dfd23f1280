// DOM wiring for the kiss cam page.

// Element ids
pub const VIDEO_ID: &str = "video";
pub const CANVAS_ID: &str = "cameraCanvas";
pub const SEARCH_BUTTON_ID: &str = "searchBtn";
pub const KISS_BUTTON_ID: &str = "kissBtn";
pub const MESSAGE_ID: &str = "message";
pub const PARTICLES_ID: &str = "particles";
pub const ROTATION_SELECT_ID: &str = "rotationSelect";

// Canvas attribute selecting "cover" or "contain"
pub const FIT_ATTRIBUTE: &str = "data-fit";

// CSS classes
pub const HEART_CLASS: &str = "heartParticle";
pub const BIG_TEXT_CLASS: &str = "bigText";

// Heart flight animation (CSS transitions)
pub const HEART_TRANSITION: &str =
    "transform 1200ms cubic-bezier(.2,.9,.2,1), opacity 1400ms linear";
pub const HEART_SVG: &str = r##"<svg viewBox="0 0 32 29" width="100%" height="100%"><path d="M23.6 2.6c-2.4 0-4.6 1.3-5.6 3.3-1-2-3.2-3.3-5.6-3.3C5.4 2.6 2 6 2 10.1c0 6.1 10.6 12.1 14 16.9 3.4-4.8 14-10.8 14-16.9 0-4.1-3.4-7.5-6.4-7.5z" fill="#ff2a2a"/></svg>"##;

// Shown in place of the scene copy when no camera could be opened
pub const CAMERA_UNAVAILABLE_MESSAGE: &str = "Camera unavailable";

// Camera sits on the left with its top toward the floor
pub const DEFAULT_ROTATION_DEG: i32 = -90;

// HTMLMediaElement.readyState at which a frame can be drawn (HAVE_CURRENT_DATA)
pub const VIDEO_READY_STATE: u16 = 2;
