// Inline style strings for DOM-rendered hearts.

#[inline]
pub fn px(value: f32) -> String {
    format!("{:.1}px", value)
}

/// CSS transform for a heart at the end of its flight.
#[inline]
pub fn heart_flight_transform(dx: f32, dy: f32, scale: f32, spin_degrees: f32) -> String {
    format!(
        "translate({:.1}px, {:.1}px) scale({:.3}) rotate({:.1}deg)",
        dx, dy, scale, spin_degrees
    )
}
