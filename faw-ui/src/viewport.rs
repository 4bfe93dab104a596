//! Viewport probe for the responsive table layout.

/// Width at or below which the dashboard renders a single table column.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

/// Current window inner width, with a desktop fallback when the window
/// is unavailable.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

/// Whether the narrow single-column layout applies.
pub fn is_narrow() -> bool {
    viewport_width() <= NARROW_VIEWPORT_PX
}
