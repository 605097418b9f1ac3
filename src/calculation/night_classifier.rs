//! Night-hour classification.
//!
//! Decides whether a clock hour falls inside the reduced-rate night window.

use crate::models::NightWindow;

/// Returns true if `hour` lies inside the night window.
///
/// Wrapping windows (start after end, e.g. 22→5) match `hour >= start || hour < end`.
/// Non-wrapping windows match `start <= hour < end`, so equal bounds match nothing.
///
/// # Examples
///
/// ```
/// use clt_shift_engine::calculation::is_night;
/// use clt_shift_engine::models::NightWindow;
///
/// let window = NightWindow::clt();
/// assert!(is_night(22, &window));
/// assert!(is_night(4, &window));
/// assert!(!is_night(5, &window));
/// assert!(!is_night(21, &window));
/// ```
pub fn is_night(hour: u32, window: &NightWindow) -> bool {
    let (start, end) = (window.start_hour(), window.end_hour());
    if window.wraps_midnight() {
        hour >= start || hour < end
    } else {
        start <= hour && hour < end
    }
}
