//! Handler für Parameter, Auflösung, Easing und Playback.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt den Ziel-Parameter `t`.
pub fn set_parameter(state: &mut AppState, t: f64, snap: bool, animate: bool) {
    use_cases::parameter::set_parameter(state, t, snap, animate);
}

/// Setzt die Abtast-Auflösung.
pub fn set_resolution(state: &mut AppState, resolution: u32) {
    use_cases::parameter::set_resolution(state, resolution);
}

/// Schreibt das Easing fort.
pub fn advance_animation(state: &mut AppState, dt: f64) {
    use_cases::parameter::advance_animation(state, dt);
}

pub fn start_playback(state: &mut AppState) {
    use_cases::playback::start(state);
}

pub fn stop_playback(state: &mut AppState) {
    use_cases::playback::stop(state);
}

/// Schreibt das Playback fort.
pub fn advance_playback(state: &mut AppState, dt: f64) {
    use_cases::playback::advance(state, dt);
}
