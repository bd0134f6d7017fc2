//! Use-Case-Funktionen für Kurvenparameter `t` und Auflösung.

use crate::app::AppState;

/// Setzt den Ziel-Parameter.
///
/// `t` wird geklemmt; mit `snap` zusätzlich auf das `1/R`-Raster gelegt.
/// Mit `animate` folgt der dargestellte Wert über die Feder, sonst springt er.
pub fn set_parameter(state: &mut AppState, t: f64, snap: bool, animate: bool) {
    let applied = state.curve.set_t(t, snap);
    if animate {
        state.tween.retarget(applied);
    } else {
        state.tween.jump_to(applied);
    }
    state.changes.parameter = true;
    log::debug!("Parameter t = {:.4} (angefragt {:.4})", applied, t);
}

/// Setzt die Auflösung und rastet den aktuellen Parameter neu ein.
pub fn set_resolution(state: &mut AppState, resolution: u32) {
    let previous_t = state.curve.t();
    let applied = state.curve.set_resolution(resolution);
    if state.curve.t() != previous_t {
        state.tween.retarget(state.curve.t());
        state.changes.parameter = true;
    }
    state.changes.geometry = true;
    log::debug!("Auflösung {} (angefragt {})", applied.get(), resolution);
}

/// Schreibt das Parameter-Easing um `dt` Sekunden fort.
pub fn advance_animation(state: &mut AppState, dt: f64) {
    if state.tween.is_settled() {
        return;
    }
    state.tween.advance(dt);
    state.changes.parameter = true;
}
