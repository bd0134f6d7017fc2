//! Use-Case-Funktionen für automatisches Durchlaufen von `t`.
//!
//! Playback setzt den Parameter ohne Easing und ohne Einrasten; bei `t = 1`
//! endet es von selbst.

use crate::app::AppState;

/// Startet das Playback; steht `t` bereits am Ende, beginnt es bei `0`.
pub fn start(state: &mut AppState) {
    if state.curve.t() >= 1.0 {
        state.curve.set_t(0.0, false);
        state.changes.parameter = true;
    }
    state.tween.jump_to(state.curve.t());
    state.playback.playing = true;
    state.changes.view = true;
    log::info!("Playback gestartet bei t = {:.3}", state.curve.t());
}

/// Hält das Playback an.
pub fn stop(state: &mut AppState) {
    if !state.playback.playing {
        return;
    }
    state.playback.playing = false;
    state.changes.view = true;
    log::info!("Playback angehalten bei t = {:.3}", state.curve.t());
}

/// Schreibt `t` um `playback_speed · dt` fort und stoppt am Ende.
pub fn advance(state: &mut AppState, dt: f64) {
    if !state.playback.playing || dt.is_nan() || dt <= 0.0 {
        return;
    }

    let next = state.curve.t() + state.options.playback_speed * dt;
    let applied = state.curve.set_t(next, false);
    state.tween.jump_to(applied);
    state.changes.parameter = true;

    if applied >= 1.0 {
        stop(state);
    }
}
