//! Handler für Darstellungsmodus, Platzier-Modus und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::RenderMode;

/// Setzt den Darstellungsmodus.
pub fn set_render_mode(state: &mut AppState, mode: RenderMode) {
    use_cases::view::set_render_mode(state, mode);
}

/// Schaltet den Platzier-Modus.
pub fn set_placing_points(state: &mut AppState, enabled: bool) {
    use_cases::view::set_placing_points(state, enabled);
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
