//! Use-Case-Funktionen für Darstellungsmodus und Platzier-Modus.

use crate::app::AppState;
use crate::shared::RenderMode;

/// Setzt den Darstellungsmodus (reine Zustandsänderung).
pub fn set_render_mode(state: &mut AppState, mode: RenderMode) {
    if state.view.render_mode == mode {
        return;
    }
    state.view.render_mode = mode;
    state.changes.view = true;
    log::info!("Darstellungsmodus: {}", mode.label());
}

/// Aktiviert oder deaktiviert das Platzieren neuer Kontrollpunkte.
pub fn set_placing_points(state: &mut AppState, enabled: bool) {
    state.view.placing_points = enabled;
    state.changes.view = true;
    log::info!("Platzier-Modus: {}", if enabled { "an" } else { "aus" });
}
