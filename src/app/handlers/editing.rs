//! Handler für das Kontrollpolygon.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Ersetzt einen Kontrollpunkt und propagiert Index-Fehler an den Aufrufer.
pub fn replace_point(state: &mut AppState, index: usize, position: DVec2) -> anyhow::Result<()> {
    use_cases::control_points::replace_control_point(state, index, position)
}

/// Hängt einen Kontrollpunkt an (nur im Platzier-Modus).
pub fn append_point(state: &mut AppState, position: DVec2) {
    use_cases::control_points::append_control_point(state, position);
}

/// Leert das Kontrollpolygon.
pub fn clear_points(state: &mut AppState) {
    use_cases::control_points::clear_control_points(state);
}

/// Stellt die Standardkurve wieder her.
pub fn load_default_points(state: &mut AppState) {
    use_cases::control_points::load_default_control_points(state);
}
