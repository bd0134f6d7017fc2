//! Use-Case-Funktionen für das Bearbeiten des Kontrollpolygons.

use crate::app::AppState;
use glam::DVec2;

/// Ersetzt den Kontrollpunkt an `index`.
///
/// Ein ungültiger Index wird als Fehler an den Aufrufer gemeldet; der State
/// bleibt dabei unverändert.
pub fn replace_control_point(
    state: &mut AppState,
    index: usize,
    position: DVec2,
) -> anyhow::Result<()> {
    state.curve.polygon.replace(index, position)?;
    state.changes.geometry = true;
    log::debug!("Kontrollpunkt {} → ({:.1}, {:.1})", index, position.x, position.y);
    Ok(())
}

/// Hängt einen Kontrollpunkt an, sofern der Platzier-Modus aktiv ist.
pub fn append_control_point(state: &mut AppState, position: DVec2) {
    if !state.view.placing_points {
        log::warn!("Kontrollpunkt ignoriert: Platzier-Modus ist nicht aktiv");
        return;
    }

    state.curve.polygon.push(position);
    state.changes.geometry = true;
    log::info!(
        "Kontrollpunkt {} platziert bei ({:.1}, {:.1})",
        state.curve.polygon.len() - 1,
        position.x,
        position.y
    );
}

/// Entfernt alle Kontrollpunkte.
pub fn clear_control_points(state: &mut AppState) {
    state.curve.polygon.clear();
    state.changes.geometry = true;
    log::info!("Kontrollpolygon geleert");
}

/// Lädt die Standardkurve aus den Optionen.
pub fn load_default_control_points(state: &mut AppState) {
    state.curve.polygon = state.options.default_control_points.clone().into();
    state.changes.geometry = true;
    log::info!(
        "Standardkurve geladen ({} Kontrollpunkte)",
        state.curve.polygon.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_updates_point_and_flags_geometry() {
        let mut state = AppState::new();
        state.changes.take();

        replace_control_point(&mut state, 2, DVec2::new(1.0, 2.0)).expect("Index gültig");

        assert_eq!(state.curve.points()[2], DVec2::new(1.0, 2.0));
        assert!(state.changes.geometry);
    }

    #[test]
    fn replace_out_of_range_leaves_state_unchanged() {
        let mut state = AppState::new();
        state.changes.take();
        let before = state.curve.points().to_vec();

        assert!(replace_control_point(&mut state, 4, DVec2::ZERO).is_err());

        assert_eq!(state.curve.points(), &before[..]);
        assert!(!state.changes.geometry);
    }

    #[test]
    fn append_requires_placing_mode() {
        let mut state = AppState::new();

        append_control_point(&mut state, DVec2::new(5.0, 5.0));
        assert_eq!(state.point_count(), 4);

        state.view.placing_points = true;
        append_control_point(&mut state, DVec2::new(5.0, 5.0));
        assert_eq!(state.point_count(), 5);
        assert_eq!(state.curve.points()[4], DVec2::new(5.0, 5.0));
    }

    #[test]
    fn clear_and_restore_default_curve() {
        let mut state = AppState::new();

        clear_control_points(&mut state);
        assert_eq!(state.point_count(), 0);

        load_default_control_points(&mut state);
        assert_eq!(state.curve.points(), &state.options.default_control_points[..]);
    }
}
