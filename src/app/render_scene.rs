//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::hue_at;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Alle Geometrie wird beim dargestellten (gefederten) Parameter ausgewertet,
/// nur die Referenzkurve ist davon unabhängig.
pub fn build(state: &AppState) -> RenderScene {
    let curve = &state.curve;
    let t = state.displayed_t();
    let mode = state.view.render_mode;

    RenderScene {
        control_points: curve.points().to_vec(),
        control_hues: curve.polygon.hues(),
        render_mode: mode,
        t,
        tiers: curve.tier_pyramid(t),
        hue_tiers: curve.hue_pyramid(t),
        reference_curve: curve.reference_polyline(),
        foreground: curve.foreground_polyline(t),
        live_point: curve.curve_point(t),
        live_hue: hue_at(curve.polygon.len(), t),
        decomposition: curve.vector_decomposition(mode, t),
        placing_points: state.view.placing_points,
        options: state.options.clone(),
    }
}
