//! Application State — zentrale Datenhaltung.
//!
//! Der State besitzt Kontrollpolygon, Parameter, Auflösung und Darstellungsmodus
//! exklusiv. UI und Renderer lesen per Referenz und schreiben nur über Intents.

use super::animation::{AnimationConfig, ParameterTween};
use super::CommandLog;
use crate::core::{
    clamp_parameter, expanded_decomposition, foreground_polyline, hue_pyramid,
    reference_polyline, snap_parameter, stacked_decomposition, ControlPolygon, CurveSegment,
    Resolution, TierPyramid, VectorDecomposition,
};
use crate::shared::{RenderMode, ViewerOptions};
use glam::DVec2;

/// Kurvenzustand: Kontrollpolygon, Ziel-Parameter `t` und Auflösung.
///
/// `t` liegt immer in `[0, 1]`. Alle Abfragen sind reine Funktionen des
/// aktuellen Snapshots und werden bei jedem Aufruf neu berechnet.
#[derive(Debug, Clone)]
pub struct CurveState {
    /// Kontrollpunkte in Polygon-Reihenfolge
    pub polygon: ControlPolygon,
    t: f64,
    resolution: Resolution,
}

impl CurveState {
    /// Erstellt einen Kurvenzustand bei `t = 0`.
    pub fn new(polygon: ControlPolygon, resolution: Resolution) -> Self {
        Self {
            polygon,
            t: 0.0,
            resolution,
        }
    }

    /// Ziel-Parameter (ohne Easing).
    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Setzt `t` geklemmt; mit `snap` zusätzlich auf das `1/R`-Raster.
    ///
    /// Gibt den tatsächlich gesetzten Wert zurück.
    pub fn set_t(&mut self, t: f64, snap: bool) -> f64 {
        self.t = if snap {
            snap_parameter(t, self.resolution)
        } else {
            clamp_parameter(t)
        };
        self.t
    }

    /// Setzt die Auflösung (geklemmt) und rastet `t` neu ein.
    pub fn set_resolution(&mut self, resolution: u32) -> Resolution {
        self.resolution = Resolution::new(resolution);
        self.t = snap_parameter(self.t, self.resolution);
        self.resolution
    }

    /// Kontrollpunkte als Slice.
    pub fn points(&self) -> &[DVec2] {
        self.polygon.points()
    }

    /// De-Casteljau-Pyramide bei `t`.
    pub fn tier_pyramid(&self, t: f64) -> TierPyramid<DVec2> {
        self.polygon.tier_pyramid(clamp_parameter(t))
    }

    /// Hue-Pyramide bei `t` (gleiche Form wie die Punkt-Pyramide).
    pub fn hue_pyramid(&self, t: f64) -> TierPyramid<f64> {
        hue_pyramid(self.polygon.len(), clamp_parameter(t))
    }

    /// Graue Referenzkurve (`R + 1` Punkte, unabhängig von `t`).
    pub fn reference_polyline(&self) -> Vec<DVec2> {
        reference_polyline(self.points(), self.resolution)
    }

    /// Farbige Kurve von `0` bis `t`.
    pub fn foreground_polyline(&self, t: f64) -> Vec<CurveSegment> {
        foreground_polyline(self.points(), self.resolution, t)
    }

    /// Kurvenpunkt über De Casteljau (`None` ohne Kurve).
    pub fn curve_point(&self, t: f64) -> Option<DVec2> {
        self.polygon.curve_point(clamp_parameter(t))
    }

    /// Kurvenpunkt über die Bernstein-Summe (`None` ohne Kontrollpunkte).
    pub fn bernstein_point(&self, t: f64) -> Option<DVec2> {
        self.polygon.bernstein_point(clamp_parameter(t))
    }

    /// Vektorzerlegung passend zum Modus; `None` im Lerp-Modus oder ohne Punkte.
    pub fn vector_decomposition(&self, mode: RenderMode, t: f64) -> Option<VectorDecomposition> {
        let t = clamp_parameter(t);
        match mode {
            RenderMode::LerpTiers => None,
            RenderMode::VectorExpanded => {
                expanded_decomposition(self.points(), t).map(VectorDecomposition::Expanded)
            }
            RenderMode::VectorStacked => {
                stacked_decomposition(self.points(), t).map(VectorDecomposition::Stacked)
            }
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Gewählter Darstellungsmodus
    pub render_mode: RenderMode,
    /// Klicks auf die Zeichenfläche hängen Kontrollpunkte an
    pub placing_points: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (Lerp-Tiers, Platzieren aus).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Playback-Zustand (automatisches Durchlaufen von `t`).
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    pub playing: bool,
}

/// Dirty-Flags für den Host: was hat sich seit dem letzten Frame geändert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateChanges {
    /// Kontrollpolygon oder Auflösung geändert
    pub geometry: bool,
    /// Parameter `t` (Ziel oder dargestellter Wert) geändert
    pub parameter: bool,
    /// Modus, Platzier-Modus oder Playback geändert
    pub view: bool,
}

impl StateChanges {
    pub fn any(&self) -> bool {
        self.geometry || self.parameter || self.view
    }

    /// Liefert die gesammelten Flags und setzt sie zurück.
    pub fn take(&mut self) -> StateChanges {
        std::mem::take(self)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpolygon, Parameter und Auflösung
    pub curve: CurveState,
    /// View-State
    pub view: ViewState,
    /// Playback-State
    pub playback: PlaybackState,
    /// Feder-Easing des dargestellten Parameters
    pub tween: ParameterTween,
    /// Seit dem letzten Frame angefallene Änderungen
    pub changes: StateChanges,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Breiten, Start-Kurve)
    pub options: ViewerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen (Start-Kurve, Auflösung, Easing).
    pub fn with_options(options: ViewerOptions) -> Self {
        let polygon = ControlPolygon::from_points(options.default_control_points.clone());
        let curve = CurveState::new(polygon, options.initial_resolution());
        let config =
            AnimationConfig::spring(options.easing_response, options.easing_damping_fraction);

        Self {
            tween: ParameterTween::new(config, curve.t()),
            curve,
            view: ViewState::new(),
            playback: PlaybackState::default(),
            changes: StateChanges {
                geometry: true,
                parameter: true,
                view: true,
            },
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Dargestellter Parameter (nach Easing, geklemmt).
    pub fn displayed_t(&self) -> f64 {
        clamp_parameter(self.tween.value())
    }

    /// Anzahl der Kontrollpunkte (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.curve.polygon.len()
    }

    /// `true`, solange Playback oder Easing noch Frames benötigen.
    pub fn is_animating(&self) -> bool {
        self.playback.playing || !self.tween.is_settled()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quadratic_state() -> CurveState {
        CurveState::new(
            ControlPolygon::from_points(vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(10.0, 0.0),
                DVec2::new(10.0, 10.0),
            ]),
            Resolution::new(8),
        )
    }

    #[test]
    fn set_t_clamps_and_optionally_snaps() {
        let mut curve = quadratic_state();

        assert_eq!(curve.set_t(1.7, false), 1.0);
        assert_eq!(curve.set_t(f64::NAN, false), 0.0);
        assert_relative_eq!(curve.set_t(0.3, false), 0.3);
        assert_relative_eq!(curve.set_t(0.3, true), 0.25);
    }

    #[test]
    fn set_resolution_resnaps_t() {
        let mut curve = quadratic_state();
        curve.set_t(0.3, false);

        let resolution = curve.set_resolution(4);

        assert_eq!(resolution.get(), 4);
        assert_relative_eq!(curve.t(), 0.25);
        assert_eq!(curve.set_resolution(1000).get(), 128);
    }

    #[test]
    fn queries_agree_on_curve_point() {
        let curve = quadratic_state();
        let pyramid = curve.tier_pyramid(0.5);
        let terminal = pyramid.terminal().expect("Kurve definiert");

        assert_relative_eq!(terminal.x, 7.5);
        assert_relative_eq!(terminal.y, 2.5);
        assert_eq!(curve.curve_point(0.5), Some(terminal));

        let bernstein = curve.bernstein_point(0.5).expect("Kurve definiert");
        assert_relative_eq!(bernstein.x, 7.5, epsilon = 1e-12);
        assert_relative_eq!(bernstein.y, 2.5, epsilon = 1e-12);

        assert_eq!(curve.hue_pyramid(0.5).depth(), pyramid.depth());
        assert_eq!(curve.reference_polyline().len(), 9);
    }

    #[test]
    fn vector_decomposition_follows_mode() {
        let curve = quadratic_state();

        assert!(curve.vector_decomposition(RenderMode::LerpTiers, 0.5).is_none());
        assert!(matches!(
            curve.vector_decomposition(RenderMode::VectorExpanded, 0.5),
            Some(VectorDecomposition::Expanded(_))
        ));
        let Some(VectorDecomposition::Stacked(stacked)) =
            curve.vector_decomposition(RenderMode::VectorStacked, 0.5)
        else {
            panic!("Stacked-Zerlegung erwartet");
        };
        assert_relative_eq!(stacked.end().x, 7.5, epsilon = 1e-9);
    }

    #[test]
    fn queries_clamp_out_of_range_t() {
        let curve = quadratic_state();
        assert_eq!(curve.curve_point(5.0), Some(DVec2::new(10.0, 10.0)));
        assert_eq!(curve.tier_pyramid(-1.0).terminal(), Some(DVec2::ZERO));
    }

    #[test]
    fn new_state_uses_default_curve_and_flags_everything() {
        let mut state = AppState::new();

        assert_eq!(state.point_count(), 4);
        assert_eq!(state.curve.t(), 0.0);
        assert_eq!(state.curve.resolution().get(), 128);
        assert!(!state.is_animating());

        let changes = state.changes.take();
        assert!(changes.geometry && changes.parameter && changes.view);
        assert!(!state.changes.any());
    }
}
