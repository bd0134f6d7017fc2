//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Alle Geometrie liegt in Weltkoordinaten (`f64`) und wird pro Frame neu
//! berechnet.

use super::options::ViewerOptions;
use super::RenderMode;
use crate::core::{CurveSegment, TierPyramid, VectorDecomposition};
use glam::DVec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Polygon-Reihenfolge
    pub control_points: Vec<DVec2>,
    /// Hue `i / n` je Kontrollpunkt
    pub control_hues: Vec<f64>,
    /// Gewählter Darstellungsmodus
    pub render_mode: RenderMode,
    /// Dargestellter Parameter (nach Easing)
    pub t: f64,
    /// De-Casteljau-Pyramide bei `t`
    pub tiers: TierPyramid<DVec2>,
    /// Hue-Pyramide parallel zu `tiers`
    pub hue_tiers: TierPyramid<f64>,
    /// Graue Referenzkurve über den ganzen Parameterbereich
    pub reference_curve: Vec<DVec2>,
    /// Farbige Kurve von `0` bis `t`
    pub foreground: Vec<CurveSegment>,
    /// Kurvenpunkt bei `t` (None ohne Kurve)
    pub live_point: Option<DVec2>,
    /// Hue des Kurvenpunkts
    pub live_hue: f64,
    /// Vektorzerlegung (nur in den Vektor-Modi)
    pub decomposition: Option<VectorDecomposition>,
    /// Platzier-Modus aktiv (Cursor-Hinweis)
    pub placing_points: bool,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: ViewerOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve (mindestens zwei Kontrollpunkte) vorliegt.
    pub fn has_curve(&self) -> bool {
        self.live_point.is_some()
    }
}
