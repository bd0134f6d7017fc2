//! Geordnete Kontrollpunktliste einer Bézier-Kurve.

use super::bernstein::bernstein_point;
use super::de_casteljau::{curve_point, hue_values, TierPyramid};
use glam::DVec2;

/// Kontrollpolygon: geordnete Punktfolge, Grad der Kurve = Anzahl − 1.
///
/// Punkte dürfen zusammenfallen. Die Reihenfolge bestimmt Kurvenform und
/// Summationsreihenfolge der Stacked-Zerlegung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPolygon {
    points: Vec<DVec2>,
}

impl ControlPolygon {
    /// Erstellt ein leeres Polygon.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Übernimmt eine bestehende Punktfolge.
    pub fn from_points(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Kontrollpunkte.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Kurvengrad (`None` ohne Punkte).
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    /// `true`, sobald mindestens zwei Punkte eine Kurve definieren.
    pub fn defines_curve(&self) -> bool {
        self.points.len() >= 2
    }

    /// Ersetzt den Punkt an `index`.
    ///
    /// Ein Index außerhalb des Polygons ist eine verletzte Vorbedingung des
    /// Aufrufers (Anker und Punktliste laufen auseinander) und wird als Fehler
    /// gemeldet; das Polygon bleibt unverändert.
    pub fn replace(&mut self, index: usize, position: DVec2) -> anyhow::Result<()> {
        anyhow::ensure!(
            index < self.points.len(),
            "Kontrollpunkt-Index {} außerhalb des Polygons (Länge {})",
            index,
            self.points.len()
        );
        self.points[index] = position;
        Ok(())
    }

    /// Hängt einen Punkt an (Grad steigt um eins).
    pub fn push(&mut self, position: DVec2) {
        self.points.push(position);
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Hue-Werte `i / n` der Kontrollpunkte.
    pub fn hues(&self) -> Vec<f64> {
        hue_values(self.points.len())
    }

    /// De-Casteljau-Pyramide bei `t`.
    pub fn tier_pyramid(&self, t: f64) -> TierPyramid<DVec2> {
        TierPyramid::build(&self.points, t)
    }

    /// Kurvenpunkt bei `t` über De Casteljau.
    pub fn curve_point(&self, t: f64) -> Option<DVec2> {
        curve_point(&self.points, t)
    }

    /// Kurvenpunkt bei `t` über die Bernstein-Summe.
    pub fn bernstein_point(&self, t: f64) -> Option<DVec2> {
        bernstein_point(&self.points, t)
    }
}

impl From<Vec<DVec2>> for ControlPolygon {
    fn from(points: Vec<DVec2>) -> Self {
        Self::from_points(points)
    }
}
