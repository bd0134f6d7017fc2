//! Zeichnen einer `RenderScene` mit dem egui-`Painter`.
//!
//! Reihenfolge: Referenzkurve, Kontrollpolygon, Konstruktion (Tiers oder
//! Vektoren), Vordergrund-Kurve, Anker. Farben entstehen erst hier aus den
//! skalaren Hue-Werten der Szene.

mod colors;
mod construction;
mod curve;

pub use crate::shared::{RenderMode, RenderScene};
pub use colors::{hue_color, rgba_color};

use glam::DVec2;

/// Abbildung Welt ↔ Bildschirm: Weltkoordinaten sind Pixel relativ zur
/// linken oberen Ecke der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Bildschirmposition des Welt-Ursprungs
    pub origin: egui::Pos2,
}

impl CanvasTransform {
    pub fn new(origin: egui::Pos2) -> Self {
        Self { origin }
    }

    /// Weltpunkt → Bildschirmposition.
    pub fn to_screen(&self, world: DVec2) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + world.x as f32,
            self.origin.y + world.y as f32,
        )
    }

    /// Bildschirmposition → Weltpunkt.
    pub fn to_world(&self, screen: egui::Pos2) -> DVec2 {
        DVec2::new(
            (screen.x - self.origin.x) as f64,
            (screen.y - self.origin.y) as f64,
        )
    }

    /// Konvertiert eine Punktfolge in Bildschirmkoordinaten.
    pub fn points_to_screen(&self, points: &[DVec2]) -> Vec<egui::Pos2> {
        points.iter().map(|&p| self.to_screen(p)).collect()
    }
}

/// Zeichnet die komplette Szene.
pub fn paint_scene(painter: &egui::Painter, transform: CanvasTransform, scene: &RenderScene) {
    curve::paint_reference(painter, transform, scene);
    curve::paint_control_polygon(painter, transform, scene);

    match scene.render_mode {
        RenderMode::LerpTiers => construction::paint_lerp_tiers(painter, transform, scene),
        RenderMode::VectorExpanded | RenderMode::VectorStacked => {
            construction::paint_vectors(painter, transform, scene)
        }
    }

    curve::paint_foreground(painter, transform, scene);
    curve::paint_control_anchors(painter, transform, scene);
    curve::paint_live_point(painter, transform, scene);
}
