//! Konstruktions-Overlays: De-Casteljau-Tiers und Bernstein-Vektoren.

use super::colors::{hue_color, rgba_color};
use super::{CanvasTransform, RenderScene};
use crate::core::VectorDecomposition;
use egui::{Shape, Stroke};

/// Gestrichelte Tier-Segmente und Lerp-Anker aller Zwischenstufen.
///
/// Tier 0 (das Kontrollpolygon) wird separat gezeichnet; hier beginnen die
/// Segmente ab Tier 1. Anker tragen die Farbe ihres Hue-Pyramiden-Werts.
pub(super) fn paint_lerp_tiers(
    painter: &egui::Painter,
    transform: CanvasTransform,
    scene: &RenderScene,
) {
    let options = &scene.options;
    let tiers = scene.tiers.tiers();
    let hue_tiers = scene.hue_tiers.tiers();

    for (tier, hues) in tiers.iter().zip(hue_tiers).skip(1) {
        if tier.len() >= 2 {
            let color = hue_color(hues.iter().sum::<f64>() / hues.len() as f64, options);
            painter.extend(Shape::dashed_line(
                &transform.points_to_screen(tier),
                Stroke::new(options.construction_width, color.gamma_multiply(0.8)),
                options.dash_length,
                options.gap_length,
            ));
        }
        for (&point, &hue) in tier.iter().zip(hues) {
            painter.circle_filled(
                transform.to_screen(point),
                options.lerp_anchor_radius,
                hue_color(hue, options),
            );
        }
    }
}

/// Vektor-Darstellung: gestrichelte Speichen vom Schwerpunkt zu allen
/// Kontrollpunkten, darüber die gewichteten Vektoren.
pub(super) fn paint_vectors(
    painter: &egui::Painter,
    transform: CanvasTransform,
    scene: &RenderScene,
) {
    let Some(decomposition) = &scene.decomposition else {
        return;
    };
    let options = &scene.options;
    let origin = transform.to_screen(decomposition.origin());

    let spoke_stroke = Stroke::new(
        options.construction_width,
        rgba_color(options.reference_color).gamma_multiply(0.6),
    );
    for &point in &scene.control_points {
        painter.extend(Shape::dashed_line(
            &[origin, transform.to_screen(point)],
            spoke_stroke,
            options.dash_length,
            options.gap_length,
        ));
    }

    let vector_stroke = |index: usize| {
        let hue = scene.control_hues.get(index).copied().unwrap_or(0.0);
        Stroke::new(options.construction_width * 1.5, hue_color(hue, options))
    };

    match decomposition {
        VectorDecomposition::Expanded(expanded) => {
            for vector in &expanded.vectors {
                let tip = transform.to_screen(vector.tip);
                painter.arrow(origin, tip - origin, vector_stroke(vector.index));
            }
        }
        VectorDecomposition::Stacked(stacked) => {
            for (index, (start, end)) in stacked.segments().enumerate() {
                let start = transform.to_screen(start);
                let end = transform.to_screen(end);
                painter.arrow(start, end - start, vector_stroke(index));
            }
        }
    }

    painter.circle_filled(
        origin,
        options.lerp_anchor_radius,
        rgba_color(options.reference_color),
    );
}
