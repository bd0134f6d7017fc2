//! Kurven, Kontrollpolygon und Anker.

use super::colors::{hue_color, rgba_color};
use super::{CanvasTransform, RenderScene};
use egui::{Color32, Shape, Stroke};

/// Graue Referenzkurve über den gesamten Parameterbereich.
pub(super) fn paint_reference(
    painter: &egui::Painter,
    transform: CanvasTransform,
    scene: &RenderScene,
) {
    if scene.reference_curve.len() < 2 {
        return;
    }
    let stroke = Stroke::new(
        scene.options.reference_width,
        rgba_color(scene.options.reference_color),
    );
    painter.add(Shape::line(
        transform.points_to_screen(&scene.reference_curve),
        stroke,
    ));
}

/// Kontrollpolygon als durchgezogene, dünne Linie.
pub(super) fn paint_control_polygon(
    painter: &egui::Painter,
    transform: CanvasTransform,
    scene: &RenderScene,
) {
    if scene.control_points.len() < 2 {
        return;
    }
    let stroke = Stroke::new(
        scene.options.polygon_width,
        rgba_color(scene.options.reference_color).gamma_multiply(0.7),
    );
    painter.add(Shape::line(
        transform.points_to_screen(&scene.control_points),
        stroke,
    ));
}

/// Vordergrund-Kurve: jedes Segment in der Farbe seines Endpunkts.
pub(super) fn paint_foreground(
    painter: &egui::Painter,
    transform: CanvasTransform,
    scene: &RenderScene,
) {
    for segment in &scene.foreground {
        let color = hue_color(segment.hue, &scene.options);
        painter.line_segment(
            [
                transform.to_screen(segment.start),
                transform.to_screen(segment.end),
            ],
            Stroke::new(scene.options.curve_width, color),
        );
    }
}

/// Kontrollpunkt-Anker, eingefärbt mit Hue `i / n`.
pub(super) fn paint_control_anchors(
    painter: &egui::Painter,
    transform: CanvasTransform,
    scene: &RenderScene,
) {
    let radius = scene.options.control_anchor_radius;
    for (&point, &hue) in scene.control_points.iter().zip(&scene.control_hues) {
        let center = transform.to_screen(point);
        painter.circle_filled(center, radius, hue_color(hue, &scene.options));
        painter.circle_stroke(center, radius, Stroke::new(1.5, Color32::WHITE));
    }
}

/// Live-Punkt auf der Kurve bei `t`.
pub(super) fn paint_live_point(
    painter: &egui::Painter,
    transform: CanvasTransform,
    scene: &RenderScene,
) {
    let Some(point) = scene.live_point else {
        return;
    };
    let center = transform.to_screen(point);
    let radius = scene.options.live_point_radius;
    painter.circle_filled(center, radius, hue_color(scene.live_hue, &scene.options));
    painter.circle_stroke(center, radius, Stroke::new(2.0, Color32::WHITE));
}
