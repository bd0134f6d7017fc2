//! Zeichenflächen-Input: Anker ziehen, Punkte platzieren → AppIntent.

use crate::app::AppIntent;
use crate::render::CanvasTransform;
use glam::DVec2;

/// Nächster Kontrollpunkt innerhalb von `radius` um `world_pos`.
///
/// Bei gleichem Abstand gewinnt der zuletzt gezeichnete (oberste) Punkt.
pub fn pick_control_point(points: &[DVec2], world_pos: DVec2, radius: f64) -> Option<usize> {
    let radius_sq = radius * radius;
    points
        .iter()
        .enumerate()
        .map(|(index, p)| (index, p.distance_squared(world_pos)))
        .filter(|&(_, d)| d <= radius_sq)
        .min_by(|a, b| a.1.total_cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(index, _)| index)
}

/// Drag-Zustand der Zeichenfläche über Frames hinweg.
#[derive(Debug, Default)]
pub struct CanvasInput {
    dragged_point: Option<usize>,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index des aktuell gezogenen Kontrollpunkts.
    pub fn dragged_point(&self) -> Option<usize> {
        self.dragged_point
    }

    /// Sammelt Zeichenflächen-Events aus der egui-Response.
    pub fn collect_canvas_events(
        &mut self,
        response: &egui::Response,
        transform: CanvasTransform,
        control_points: &[DVec2],
        anchor_radius: f32,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let pick_radius = f64::from(anchor_radius) + 3.0;

        if response.drag_started() {
            self.dragged_point = response
                .interact_pointer_pos()
                .map(|pos| transform.to_world(pos))
                .and_then(|world| pick_control_point(control_points, world, pick_radius));
        }

        if response.dragged() {
            if let (Some(index), Some(pos)) = (self.dragged_point, response.interact_pointer_pos())
            {
                // Anker verschwinden beim Leeren; ein veralteter Index wird verworfen
                if index < control_points.len() {
                    events.push(AppIntent::ControlPointDragged {
                        index,
                        position: transform.to_world(pos),
                    });
                } else {
                    self.dragged_point = None;
                }
            }
        }

        if response.drag_stopped() {
            self.dragged_point = None;
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let world = transform.to_world(pos);
                if pick_control_point(control_points, world, pick_radius).is_none() {
                    events.push(AppIntent::CanvasClicked { position: world });
                }
            }
        }

        events
    }
}
