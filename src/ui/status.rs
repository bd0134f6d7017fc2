//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.curve.polygon.degree() {
                Some(degree) => ui.label(format!(
                    "Punkte: {} | Grad: {}",
                    state.point_count(),
                    degree
                )),
                None => ui.label("Keine Kontrollpunkte"),
            };

            ui.separator();

            ui.label(format!(
                "t: {:.3} (Ziel {:.3}) | Auflösung: {}",
                state.displayed_t(),
                state.curve.t(),
                state.curve.resolution().get()
            ));

            ui.separator();
            ui.label(format!("Modus: {}", state.view.render_mode.label()));

            if state.view.placing_points {
                ui.separator();
                ui.label(egui::RichText::new("Platzieren aktiv").color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
