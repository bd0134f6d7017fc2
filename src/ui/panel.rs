//! Steuer-Panel (linke Seitenleiste): Parameter, Auflösung, Modus, Punkte, Playback.

use crate::app::{AppIntent, AppState};
use crate::shared::RenderMode;

/// Rendert das Steuer-Panel und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("control_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Bézier Tiers");
            ui.separator();

            render_parameter_controls(ui, state, &mut events);
            ui.separator();
            render_mode_selector(ui, state, &mut events);
            ui.separator();
            render_point_controls(ui, state, &mut events);
        });

    events
}

fn render_parameter_controls(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut t = state.curve.t();
    if ui
        .add(egui::Slider::new(&mut t, 0.0..=1.0).text("t").fixed_decimals(3))
        .changed()
    {
        events.push(AppIntent::ParameterSliderChanged { t });
    }

    let mut resolution = state.curve.resolution().get();
    if ui
        .add(egui::Slider::new(&mut resolution, state.options.resolution_range()).text("Auflösung"))
        .changed()
    {
        events.push(AppIntent::ResolutionSliderChanged { resolution });
    }

    let play_label = if state.playback.playing {
        "⏸ Pause"
    } else {
        "▶ Play"
    };
    if ui.button(play_label).clicked() {
        events.push(AppIntent::PlaybackToggled);
    }
}

fn render_mode_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let current = state.view.render_mode;
    let mut selected = current;

    egui::ComboBox::from_label("Darstellung")
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for mode in RenderMode::ALL {
                ui.selectable_value(&mut selected, mode, mode.label());
            }
        });

    if selected != current {
        events.push(AppIntent::RenderModeSelected { mode: selected });
    }
}

fn render_point_controls(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut placing = state.view.placing_points;
    if ui.checkbox(&mut placing, "Punkte platzieren").changed() {
        events.push(AppIntent::PlacingPointsToggled { enabled: placing });
    }

    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.point_count() > 0, egui::Button::new("Leeren"))
            .clicked()
        {
            events.push(AppIntent::ClearPointsRequested);
        }
        if ui.button("Standardkurve").clicked() {
            events.push(AppIntent::DefaultPointsRequested);
        }
    });

    if state.point_count() < 2 {
        ui.label(
            egui::RichText::new("Mindestens zwei Punkte für eine Kurve")
                .color(egui::Color32::YELLOW),
        );
    }
}
