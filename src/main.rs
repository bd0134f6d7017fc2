//! Bézier Tiers.
//!
//! Interaktiver Viewer für die De-Casteljau- und Bernstein-Konstruktion von
//! Bézier-Kurven beliebigen Grades.

use bezier_tiers::render::CanvasTransform;
use bezier_tiers::{render, ui, AppController, AppIntent, AppState, ViewerOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bézier Tiers v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 720.0])
                .with_title("Bézier Tiers"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier Tiers",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    canvas: ui::CanvasInput,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(viewer_options),
            controller: AppController::new(),
            canvas: ui::CanvasInput::new(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_ui_events(ctx);
        events.push(AppIntent::FrameAdvanced {
            dt: f64::from(ctx.input(|i| i.stable_dt)),
        });

        self.process_events(events);

        self.maybe_request_repaint(ctx);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if ctx.input(|i| i.key_pressed(egui::Key::Q) && i.modifiers.command) {
            events.push(AppIntent::ExitRequested);
        }

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_control_panel(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(ctx.style().visuals.extreme_bg_color))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                let transform = CanvasTransform::new(rect.min);

                events.extend(self.canvas.collect_canvas_events(
                    &response,
                    transform,
                    self.state.curve.points(),
                    self.state.options.control_anchor_radius,
                ));

                if self.state.view.placing_points && response.hovered() {
                    ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
                }

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                render::paint_scene(&painter, transform, &scene);

                if !scene.has_curve() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Punkte platzieren aktivieren und klicken, um Kontrollpunkte zu setzen",
                        egui::FontId::proportional(18.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        let changes = self.state.changes.take();
        if changes.any() || self.state.is_animating() || self.state.should_exit {
            ctx.request_repaint();
        }
    }
}
