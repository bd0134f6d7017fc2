//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`; nur erfolgreich
    /// ausgeführte Commands landen im Command-Log.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match &command {
            // === Kontrollpolygon ===
            AppCommand::ReplaceControlPoint { index, position } => {
                handlers::editing::replace_point(state, *index, *position)?
            }
            AppCommand::AppendControlPoint { position } => {
                handlers::editing::append_point(state, *position)
            }
            AppCommand::ClearControlPoints => handlers::editing::clear_points(state),
            AppCommand::LoadDefaultControlPoints => handlers::editing::load_default_points(state),

            // === Parameter & Auflösung ===
            AppCommand::SetParameter { t, snap, animate } => {
                handlers::parameter::set_parameter(state, *t, *snap, *animate)
            }
            AppCommand::SetResolution { resolution } => {
                handlers::parameter::set_resolution(state, *resolution)
            }
            AppCommand::AdvanceAnimation { dt } => handlers::parameter::advance_animation(state, *dt),

            // === Playback ===
            AppCommand::StartPlayback => handlers::parameter::start_playback(state),
            AppCommand::StopPlayback => handlers::parameter::stop_playback(state),
            AppCommand::AdvancePlayback { dt } => handlers::parameter::advance_playback(state, *dt),

            // === Darstellung & Anwendungssteuerung ===
            AppCommand::SetRenderMode { mode } => handlers::view::set_render_mode(state, *mode),
            AppCommand::SetPlacingPoints { enabled } => {
                handlers::view::set_placing_points(state, *enabled)
            }
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        state.command_log.record(&command);
        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
