//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ControlPointDragged { index, position } => {
            vec![AppCommand::ReplaceControlPoint { index, position }]
        }
        AppIntent::CanvasClicked { position } => {
            if state.view.placing_points {
                vec![AppCommand::AppendControlPoint { position }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ParameterSliderChanged { t } => {
            let mut commands = Vec::with_capacity(2);
            // Manuelles Scrubben übernimmt die Kontrolle vom Playback
            if state.playback.playing {
                commands.push(AppCommand::StopPlayback);
            }
            commands.push(AppCommand::SetParameter {
                t,
                snap: true,
                animate: true,
            });
            commands
        }
        AppIntent::ResolutionSliderChanged { resolution } => {
            vec![AppCommand::SetResolution { resolution }]
        }
        AppIntent::RenderModeSelected { mode } => vec![AppCommand::SetRenderMode { mode }],
        AppIntent::PlacingPointsToggled { enabled } => {
            vec![AppCommand::SetPlacingPoints { enabled }]
        }
        AppIntent::ClearPointsRequested => vec![AppCommand::ClearControlPoints],
        AppIntent::DefaultPointsRequested => vec![AppCommand::LoadDefaultControlPoints],
        AppIntent::PlaybackToggled => {
            if state.playback.playing {
                vec![AppCommand::StopPlayback]
            } else {
                vec![AppCommand::StartPlayback]
            }
        }
        AppIntent::FrameAdvanced { dt } => {
            let mut commands = Vec::new();
            if state.playback.playing {
                commands.push(AppCommand::AdvancePlayback { dt });
            }
            if !state.tween.is_settled() {
                commands.push(AppCommand::AdvanceAnimation { dt });
            }
            commands
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
