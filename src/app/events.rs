//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::shared::RenderMode;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Kontrollpunkt `index` wurde auf eine neue Weltposition gezogen
    ControlPointDragged { index: usize, position: DVec2 },
    /// Klick auf freie Zeichenfläche (Weltposition)
    CanvasClicked { position: DVec2 },
    /// `t`-Slider bewegt (Rohwert, ungeklemmt)
    ParameterSliderChanged { t: f64 },
    /// Auflösungs-Slider bewegt
    ResolutionSliderChanged { resolution: u32 },
    /// Darstellungsmodus gewählt
    RenderModeSelected { mode: RenderMode },
    /// Platzier-Modus umgeschaltet
    PlacingPointsToggled { enabled: bool },
    /// Alle Kontrollpunkte entfernen
    ClearPointsRequested,
    /// Standardkurve wiederherstellen
    DefaultPointsRequested,
    /// Play/Pause gedrückt
    PlaybackToggled,
    /// Ein Frame ist vergangen (`dt` in Sekunden)
    FrameAdvanced { dt: f64 },
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands, die vom Controller zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kontrollpunkt an Index ersetzen (Index außerhalb = Fehler)
    ReplaceControlPoint { index: usize, position: DVec2 },
    /// Kontrollpunkt anhängen (nur im Platzier-Modus wirksam)
    AppendControlPoint { position: DVec2 },
    /// Kontrollpolygon leeren
    ClearControlPoints,
    /// Kontrollpolygon aus den Optionen laden
    LoadDefaultControlPoints,
    /// Parameter setzen: geklemmt, optional eingerastet und/oder animiert
    SetParameter { t: f64, snap: bool, animate: bool },
    /// Auflösung setzen (rastet `t` neu ein)
    SetResolution { resolution: u32 },
    /// Darstellungsmodus setzen
    SetRenderMode { mode: RenderMode },
    /// Platzier-Modus setzen
    SetPlacingPoints { enabled: bool },
    /// Playback starten (bei `t = 1` von vorn)
    StartPlayback,
    /// Playback anhalten
    StopPlayback,
    /// Playback um `dt` Sekunden fortschreiben
    AdvancePlayback { dt: f64 },
    /// Parameter-Easing um `dt` Sekunden fortschreiben
    AdvanceAnimation { dt: f64 },
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// `true` für Commands, die jeden Frame anfallen und nicht geloggt werden.
    pub fn is_frame_tick(&self) -> bool {
        matches!(
            self,
            AppCommand::AdvancePlayback { .. } | AppCommand::AdvanceAnimation { .. }
        )
    }
}
