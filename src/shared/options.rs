//! Zentrale Konfiguration für den Bézier-Tiers-Viewer.
//!
//! `ViewerOptions` wird beim Start aus einer TOML-Datei gelesen und danach nur
//! noch gelesen. Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Resolution, RESOLUTION_MAX, RESOLUTION_MIN};
use glam::DVec2;
use serde::{Deserialize, Serialize};

// ── Parameter & Auflösung ───────────────────────────────────────────

/// Standard-Auflösung der Referenzkurve beim Start.
pub const RESOLUTION_DEFAULT: u32 = RESOLUTION_MAX;

// ── Easing & Playback ───────────────────────────────────────────────

/// Antwortzeit der Feder (Sekunden bis zum Einschwingen).
pub const EASING_RESPONSE: f64 = 0.5;
/// Dämpfungsgrad der Feder (`1.0` = kritisch gedämpft, kein Überschwingen).
pub const EASING_DAMPING_FRACTION: f64 = 1.0;
/// Playback-Geschwindigkeit in `t`-Einheiten pro Sekunde.
pub const PLAYBACK_SPEED: f64 = 0.25;

// ── Anker ──────────────────────────────────────────────────────────

/// Radius der Kontrollpunkt-Anker in Pixeln.
pub const CONTROL_ANCHOR_RADIUS: f32 = 9.0;
/// Radius der Lerp-Anker (Tier-Punkte) in Pixeln.
pub const LERP_ANCHOR_RADIUS: f32 = 4.5;
/// Radius des Live-Punkts auf der Kurve.
pub const LIVE_POINT_RADIUS: f32 = 7.0;

// ── Linien ─────────────────────────────────────────────────────────

/// Linienstärke der animierten Vordergrund-Kurve.
pub const CURVE_WIDTH: f32 = 4.0;
/// Linienstärke der grauen Referenzkurve.
pub const REFERENCE_WIDTH: f32 = 2.0;
/// Linienstärke des Kontrollpolygons.
pub const POLYGON_WIDTH: f32 = 1.5;
/// Linienstärke der Tier-Segmente und Vektoren.
pub const CONSTRUCTION_WIDTH: f32 = 1.5;
/// Strichlänge gestrichelter Linien.
pub const DASH_LENGTH: f32 = 6.0;
/// Lückenlänge gestrichelter Linien.
pub const GAP_LENGTH: f32 = 4.0;
/// Farbe der Referenzkurve (RGBA: Grau).
pub const REFERENCE_COLOR: [f32; 4] = [0.55, 0.55, 0.55, 1.0];

// ── Farben ─────────────────────────────────────────────────────────

/// HSV-Sättigung der Hue-Farben.
pub const HUE_SATURATION: f32 = 0.85;
/// HSV-Helligkeit der Hue-Farben.
pub const HUE_BRIGHTNESS: f32 = 0.95;

/// Kontrollpolygon beim Start: kubische S-Kurve.
pub const DEFAULT_CONTROL_POINTS: [[f64; 2]; 4] = [
    [100.0, 100.0],
    [250.0, 100.0],
    [250.0, 400.0],
    [400.0, 400.0],
];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start konfigurierbaren Viewer-Optionen.
/// Wird als `bezier_tiers.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Auflösung ───────────────────────────────────────────────
    /// Auflösung beim Start
    pub resolution_default: u32,
    /// Untere Grenze des Auflösungs-Sliders
    pub resolution_min: u32,
    /// Obere Grenze des Auflösungs-Sliders
    pub resolution_max: u32,

    // ── Easing & Playback ───────────────────────────────────────
    /// Antwortzeit der Feder in Sekunden (`≤ 0` = sofort)
    pub easing_response: f64,
    /// Dämpfungsgrad der Feder
    pub easing_damping_fraction: f64,
    /// Playback-Geschwindigkeit (`t` pro Sekunde)
    pub playback_speed: f64,

    // ── Anker ───────────────────────────────────────────────────
    pub control_anchor_radius: f32,
    pub lerp_anchor_radius: f32,
    pub live_point_radius: f32,

    // ── Linien ──────────────────────────────────────────────────
    pub curve_width: f32,
    pub reference_width: f32,
    pub polygon_width: f32,
    pub construction_width: f32,
    pub dash_length: f32,
    pub gap_length: f32,
    /// Farbe der Referenzkurve (RGBA)
    pub reference_color: [f32; 4],

    // ── Farben ──────────────────────────────────────────────────
    /// HSV-Sättigung aller Hue-Farben
    pub hue_saturation: f32,
    /// HSV-Helligkeit aller Hue-Farben
    pub hue_brightness: f32,

    // ── Start-Kurve ─────────────────────────────────────────────
    /// Kontrollpunkte beim Start und für "Standardkurve"
    pub default_control_points: Vec<DVec2>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            resolution_default: RESOLUTION_DEFAULT,
            resolution_min: RESOLUTION_MIN,
            resolution_max: RESOLUTION_MAX,

            easing_response: EASING_RESPONSE,
            easing_damping_fraction: EASING_DAMPING_FRACTION,
            playback_speed: PLAYBACK_SPEED,

            control_anchor_radius: CONTROL_ANCHOR_RADIUS,
            lerp_anchor_radius: LERP_ANCHOR_RADIUS,
            live_point_radius: LIVE_POINT_RADIUS,

            curve_width: CURVE_WIDTH,
            reference_width: REFERENCE_WIDTH,
            polygon_width: POLYGON_WIDTH,
            construction_width: CONSTRUCTION_WIDTH,
            dash_length: DASH_LENGTH,
            gap_length: GAP_LENGTH,
            reference_color: REFERENCE_COLOR,

            hue_saturation: HUE_SATURATION,
            hue_brightness: HUE_BRIGHTNESS,

            default_control_points: DEFAULT_CONTROL_POINTS
                .iter()
                .map(|&[x, y]| DVec2::new(x, y))
                .collect(),
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text; fehlende Schlüssel erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_tiers"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_tiers.toml")
    }

    /// Gültiger Bereich des Auflösungs-Sliders.
    ///
    /// Liegt immer innerhalb von `[RESOLUTION_MIN, RESOLUTION_MAX]`, auch wenn
    /// die Datei vertauschte oder zu große Grenzen enthält.
    pub fn resolution_range(&self) -> std::ops::RangeInclusive<u32> {
        let min = Resolution::new(self.resolution_min).get();
        let max = Resolution::new(self.resolution_max).get();
        min.min(max)..=min.max(max)
    }

    /// Start-Auflösung, geklemmt auf den Slider-Bereich.
    pub fn initial_resolution(&self) -> Resolution {
        let range = self.resolution_range();
        Resolution::new(self.resolution_default.clamp(*range.start(), *range.end()))
    }
}
