//! Darstellungsmodi der Konstruktion (shared zwischen App, UI und Renderer).

/// Welche Konstruktion über der Kurve gezeichnet wird.
///
/// Beeinflusst nur die Darstellung, nie den Kurvenwert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// De-Casteljau-Tiers mit Lerp-Ankern
    #[default]
    LerpTiers,
    /// Bernstein-gewichtete Vektoren, alle vom Schwerpunkt aus
    VectorExpanded,
    /// Bernstein-gewichtete Vektoren, aneinandergehängt
    VectorStacked,
}

impl RenderMode {
    /// Alle Modi in Anzeige-Reihenfolge.
    pub const ALL: [RenderMode; 3] = [
        RenderMode::LerpTiers,
        RenderMode::VectorExpanded,
        RenderMode::VectorStacked,
    ];

    /// Beschriftung für den Modus-Picker.
    pub fn label(self) -> &'static str {
        match self {
            RenderMode::LerpTiers => "Lerp Tiers",
            RenderMode::VectorExpanded => "Vectors (expanded)",
            RenderMode::VectorStacked => "Vectors (stacked)",
        }
    }
}
