//! Abbildung skalarer Hue-Werte auf Farben.

use crate::shared::ViewerOptions;
use egui::ecolor::Hsva;
use egui::Color32;

/// Farbe zu einem Hue-Wert in `[0, 1)` mit Sättigung und Helligkeit aus den Optionen.
///
/// Werte außerhalb werden zyklisch umgebrochen.
pub fn hue_color(hue: f64, options: &ViewerOptions) -> Color32 {
    let h = hue.rem_euclid(1.0) as f32;
    Hsva::new(h, options.hue_saturation, options.hue_brightness, 1.0).into()
}

/// RGBA-Array (`0..1`, nicht vormultipliziert) → `Color32`.
pub fn rgba_color(rgba: [f32; 4]) -> Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_zero_is_red_and_wraps() {
        let options = ViewerOptions {
            hue_saturation: 1.0,
            hue_brightness: 1.0,
            ..Default::default()
        };

        let red = hue_color(0.0, &options);
        assert_eq!(red, Color32::from_rgb(255, 0, 0));
        assert_eq!(hue_color(1.0, &options), red);
        assert_ne!(hue_color(1.0 / 3.0, &options), red);
    }

    #[test]
    fn grey_reference_color() {
        assert_eq!(rgba_color([0.0, 0.0, 0.0, 1.0]), Color32::BLACK);
        assert_eq!(rgba_color([1.0, 1.0, 1.0, 1.0]), Color32::WHITE);
    }
}
