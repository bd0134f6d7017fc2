//! Lineare Interpolation über beliebige Vektorraum-artige Typen.

use std::ops::{Add, Mul, Sub};

/// Fähigkeit, linear interpoliert zu werden: Addition, Subtraktion, Skalierung mit `f64`.
///
/// Über eine Blanket-Implementierung automatisch für `f64` (Hue-Werte) und
/// `glam::DVec2` (Punkte) verfügbar.
pub trait Lerpable:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
}

impl<T> Lerpable for T where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>
{
}

/// `p0·(1−t) + p1·t`
///
/// Exakt bei `t = 0` (liefert `p0`) und `t = 1` (liefert `p1`).
/// Kein Clamping: der Aufrufer ist für den Wertebereich von `t` verantwortlich.
#[inline]
pub fn lerp<T: Lerpable>(p0: T, p1: T, t: f64) -> T {
    p0 * (1.0 - t) + p1 * t
}

/// Interpoliert alle benachbarten Paare einer Folge (Länge sinkt um eins).
pub fn lerp_pairs<T: Lerpable>(values: &[T], t: f64) -> Vec<T> {
    values.windows(2).map(|w| lerp(w[0], w[1], t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;

    #[test]
    fn lerp_is_exact_at_both_ends() {
        let p0 = DVec2::new(0.1, -3.7);
        let p1 = DVec2::new(1e6, 0.3);

        assert_eq!(lerp(p0, p1, 0.0), p0);
        assert_eq!(lerp(p0, p1, 1.0), p1);
        assert_eq!(lerp(0.25_f64, 0.75, 0.0), 0.25);
        assert_eq!(lerp(0.25_f64, 0.75, 1.0), 0.75);
    }

    #[test]
    fn lerp_midpoint_of_points() {
        let mid = lerp(DVec2::new(0.0, 0.0), DVec2::new(10.0, 4.0), 0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, 2.0);
    }

    #[test]
    fn lerp_does_not_clamp() {
        // Extrapolation ist erlaubt, Clamping liegt beim Aufrufer
        assert_relative_eq!(lerp(0.0_f64, 1.0, 2.0), 2.0);
        assert_relative_eq!(lerp(0.0_f64, 1.0, -1.0), -1.0);
    }

    #[test]
    fn lerp_pairs_shortens_by_one() {
        let values = [0.0_f64, 1.0, 3.0];
        let next = lerp_pairs(&values, 0.5);
        assert_eq!(next, vec![0.5, 2.0]);

        assert!(lerp_pairs::<f64>(&[1.0], 0.5).is_empty());
        assert!(lerp_pairs::<f64>(&[], 0.5).is_empty());
    }
}
