//! Vektorzerlegung der Bernstein-Summe relativ zum Schwerpunkt der Kontrollpunkte.
//!
//! - **Expanded:** je Kontrollpunkt ein Vektor vom Schwerpunkt aus, gekürzt auf
//!   sein Bernstein-Gewicht.
//! - **Stacked:** dieselben gewichteten Vektoren aneinandergehängt; das Ende der
//!   Kette ist der Kurvenpunkt.

use super::bernstein::bernstein_weights;
use super::lerp::Lerpable;
use glam::DVec2;

/// Arithmetisches Mittel aller Punkte (`None` für leere Folge).
pub fn centroid<T: Lerpable>(points: &[T]) -> Option<T> {
    let (first, rest) = points.split_first()?;
    let sum = rest.iter().fold(*first, |acc, p| acc + *p);
    Some(sum * (1.0 / points.len() as f64))
}

/// Ein gewichteter Vektor der Expanded-Darstellung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedVector {
    /// Index des zugehörigen Kontrollpunkts
    pub index: usize,
    /// Kontrollpunkt, auf den der ungekürzte Vektor zeigt
    pub target: DVec2,
    /// Bernstein-Gewicht bei aktuellem `t`
    pub weight: f64,
    /// Spitze des gekürzten Vektors: `origin + (target − origin) · weight`
    pub tip: DVec2,
}

/// Expanded-Zerlegung: alle Vektoren starten im Schwerpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedDecomposition {
    pub origin: DVec2,
    pub vectors: Vec<WeightedVector>,
}

/// Stacked-Zerlegung: laufende Summe ab Schwerpunkt (`n + 1` Punkte).
#[derive(Debug, Clone, PartialEq)]
pub struct StackedDecomposition {
    pub origin: DVec2,
    pub points: Vec<DVec2>,
}

impl StackedDecomposition {
    /// Endpunkt der Kette (entspricht dem Kurvenpunkt bei `t`).
    pub fn end(&self) -> DVec2 {
        self.points.last().copied().unwrap_or(self.origin)
    }

    /// Segmente `(start, end)` der Kette; Segment `i` gehört zu Kontrollpunkt `i`.
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Eine der beiden Vektor-Darstellungen, je nach gewähltem Modus.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorDecomposition {
    Expanded(ExpandedDecomposition),
    Stacked(StackedDecomposition),
}

impl VectorDecomposition {
    /// Gemeinsamer Ursprung (Schwerpunkt der Kontrollpunkte).
    pub fn origin(&self) -> DVec2 {
        match self {
            Self::Expanded(expanded) => expanded.origin,
            Self::Stacked(stacked) => stacked.origin,
        }
    }
}

/// Baut die Expanded-Zerlegung (`None` ohne Kontrollpunkte).
pub fn expanded_decomposition(control: &[DVec2], t: f64) -> Option<ExpandedDecomposition> {
    let origin = centroid(control)?;
    let weights = bernstein_weights(control.len(), t);

    let vectors = control
        .iter()
        .zip(weights)
        .enumerate()
        .map(|(index, (&target, weight))| WeightedVector {
            index,
            target,
            weight,
            tip: origin + (target - origin) * weight,
        })
        .collect();

    Some(ExpandedDecomposition { origin, vectors })
}

/// Baut die Stacked-Zerlegung (`None` ohne Kontrollpunkte).
pub fn stacked_decomposition(control: &[DVec2], t: f64) -> Option<StackedDecomposition> {
    let origin = centroid(control)?;
    let weights = bernstein_weights(control.len(), t);

    let mut points = Vec::with_capacity(control.len() + 1);
    points.push(origin);
    let mut current = origin;
    for (&p, w) in control.iter().zip(weights) {
        current += (p - origin) * w;
        points.push(current);
    }

    Some(StackedDecomposition { origin, points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::de_casteljau::curve_point;
    use approx::assert_relative_eq;

    fn cubic() -> Vec<DVec2> {
        vec![
            DVec2::new(100.0, 100.0),
            DVec2::new(250.0, 100.0),
            DVec2::new(250.0, 400.0),
            DVec2::new(400.0, 400.0),
        ]
    }

    #[test]
    fn centroid_is_arithmetic_mean() {
        let c = centroid(&cubic()).unwrap();
        assert_relative_eq!(c.x, 250.0);
        assert_relative_eq!(c.y, 250.0);
        assert!(centroid::<DVec2>(&[]).is_none());
        assert_relative_eq!(centroid(&[1.0_f64, 2.0, 6.0]).unwrap(), 3.0);
    }

    #[test]
    fn stacked_end_equals_curve_point() {
        let control = cubic();
        for k in 0..=16 {
            let t = k as f64 / 16.0;
            let stacked = stacked_decomposition(&control, t).unwrap();
            let expected = curve_point(&control, t).unwrap();

            assert_eq!(stacked.points.len(), control.len() + 1);
            assert_relative_eq!(stacked.end().x, expected.x, epsilon = 1e-9);
            assert_relative_eq!(stacked.end().y, expected.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn stacked_single_point_ends_on_that_point() {
        let p = DVec2::new(-4.0, 9.0);
        let stacked = stacked_decomposition(&[p], 0.3).unwrap();
        assert_eq!(stacked.points, vec![p, p]);
        assert_eq!(stacked.segments().count(), 1);
    }

    #[test]
    fn expanded_vectors_are_trimmed_by_weight() {
        let control = cubic();
        let expanded = expanded_decomposition(&control, 0.0).unwrap();

        assert_eq!(expanded.vectors.len(), 4);
        // Bei t = 0 trägt nur der erste Punkt Gewicht
        assert_eq!(expanded.vectors[0].weight, 1.0);
        assert_eq!(expanded.vectors[0].tip, control[0]);
        for v in &expanded.vectors[1..] {
            assert_eq!(v.weight, 0.0);
            assert_eq!(v.tip, expanded.origin);
        }
    }

    #[test]
    fn expanded_tips_sum_to_curve_point() {
        let control = cubic();
        let t = 0.35;
        let expanded = expanded_decomposition(&control, t).unwrap();
        let sum = expanded
            .vectors
            .iter()
            .fold(expanded.origin, |acc, v| acc + (v.tip - expanded.origin));
        let expected = curve_point(&control, t).unwrap();

        assert_relative_eq!(sum.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(sum.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn empty_control_yields_nothing() {
        assert!(expanded_decomposition(&[], 0.5).is_none());
        assert!(stacked_decomposition(&[], 0.5).is_none());
    }
}
