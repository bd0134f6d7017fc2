//! De-Casteljau-Konstruktion: Tier-Pyramide aus wiederholter paarweiser Interpolation.

use super::lerp::{lerp, lerp_pairs, Lerpable};

/// Alle Zwischenstufen der De-Casteljau-Rekursion für ein festes `t`.
///
/// Tier 0 ist die Eingabefolge selbst, jedes weitere Tier ist um eins kürzer,
/// das letzte Tier enthält genau den Kurvenpunkt bei `t`.
/// Bei weniger als zwei Eingabewerten besteht die Pyramide aus einem einzigen
/// leeren Tier (keine Kurve definiert).
#[derive(Debug, Clone, PartialEq)]
pub struct TierPyramid<T> {
    tiers: Vec<Vec<T>>,
}

impl<T: Lerpable> TierPyramid<T> {
    /// Baut die vollständige Pyramide für `values` bei Parameter `t`.
    pub fn build(values: &[T], t: f64) -> Self {
        if values.len() < 2 {
            return Self {
                tiers: vec![Vec::new()],
            };
        }

        let mut tiers = Vec::with_capacity(values.len());
        tiers.push(values.to_vec());
        while let Some(last) = tiers.last() {
            if last.len() <= 1 {
                break;
            }
            let next = lerp_pairs(last, t);
            tiers.push(next);
        }

        Self { tiers }
    }

    /// Der Kurvenpunkt (einziges Element des letzten Tiers), sofern definiert.
    pub fn terminal(&self) -> Option<T> {
        match self.tiers.last() {
            Some(tier) if tier.len() == 1 => Some(tier[0]),
            _ => None,
        }
    }

    /// Alle Tier-Elemente in einer flachen Liste (Tier 0 zuerst).
    pub fn flattened(&self) -> Vec<T> {
        self.tiers.iter().flatten().copied().collect()
    }
}

impl<T> TierPyramid<T> {
    /// Read-only Sicht auf alle Tiers.
    pub fn tiers(&self) -> &[Vec<T>] {
        &self.tiers
    }

    /// Anzahl der Tiers inkl. Terminal-Tier (`n` für `n ≥ 2` Eingabewerte).
    ///
    /// Im degenerierten Fall `0`, obwohl intern ein leeres Tier gehalten wird.
    pub fn depth(&self) -> usize {
        if self.is_degenerate() {
            0
        } else {
            self.tiers.len()
        }
    }

    /// `true`, wenn keine Kurve definiert ist (weniger als zwei Eingabewerte).
    pub fn is_degenerate(&self) -> bool {
        self.tiers.first().is_none_or(|tier| tier.is_empty())
    }
}

/// Evaluiert nur den Kurvenpunkt bei `t`, ohne die Zwischenstufen aufzubewahren.
///
/// Der Puffer wird pro Aufruf frisch aus `values` aufgebaut und in-place
/// reduziert. Liefert `None` bei weniger als zwei Werten.
pub fn curve_point<T: Lerpable>(values: &[T], t: f64) -> Option<T> {
    if values.len() < 2 {
        return None;
    }

    let mut buffer = values.to_vec();
    let mut n = buffer.len();
    while n > 1 {
        for i in 0..(n - 1) {
            buffer[i] = lerp(buffer[i], buffer[i + 1], t);
        }
        n -= 1;
    }

    Some(buffer[0])
}

/// Hue-Seitenkanal: Wert `i / n` für jeden der `n` Kontrollpunkte.
pub fn hue_values(count: usize) -> Vec<f64> {
    (0..count).map(|i| i as f64 / count as f64).collect()
}

/// Hue-Pyramide parallel zur Punkt-Pyramide gleicher Länge.
pub fn hue_pyramid(count: usize, t: f64) -> TierPyramid<f64> {
    TierPyramid::build(&hue_values(count), t)
}

/// Interpolierter Hue-Wert des Kurvenpunkts bei `t` (`0.0` wenn keine Kurve).
pub fn hue_at(count: usize, t: f64) -> f64 {
    curve_point(&hue_values(count), t).unwrap_or(0.0)
}
