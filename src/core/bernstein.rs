//! Bernstein-Basis: Binomialkoeffizienten, Gewichte und gewichtete Summe.

use super::lerp::Lerpable;

/// `n!` als `f64` (`0! = 1`).
pub fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// Binomialkoeffizient `C(n, k)`; `0` für `k > n`.
///
/// Multiplikativ über das kleinere `k` berechnet, damit hohe Grade nicht
/// über `n!` nach `inf` laufen.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (1..=k).fold(1.0, |c, i| c * (n - k + i) as f64 / i as f64)
}

/// Bernstein-Basispolynom `b(v, n)(t) = C(n, v) · t^v · (1−t)^(n−v)`.
///
/// Für Grad `n = 0` ergibt sich `1` (einziger Kontrollpunkt trägt volles Gewicht).
pub fn bernstein(v: usize, n: usize, t: f64) -> f64 {
    if v > n {
        return 0.0;
    }
    binomial(n, v) * t.powi(v as i32) * (1.0 - t).powi((n - v) as i32)
}

/// Gewichte aller `count` Kontrollpunkte bei `t` (Grad `count − 1`).
pub fn bernstein_weights(count: usize, t: f64) -> Vec<f64> {
    let Some(degree) = count.checked_sub(1) else {
        return Vec::new();
    };
    (0..count).map(|v| bernstein(v, degree, t)).collect()
}

/// Kurvenpunkt als gewichtete Summe `Σ control[i] · b(i, n−1)(t)`.
///
/// Liefert `None` für eine leere Folge. Für einen einzelnen Punkt ist das
/// Ergebnis dieser Punkt selbst.
pub fn bernstein_point<T: Lerpable>(control: &[T], t: f64) -> Option<T> {
    let (first, rest) = control.split_first()?;
    let weights = bernstein_weights(control.len(), t);
    let sum = rest
        .iter()
        .zip(&weights[1..])
        .fold(*first * weights[0], |acc, (p, w)| acc + *p * *w);
    Some(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::de_casteljau::TierPyramid;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use glam::DVec2;

    #[test]
    fn factorial_small_values() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(2), 2.0);
        assert_eq!(factorial(3), 6.0);
        assert_eq!(factorial(5), 120.0);
    }

    #[test]
    fn binomial_rows() {
        let row: Vec<f64> = (0..=4).map(|k| binomial(4, k)).collect();
        assert_eq!(row, vec![1.0, 4.0, 6.0, 4.0, 1.0]);
        assert_eq!(binomial(3, 5), 0.0);
    }

    #[test]
    fn binomial_stays_finite_for_high_degrees() {
        assert_eq!(binomial(10, 3), 120.0);
        assert_eq!(binomial(10, 7), 120.0);
        assert_relative_eq!(binomial(200, 100), 9.054851465610328e58, max_relative = 1e-12);
        for n in [171, 172, 200, 500] {
            for k in 0..=n {
                assert!(binomial(n, k).is_finite(), "C({n}, {k}) nicht endlich");
            }
        }
    }

    #[test]
    fn degree_zero_weight_is_one() {
        assert_eq!(bernstein(0, 0, 0.0), 1.0);
        assert_eq!(bernstein(0, 0, 0.7), 1.0);
        assert_eq!(bernstein_weights(1, 0.3), vec![1.0]);
        assert!(bernstein_weights(0, 0.3).is_empty());
    }

    #[test]
    fn weights_form_partition_of_unity() {
        for count in 1..=12 {
            for k in 0..=10 {
                let t = k as f64 / 10.0;
                let sum: f64 = bernstein_weights(count, t).iter().sum();
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn weights_at_ends_select_first_and_last() {
        let at_start = bernstein_weights(4, 0.0);
        let at_end = bernstein_weights(4, 1.0);
        assert_eq!(at_start, vec![1.0, 0.0, 0.0, 0.0]);
        assert_eq!(at_end, vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn quadratic_bernstein_point_at_half() {
        let control = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
        ];
        let p = bernstein_point(&control, 0.5).unwrap();
        assert_relative_eq!(p.x, 7.5);
        assert_relative_eq!(p.y, 2.5);
    }

    #[test]
    fn bernstein_matches_de_casteljau() {
        let control: Vec<DVec2> = (0..9)
            .map(|i| {
                let a = i as f64 * 0.7;
                DVec2::new(a.cos() * 100.0 + i as f64 * 13.0, a.sin() * 80.0 - 40.0)
            })
            .collect();

        for n in 2..=control.len() {
            for k in 0..=32 {
                let t = k as f64 / 32.0;
                let expected = TierPyramid::build(&control[..n], t).terminal().unwrap();
                let actual = bernstein_point(&control[..n], t).unwrap();
                assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9, max_relative = 1e-9);
                assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn bernstein_point_degenerate() {
        assert!(bernstein_point::<DVec2>(&[], 0.5).is_none());
        let single = DVec2::new(3.0, 4.0);
        assert_eq!(bernstein_point(&[single], 0.5), Some(single));
    }
}
