//! Wertebereich von Kurvenparameter `t` und Abtast-Auflösung.
//!
//! Policy: `t` wird im Core immer auf `[0, 1]` geklemmt (`NaN` → `0`), die
//! Auflösung auf `[RESOLUTION_MIN, RESOLUTION_MAX]`. Ungültige Werte stammen
//! aus Slider-Rundung und sind kein Fehler.

/// Kleinste Auflösung (Start- und Endpunkt).
pub const RESOLUTION_MIN: u32 = 2;
/// Größte Auflösung (obere Grenze des Auflösungs-Sliders).
pub const RESOLUTION_MAX: u32 = 128;

/// Klemmt `t` auf `[0, 1]`; `NaN` wird zu `0`.
pub fn clamp_parameter(t: f64) -> f64 {
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

/// Rastet `t` auf das nächste Vielfache von `1 / resolution` ein (inkl. Klemmen).
pub fn snap_parameter(t: f64, resolution: Resolution) -> f64 {
    let r = resolution.as_f64();
    clamp_parameter((clamp_parameter(t) * r).round() / r)
}

/// Abtast-Auflösung der Kurve (Anzahl Segmente der Referenzkurve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution(u32);

impl Resolution {
    /// Erstellt eine Auflösung, geklemmt auf den gültigen Bereich.
    pub fn new(value: u32) -> Self {
        Self(value.clamp(RESOLUTION_MIN, RESOLUTION_MAX))
    }

    /// Rohwert als Ganzzahl.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Rohwert als `f64` für Parameter-Arithmetik.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Parameterwert der Abtastung `k` (`k / R`).
    pub fn sample_parameter(self, k: u32) -> f64 {
        k as f64 / self.as_f64()
    }

    /// Anzahl vollständiger Abtastschritte bis einschließlich `t`.
    ///
    /// Größtes `k` mit `sample_parameter(k) ≤ t`. Der Schätzwert `⌊t·R⌋` wird
    /// gegen die tatsächlichen Abtaststellen korrigiert, da `t·R` in beide
    /// Richtungen um eine Stelle danebenliegen kann.
    pub fn steps_until(self, t: f64) -> u32 {
        let t = clamp_parameter(t);
        let mut steps = ((t * self.as_f64()).floor() as u32).min(self.0);
        if steps > 0 && self.sample_parameter(steps) > t {
            steps -= 1;
        }
        if steps < self.0 && self.sample_parameter(steps + 1) <= t {
            steps += 1;
        }
        steps
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self(RESOLUTION_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamp_parameter_keeps_domain() {
        assert_eq!(clamp_parameter(-0.5), 0.0);
        assert_eq!(clamp_parameter(1.5), 1.0);
        assert_eq!(clamp_parameter(0.25), 0.25);
        assert_eq!(clamp_parameter(f64::NAN), 0.0);
        assert_eq!(clamp_parameter(f64::INFINITY), 1.0);
    }

    #[test]
    fn resolution_is_clamped() {
        assert_eq!(Resolution::new(0).get(), RESOLUTION_MIN);
        assert_eq!(Resolution::new(1).get(), RESOLUTION_MIN);
        assert_eq!(Resolution::new(64).get(), 64);
        assert_eq!(Resolution::new(10_000).get(), RESOLUTION_MAX);
        assert_eq!(Resolution::default().get(), 128);
    }

    #[test]
    fn snap_rounds_to_nearest_step() {
        let r = Resolution::new(4);
        assert_relative_eq!(snap_parameter(0.3, r), 0.25);
        assert_relative_eq!(snap_parameter(0.4, r), 0.5);
        assert_relative_eq!(snap_parameter(0.99, r), 1.0);
        assert_relative_eq!(snap_parameter(-3.0, r), 0.0);
        assert_relative_eq!(snap_parameter(7.0, r), 1.0);
    }

    #[test]
    fn steps_until_tolerates_snapped_values() {
        let r = Resolution::new(10);
        for k in 0..=10 {
            let t = snap_parameter(k as f64 / 10.0, r);
            assert_eq!(r.steps_until(t), k);
        }
        assert_eq!(r.steps_until(0.55), 5);
        assert_eq!(r.steps_until(2.0), 10);
    }

    #[test]
    fn steps_until_never_passes_t() {
        for value in [3, 7, 10, 49, 128] {
            let r = Resolution::new(value);
            for k in 1..=r.get() {
                let sample = r.sample_parameter(k);
                let just_below = f64::from_bits(sample.to_bits() - 1);
                for t in [sample - 1e-10, sample - 1e-12, just_below, sample] {
                    let steps = r.steps_until(t);
                    assert!(r.sample_parameter(steps) <= t, "R = {value}, t = {t}");
                    if steps < r.get() {
                        assert!(r.sample_parameter(steps + 1) > t, "R = {value}, t = {t}");
                    }
                }
                assert_eq!(r.steps_until(sample), k);
                assert_eq!(r.steps_until(sample - 1e-10), k - 1);
            }
        }
    }
}
