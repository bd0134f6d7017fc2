//! Feder-Easing für den dargestellten Kurvenparameter.
//!
//! Der Zielwert `t` im State springt sofort; die Darstellung folgt ihm über
//! einen gedämpften harmonischen Oszillator. Die Lösung ist geschlossen, damit
//! große Frame-Zeiten nicht instabil werden.

/// Konfiguration einer Feder (Antwortzeit + Dämpfungsgrad).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Periode der ungedämpften Schwingung in Sekunden; `≤ 0` = sofort
    pub response: f64,
    /// `1.0` kritisch gedämpft, `< 1.0` unterdämpft, `> 1.0` überdämpft
    pub damping_fraction: f64,
}

impl AnimationConfig {
    pub fn spring(response: f64, damping_fraction: f64) -> Self {
        Self {
            response,
            damping_fraction,
        }
    }

    /// Ohne Animation: Wert springt direkt auf das Ziel.
    pub fn immediate() -> Self {
        Self::spring(0.0, 1.0)
    }

    pub fn is_immediate(&self) -> bool {
        self.response.is_nan()
            || self.response <= 0.0
            || self.damping_fraction.is_nan()
            || self.damping_fraction <= 0.0
    }

    fn angular_frequency(&self) -> f64 {
        std::f64::consts::TAU / self.response
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::spring(
            crate::shared::options::EASING_RESPONSE,
            crate::shared::options::EASING_DAMPING_FRACTION,
        )
    }
}

/// Auslenkung unterhalb dieser Schwelle gilt als eingeschwungen.
const SETTLE_DISTANCE: f64 = 1e-5;
/// Geschwindigkeit unterhalb dieser Schwelle gilt als eingeschwungen.
const SETTLE_VELOCITY: f64 = 1e-4;
/// Toleranz, ab der die Dämpfung als kritisch behandelt wird.
const CRITICAL_EPSILON: f64 = 1e-6;

/// Federnd animierter Skalarwert mit Ziel.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterTween {
    config: AnimationConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl ParameterTween {
    /// Erstellt einen eingeschwungenen Tween bei `value`.
    pub fn new(config: AnimationConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    /// Aktuell dargestellter Wert.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// `true`, wenn Wert und Ziel übereinstimmen und keine Bewegung mehr ansteht.
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Setzt ein neues Ziel; die aktuelle Geschwindigkeit bleibt erhalten.
    pub fn retarget(&mut self, target: f64) {
        self.target = target;
        if self.config.is_immediate() {
            self.jump_to(target);
        }
    }

    /// Setzt Wert und Ziel ohne Animation.
    pub fn jump_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Schreibt die Feder um `dt` Sekunden fort.
    ///
    /// Gibt `true` zurück, solange die Animation noch läuft.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            return false;
        }
        if self.config.is_immediate() {
            self.jump_to(self.target);
            return false;
        }
        if dt.is_nan() || dt <= 0.0 {
            return true;
        }

        let omega = self.config.angular_frequency();
        let zeta = self.config.damping_fraction;
        let x0 = self.value - self.target;
        let v0 = self.velocity;

        let (x, v) = if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            let b = v0 + omega * x0;
            let decay = (-omega * dt).exp();
            ((x0 + b * dt) * decay, (v0 - omega * b * dt) * decay)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * dt).exp();
            let a = x0;
            let b = (v0 + zeta * omega * x0) / omega_d;
            let (sin, cos) = (omega_d * dt).sin_cos();
            let x = decay * (a * cos + b * sin);
            let v = decay
                * ((b * omega_d - zeta * omega * a) * cos
                    - (a * omega_d + zeta * omega * b) * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        if x.abs() < SETTLE_DISTANCE && v.abs() < SETTLE_VELOCITY {
            self.jump_to(self.target);
            return false;
        }

        self.value = self.target + x;
        self.velocity = v;
        true
    }
}
