use crate::Fp;

/// Tolerances and resolver tuning shared by the collision tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Slack allowed by the distance-sum test in `point_on_seg`. Absorbs rounding from the square roots
    /// of integer inputs while still rejecting off-segment points.
    pub line_epsilon: f64,
    /// A resolution whose per-axis discrepancy from the intended displacement exceeds this multiple of the
    /// intended magnitude is flagged as teleporting.
    pub teleport_ratio: Fp,
}

impl Config {
    pub const DEFAULT: Config = Config {
        line_epsilon: 1e-4,
        teleport_ratio: 1.5,
    };

    #[inline]
    pub fn with_line_epsilon(self, line_epsilon: f64) -> Config {
        Config { line_epsilon, ..self }
    }
    #[inline]
    pub fn with_teleport_ratio(self, teleport_ratio: Fp) -> Config {
        Config { teleport_ratio, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}
