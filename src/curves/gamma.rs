use super::Curve;

pub const GAMMA: f64 = 2.2;

#[derive(Debug, Clone, Copy)]
pub struct GammaCurve {
    gamma: f64,
}

impl Default for GammaCurve {
    fn default() -> Self {
        Self { gamma: GAMMA }
    }
}

impl Curve for GammaCurve {
    fn apply(&self, input: f64) -> f64 {
        input.powf(self.gamma).clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "gamma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gamma() {
        let curve = GammaCurve::default();
        assert_eq!(curve.gamma, GAMMA);
        assert_eq!(curve.name(), "gamma");
    }

    #[test]
    fn test_apply_endpoints() {
        let curve = GammaCurve::default();
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(1.0), 1.0);
    }

    #[test]
    fn test_apply_darkens_midtones() {
        let curve = GammaCurve::default();
        let mid = curve.apply(0.5);
        assert!(mid < 0.5);
        assert!((mid - 0.5f64.powf(2.2)).abs() < 1e-12);
    }
}
