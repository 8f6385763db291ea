pub mod gamma;

/// A transfer function over normalized intensities in `[0, 1]`.
pub trait Curve: Send + Sync {
    fn apply(&self, input: f64) -> f64;
    fn name(&self) -> &'static str;
}

pub use gamma::{GammaCurve, GAMMA};
