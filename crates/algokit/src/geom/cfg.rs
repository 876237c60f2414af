use crate::math::ZERO_EPS;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Componentwise slack for approximate equality.
    pub eps_zero: f64,
    /// Vectors whose length is `<=` this cannot be normalized.
    pub eps_length: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_zero: ZERO_EPS,
            eps_length: 0.0,
        }
    }
}
