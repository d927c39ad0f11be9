use std::fmt;

use num_traits::Float;

/// A measured or derived quantity together with its one-sigma uncertainty
///
/// This is the unit of propagation: every value moving through the pipeline
/// that carries an error bar is a `Measurement`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement<E> {
    pub value: E,
    pub uncertainty: E,
}

impl<E: Float> Measurement<E> {
    pub const fn new(value: E, uncertainty: E) -> Self {
        Self { value, uncertainty }
    }

    /// A quantity known exactly, with zero uncertainty
    pub fn exact(value: E) -> Self {
        Self {
            value,
            uncertainty: E::zero(),
        }
    }
}

impl<E: fmt::LowerExp> fmt::Display for Measurement<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5e} ± {:.5e}", self.value, self.uncertainty)
    }
}
