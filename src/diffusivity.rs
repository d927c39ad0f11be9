//! Conversion of the fitted decay rate into a thermal diffusivity
//!
//! The transient radial conduction solution for a cylinder gives a leading
//! post-step mode decaying as `exp(-alpha lambda_1^2 t / r^2)`, so the slope
//! of the linearized response relates to the diffusivity by
//! `alpha = -(r^2 / lambda_1^2) m`.

use num_traits::Float;

use crate::measurement::Measurement;

/// First positive root of the zero-order Bessel function of the first kind
pub const LAMBDA_1: f64 = 2.405;

/// Thermal diffusivity from the fitted slope and the sample radius
///
/// The conversion is linear in the slope, so the slope uncertainty carries
/// through with the same factor: `err_alpha = (r^2 / lambda_1^2) err_m`.
/// A NaN or infinite slope from an undefined fit propagates into the result
/// rather than being masked.
pub fn estimate<E: Float>(slope: Measurement<E>, radius: E) -> Measurement<E> {
    let lambda_1 = E::from(LAMBDA_1).expect("lambda_1 must fit in `E`");
    let factor = radius.powi(2) / lambda_1.powi(2);

    Measurement::new(-factor * slope.value, factor * slope.uncertainty)
}
