//! First-order propagation of measurement uncertainty
//!
//! Each function maps the uncertainties of independent inputs through one
//! elementary operation. Propagation is linearized: the output uncertainty is
//! the input uncertainty scaled by the magnitude of the operation's partial
//! derivative at the measured value.

use num_traits::Float;

use crate::{Error, Result};

/// Uncertainty of a sum (or difference) `z = a ± b` of independent inputs
///
/// $$
///     \sigma_z = \sqrt{\sigma_a^2 + \sigma_b^2}
/// $$
pub fn add_in_quadrature<E: Float>(err_a: E, err_b: E) -> E {
    (err_a.powi(2) + err_b.powi(2)).sqrt()
}

/// Uncertainty of a natural logarithm `z = ln|a|`
///
/// The derivative of the logarithm is `1/a`, so to first order
/// `sigma_z = sigma_a / |a|`. A zero argument leaves the propagated error
/// undefined and is rejected with [`Error::DegenerateLogInput`] rather than
/// returning a NaN.
///
/// # Errors
/// Fails if `a` is zero.
pub fn ln_error<E: Float>(a: E, err_a: E) -> Result<E> {
    if a == E::zero() {
        return Err(Error::DegenerateLogInput);
    }
    Ok(err_a / a.abs())
}
