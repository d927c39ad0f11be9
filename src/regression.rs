//! Preparation of step-change data for the straight-line fit
//!
//! The post-step cooling model predicts
//! `T_axial(t) - T_ext = C exp(k t)`, so plotting
//! `ln|T_axial - T_ext|` against time linearizes the response and the decay
//! constant becomes the slope of a straight line.

use ndarray::Array1;
use num_traits::Float;

use crate::config::Config;
use crate::experiment::StepChange;
use crate::propagation::{add_in_quadrature, ln_error};
use crate::{Error, Result};

/// The arrays a weighted straight-line fit consumes
///
/// All three series have the same length and every uncertainty is
/// non-negative; both invariants are enforced at construction.
#[derive(Clone, Debug)]
pub struct RegressionInput<E> {
    x: Array1<E>,
    y: Array1<E>,
    err_y: Array1<E>,
}

impl<E: Float> RegressionInput<E> {
    /// # Errors
    /// Fails if the series are empty, of unequal length, or if any
    /// uncertainty is negative.
    pub fn new(x: Array1<E>, y: Array1<E>, err_y: Array1<E>) -> Result<Self> {
        if x.is_empty() {
            return Err(Error::Empty);
        }
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                a: x.len(),
                b: y.len(),
            });
        }
        if x.len() != err_y.len() {
            return Err(Error::LengthMismatch {
                a: x.len(),
                b: err_y.len(),
            });
        }
        if let Some(index) = err_y.iter().position(|err| *err < E::zero()) {
            return Err(Error::NegativeUncertainty { index });
        }

        Ok(Self { x, y, err_y })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub const fn x(&self) -> &Array1<E> {
        &self.x
    }

    pub const fn y(&self) -> &Array1<E> {
        &self.y
    }

    pub const fn err_y(&self) -> &Array1<E> {
        &self.err_y
    }
}

/// Linearize a step-change experiment into regression arrays
///
/// For each sample, `x = t` and `y = ln|T_axial - T_ext|` with `T_ext` the
/// experiment's mean reference temperature. The fixed instrument
/// uncertainties on the two temperature channels combine in quadrature
/// through the subtraction, then pass through the logarithm rule with the
/// unsigned difference's logarithm as the derivative argument:
/// `err_y = err_diff / |ln|T_axial - T_ext||`.
///
/// The absolute value assumes the response never crosses the reference
/// temperature mid-experiment; only the degenerate arguments below are
/// rejected.
///
/// # Errors
/// Fails with [`Error::DegenerateSample`] naming the offending row when an
/// axial temperature equals the mean reference temperature exactly (`ln 0`
/// would poison the fit), or when the unsigned difference is exactly one
/// (its logarithm is zero, so the propagated error is undefined).
pub fn prepare<E: Float>(experiment: &StepChange<E>, config: &Config<E>) -> Result<RegressionInput<E>> {
    let samples = experiment.samples();
    let external = experiment.mean_reference_temperature();

    let err_difference = add_in_quadrature(
        config.axial_temperature_error,
        config.reference_temperature_error,
    );

    let mut y = Vec::with_capacity(samples.len());
    let mut err_y = Vec::with_capacity(samples.len());

    for (index, &axial) in samples.axial_temperature().iter().enumerate() {
        let difference = axial - external;
        if difference == E::zero() {
            return Err(Error::DegenerateSample { index });
        }

        let linearized = difference.abs().ln();
        let propagated = ln_error(linearized, err_difference)
            .map_err(|_| Error::DegenerateSample { index })?;

        y.push(linearized);
        err_y.push(propagated);
    }

    RegressionInput::new(
        samples.time().clone(),
        Array1::from(y),
        Array1::from(err_y),
    )
}
