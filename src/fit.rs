//! Straight-line least squares with optional inverse-variance weighting

use std::fmt;

use itertools::izip;
use ndarray::Array1;
use num_traits::Float;
use serde::Deserialize;

use crate::measurement::Measurement;
use crate::regression::RegressionInput;
use crate::{Error, Result};

/// How each point contributes to the fit
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Ordinary least squares: every point counts equally
    Unweighted,
    /// Each point weighted by `1 / err_y²`
    #[default]
    InverseVariance,
}

/// A fitted line `y = m x + c` with parameter uncertainties, retaining the
/// observed points for diagnostic comparison
#[derive(Clone, Debug)]
pub struct FitResult<E> {
    slope: Measurement<E>,
    intercept: Measurement<E>,
    x: Array1<E>,
    y: Array1<E>,
}

impl<E: Float> FitResult<E> {
    pub const fn slope(&self) -> Measurement<E> {
        self.slope
    }

    pub const fn intercept(&self) -> Measurement<E> {
        self.intercept
    }

    /// The fitted ordinate at `x`
    pub fn predict(&self, x: E) -> E {
        self.slope.value * x + self.intercept.value
    }

    /// The observed points the line was fitted through
    pub const fn observations(&self) -> (&Array1<E>, &Array1<E>) {
        (&self.x, &self.y)
    }
}

impl<E: Float + fmt::LowerExp> fmt::Display for FitResult<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fit over {} points: m = {}, c = {}",
            self.x.len(),
            self.slope,
            self.intercept
        )
    }
}

/// Fit the best straight line through the prepared regression data
///
/// The two-parameter problem is solved in closed form from the normal
/// equations. With inverse-variance weighting the parameter uncertainties
/// come straight from the normal-equations determinant; without weights they
/// are scaled by the residual variance `RSS / (n - 2)`. For exactly two
/// points the line is exact and the uncertainties are zero.
///
/// # Errors
/// Fails with [`Error::DegenerateAbscissa`] when fewer than two distinct `x`
/// values are present, since no line is then determined.
pub fn fit<E: Float>(input: &RegressionInput<E>, weighting: Weighting) -> Result<FitResult<E>> {
    let x = input.x();
    let y = input.y();

    let first = x[0];
    if !x.iter().any(|xi| *xi != first) {
        return Err(Error::DegenerateAbscissa);
    }

    let weights = match weighting {
        Weighting::Unweighted => Array1::from_elem(input.len(), E::one()),
        Weighting::InverseVariance => input.err_y().mapv(|err| E::one() / err.powi(2)),
    };

    let mut s = E::zero();
    let mut s_x = E::zero();
    let mut s_y = E::zero();
    let mut s_xx = E::zero();
    let mut s_xy = E::zero();
    for (&w, &xi, &yi) in izip!(&weights, x, y) {
        s = s + w;
        s_x = s_x + w * xi;
        s_y = s_y + w * yi;
        s_xx = s_xx + w * xi * xi;
        s_xy = s_xy + w * xi * yi;
    }

    let delta = s * s_xx - s_x * s_x;
    let slope = (s * s_xy - s_x * s_y) / delta;
    let intercept = (s_xx * s_y - s_x * s_xy) / delta;

    let (var_slope, var_intercept) = match weighting {
        Weighting::InverseVariance => (s / delta, s_xx / delta),
        Weighting::Unweighted => {
            let n = input.len();
            if n > 2 {
                let rss = izip!(x, y).fold(E::zero(), |acc, (&xi, &yi)| {
                    let residual = yi - (slope * xi + intercept);
                    acc + residual * residual
                });
                let residual_variance =
                    rss / E::from(n - 2).expect("sample count must fit in `E`");
                (
                    residual_variance * s / delta,
                    residual_variance * s_xx / delta,
                )
            } else {
                // Two points determine the line exactly
                (E::zero(), E::zero())
            }
        }
    };

    Ok(FitResult {
        slope: Measurement::new(slope, var_slope.sqrt()),
        intercept: Measurement::new(intercept, var_intercept.sqrt()),
        x: x.clone(),
        y: y.clone(),
    })
}
