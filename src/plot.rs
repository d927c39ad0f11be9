//! Diagnostic rendering of a fit against its observations
//!
//! Presentation only: nothing here feeds back into the estimation pipeline.

use std::path::Path;

use plotters::prelude::*;

use crate::fit::FitResult;
use crate::{Error, Result};

/// Render observed points and the fitted line to a PNG at `path`
///
/// # Errors
/// Fails if the backend cannot write the image or lay out the chart.
pub fn render(fit: &FitResult<f64>, path: &Path, title: &str) -> Result<()> {
    let (x, y) = fit.observations();

    let (x_min, x_max) = bounds(x.iter().copied());
    let fitted = [fit.predict(x_min), fit.predict(x_max)];
    let (y_min, y_max) = bounds(y.iter().copied().chain(fitted));
    let y_pad = 0.05f64.mul_add(y_max - y_min, 1.0e-6);

    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_min..x_max, (y_min - y_pad)..(y_max + y_pad))
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("time")
        .y_desc("ln|T_axial - T_ext|")
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(
            x.iter()
                .zip(y)
                .map(|(&x, &y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(plot_error)?
        .label("observed");

    chart
        .draw_series(LineSeries::new(
            [x_min, x_max].into_iter().map(|x| (x, fit.predict(x))),
            &RED,
        ))
        .map_err(plot_error)?
        .label("fitted");

    root.present().map_err(plot_error)?;
    Ok(())
}

fn plot_error(error: impl std::fmt::Display) -> Error {
    Error::Plot(error.to_string())
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}
