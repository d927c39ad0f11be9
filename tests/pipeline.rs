use std::path::PathBuf;

use ndarray_rand::rand::{Rng, SeedableRng};
use ndarray_rand::rand_distr::Normal;
use rand_isaac::Isaac64Rng;
use serde::Serialize;
use tempdir::TempDir;

use thermal_diffusivity::config::Config;
use thermal_diffusivity::diffusivity::{self, LAMBDA_1};
use thermal_diffusivity::experiment::StepChange;
use thermal_diffusivity::fit::{fit, Weighting};
use thermal_diffusivity::regression::prepare;
use thermal_diffusivity::{Error, Result};

#[derive(Serialize)]
struct Row {
    time: f64,
    axial_temperature: f64,
    surface_temperature: f64,
}

struct SyntheticExperiment {
    amplitude: f64,
    decay: f64,
    external: f64,
    noise: f64,
    num_samples: usize,
}

/// Write a synthetic step-change cooling run to `<dir>/<name>.csv`
///
/// The axial channel follows `T_ext + C exp(k t)` and both channels carry
/// optional gaussian read noise.
fn write_raw_data<R: Rng>(
    dir: &TempDir,
    name: &str,
    experiment: &SyntheticExperiment,
    rng: &mut R,
) -> Result<PathBuf> {
    let noise = Normal::new(0.0, experiment.noise).unwrap();
    let path = dir.path().join(format!("{name}.csv"));

    let mut wtr = csv::Writer::from_path(&path)?;
    for n in 0..experiment.num_samples {
        let time = n as f64;
        let row = Row {
            time,
            axial_temperature: experiment.external
                + experiment.amplitude * (experiment.decay * time).exp()
                + rng.sample(noise),
            surface_temperature: experiment.external + rng.sample(noise),
        };
        wtr.serialize(&row)?;
    }
    wtr.flush()?;

    Ok(path)
}

#[test]
fn noiseless_run_recovers_the_decay_constant_exactly() -> Result<()> {
    let tmp_dir = TempDir::new("noiseless_run_recovers_the_decay_constant_exactly").unwrap();
    let mut rng = Isaac64Rng::seed_from_u64(40);

    let synthetic = SyntheticExperiment {
        amplitude: -14.0,
        decay: -0.0123,
        external: 21.3,
        noise: 0.0,
        num_samples: 200,
    };
    let path = write_raw_data(&tmp_dir, "noiseless", &synthetic, &mut rng)?;
    let config: Config<f64> = Config::default();

    let experiment = StepChange::from_file(&path)?;
    approx::assert_relative_eq!(
        experiment.mean_reference_temperature(),
        synthetic.external,
        max_relative = 1.0e-12
    );

    let input = prepare(&experiment, &config)?;
    let lsfr = fit(&input, Weighting::Unweighted)?;

    approx::assert_relative_eq!(lsfr.slope().value, synthetic.decay, max_relative = 1.0e-6);
    approx::assert_relative_eq!(
        lsfr.intercept().value,
        synthetic.amplitude.abs().ln(),
        max_relative = 1.0e-6
    );

    let alpha = diffusivity::estimate(lsfr.slope(), config.radius);
    let expected = -(config.radius.powi(2) / LAMBDA_1.powi(2)) * synthetic.decay;
    approx::assert_relative_eq!(alpha.value, expected, max_relative = 1.0e-6);

    Ok(())
}

#[test]
fn noisy_run_recovers_the_decay_constant_within_tolerance() -> Result<()> {
    let tmp_dir = TempDir::new("noisy_run_recovers_the_decay_constant_within_tolerance").unwrap();
    let mut rng = Isaac64Rng::seed_from_u64(40);

    let decay = -0.0123;
    let synthetic = SyntheticExperiment {
        amplitude: -14.0,
        decay,
        // Keep the trace well clear of the reference so read noise cannot
        // produce an exact zero difference
        external: 21.3,
        noise: 1.0e-3,
        num_samples: 400,
    };
    let path = write_raw_data(&tmp_dir, "noisy", &synthetic, &mut rng)?;
    let config: Config<f64> = Config::default();

    let experiment = StepChange::from_file(&path)?;
    let input = prepare(&experiment, &config)?;
    let lsfr = fit(&input, config.weighting)?;

    approx::assert_relative_eq!(lsfr.slope().value, decay, max_relative = 1.0e-2);
    assert!(lsfr.slope().uncertainty > 0.0);

    let alpha = diffusivity::estimate(lsfr.slope(), config.radius);
    let expected = -(config.radius.powi(2) / LAMBDA_1.powi(2)) * decay;
    approx::assert_relative_eq!(alpha.value, expected, max_relative = 1.0e-2);
    assert!(alpha.uncertainty > 0.0);

    Ok(())
}

#[test]
fn a_trace_touching_the_reference_is_reported_as_degenerate() -> Result<()> {
    let tmp_dir = TempDir::new("a_trace_touching_the_reference_is_reported_as_degenerate").unwrap();
    let path = tmp_dir.path().join("degenerate.csv");

    // Third sample hits the reference temperature exactly
    let mut wtr = csv::Writer::from_path(&path)?;
    for (time, axial) in [(0.0, 25.0), (1.0, 23.0), (2.0, 21.0), (3.0, 20.5)] {
        wtr.serialize(Row {
            time,
            axial_temperature: axial,
            surface_temperature: 21.0,
        })?;
    }
    wtr.flush()?;

    let experiment = StepChange::<f64>::from_file(&path)?;
    let result = prepare(&experiment, &Config::default());
    assert!(matches!(result, Err(Error::DegenerateSample { index: 2 })));

    Ok(())
}

#[test]
fn a_missing_raw_data_file_surfaces_an_io_error() {
    let result = StepChange::<f64>::from_file(std::path::Path::new("raw_data/does_not_exist.csv"));
    assert!(matches!(result, Err(Error::Io(_))));
}
