use std::path::Path;
use std::process::ExitCode;

use thermal_diffusivity::config::Config;
use thermal_diffusivity::experiment::{experiment_name, StepChange};
use thermal_diffusivity::measurement::Measurement;
use thermal_diffusivity::regression::prepare;
use thermal_diffusivity::Result;
use thermal_diffusivity::{diffusivity, fit, plot};

const EXPERIMENTS: [&str; 2] = [
    "raw_data/ThermalDiffusivity_StepChange_experiment_1.csv",
    "raw_data/ThermalDiffusivity_StepChange_experiment_2.csv",
];

/// Run the full pipeline for one raw data file and report the result
fn estimate_diffusivity(raw_data: &Path, config: &Config<f64>) -> Result<Measurement<f64>> {
    let experiment = StepChange::from_file(raw_data)?;
    let input = prepare(&experiment, config)?;
    let lsfr = fit::fit(&input, config.weighting)?;
    println!("{lsfr}");

    let name = experiment_name(raw_data);
    std::fs::create_dir_all("cooked_data")?;
    plot::render(
        &lsfr,
        Path::new(&format!("cooked_data/{name}_lsfr_result.png")),
        &name,
    )?;

    Ok(diffusivity::estimate(lsfr.slope(), config.radius))
}

fn main() -> ExitCode {
    // Apparatus overrides live next to the raw data; defaults describe the
    // reference rig
    let config_file = Path::new("experiment.toml");
    let config = if config_file.exists() {
        match Config::from_file(config_file) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("invalid {}: {error}", config_file.display());
                return ExitCode::FAILURE;
            }
        }
    } else {
        Config::default()
    };

    let mut failed = false;
    for raw_data in EXPERIMENTS.map(Path::new) {
        let name = experiment_name(raw_data);
        match estimate_diffusivity(raw_data, &config) {
            Ok(alpha) => println!("thermal diffusivity from {name} is {alpha}"),
            Err(error) => {
                eprintln!("skipping {name}: {error}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
