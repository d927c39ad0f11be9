use std::fs;
use std::path::Path;

use itertools::Itertools;
use ndarray::Array1;
use num_traits::Float;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{Error, Result};

/// One CSV record: time, axial temperature, surface (reference) temperature
#[derive(Deserialize)]
struct Row<E>(E, E, E);

/// The raw series recorded during one experiment run
///
/// Samples are ordered as recorded; the time series never decreases.
#[derive(Clone, Debug)]
pub struct Samples<E> {
    time: Array1<E>,
    axial_temperature: Array1<E>,
    reference_temperature: Array1<E>,
}

impl<E: Float> Samples<E> {
    /// Assemble samples from already-parsed column vectors
    ///
    /// # Errors
    /// Fails if the columns are empty, of unequal length, or if the time
    /// column decreases anywhere.
    pub fn from_columns(
        time: Vec<E>,
        axial_temperature: Vec<E>,
        reference_temperature: Vec<E>,
    ) -> Result<Self> {
        if time.is_empty() {
            return Err(Error::Empty);
        }
        if time.len() != axial_temperature.len() {
            return Err(Error::LengthMismatch {
                a: time.len(),
                b: axial_temperature.len(),
            });
        }
        if time.len() != reference_temperature.len() {
            return Err(Error::LengthMismatch {
                a: time.len(),
                b: reference_temperature.len(),
            });
        }
        if let Some((index, _)) = time
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (earlier, later))| later < earlier)
        {
            return Err(Error::NonMonotonicTime { index: index + 1 });
        }

        Ok(Self {
            time: Array1::from(time),
            axial_temperature: Array1::from(axial_temperature),
            reference_temperature: Array1::from(reference_temperature),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub const fn time(&self) -> &Array1<E> {
        &self.time
    }

    pub const fn axial_temperature(&self) -> &Array1<E> {
        &self.axial_temperature
    }

    pub const fn reference_temperature(&self) -> &Array1<E> {
        &self.reference_temperature
    }
}

impl<E: Float + DeserializeOwned> Samples<E> {
    /// Create `Samples` from an on-disk representation
    ///
    /// The first three columns of the file are read as time, axial
    /// temperature and surface temperature respectively; the first row is
    /// treated as a header.
    ///
    /// # Errors
    /// Fails if the file is missing, a row cannot be parsed as three numeric
    /// fields, or the assembled columns violate [`Samples::from_columns`].
    pub fn from_file(filepath: &Path) -> Result<Self> {
        let file = fs::read(filepath)?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(&file[..]);

        let mut time = vec![];
        let mut axial_temperature = vec![];
        let mut reference_temperature = vec![];

        for result in rdr.deserialize() {
            let record: Row<E> = result?;
            time.push(record.0);
            axial_temperature.push(record.1);
            reference_temperature.push(record.2);
        }

        Self::from_columns(time, axial_temperature, reference_temperature)
    }
}

/// A step-change experiment: raw samples plus the constant external
/// temperature the post-step model assumes
///
/// The external temperature is the arithmetic mean of the full reference
/// series, computed once at construction.
#[derive(Clone, Debug)]
pub struct StepChange<E> {
    samples: Samples<E>,
    mean_reference_temperature: E,
}

impl<E: Float> StepChange<E> {
    pub fn from_samples(samples: Samples<E>) -> Self {
        let total = samples
            .reference_temperature()
            .iter()
            .fold(E::zero(), |acc, &t| acc + t);
        let count = E::from(samples.len()).expect("sample count must fit in `E`");

        Self {
            samples,
            mean_reference_temperature: total / count,
        }
    }

    pub const fn samples(&self) -> &Samples<E> {
        &self.samples
    }

    pub const fn mean_reference_temperature(&self) -> E {
        self.mean_reference_temperature
    }
}

impl<E: Float + DeserializeOwned> StepChange<E> {
    /// Load an experiment directly from its raw data file
    ///
    /// # Errors
    /// Fails under the same conditions as [`Samples::from_file`].
    pub fn from_file(filepath: &Path) -> Result<Self> {
        Ok(Self::from_samples(Samples::from_file(filepath)?))
    }
}

/// The bare experiment name: file stem without directory or extension
///
/// `raw_data/experiment_1.csv` names the experiment `experiment_1`; output
/// artifacts and console reports use this form.
#[must_use]
pub fn experiment_name(filepath: &Path) -> String {
    filepath.file_stem().map_or_else(
        || filepath.to_string_lossy().into_owned(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}
