use std::fs;
use std::path::Path;

use num_traits::Float;
use serde::Deserialize;

use crate::fit::Weighting;
use crate::Result;

/// Experiment geometry and instrument uncertainty
///
/// Defaults describe the reference apparatus: a cylindrical sample of radius
/// 7 cm with thermocouples read to one part in a thousand on both channels.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, bound(deserialize = "E: Float + serde::Deserialize<'de>"))]
pub struct Config<E> {
    /// Radius of the cylindrical sample, in metres
    pub radius: E,
    /// Instrument uncertainty on the axial temperature channel
    pub axial_temperature_error: E,
    /// Instrument uncertainty on the surface (reference) temperature channel
    pub reference_temperature_error: E,
    /// Whether the fit weights each point by its inverse variance
    pub weighting: Weighting,
}

impl<E: Float> Default for Config<E> {
    fn default() -> Self {
        Self {
            radius: E::from(7.0e-2).expect("radius must fit in `E`"),
            axial_temperature_error: E::from(1.0e-3).expect("uncertainty must fit in `E`"),
            reference_temperature_error: E::from(1.0e-3).expect("uncertainty must fit in `E`"),
            weighting: Weighting::InverseVariance,
        }
    }
}

impl<E: Float + serde::de::DeserializeOwned> Config<E> {
    /// Read a configuration from an on-disk TOML representation
    ///
    /// Missing keys take their default values, so a partial file overriding
    /// only the radius is valid.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
