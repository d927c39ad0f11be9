use thiserror::Error;

/// Errors that can occur while estimating a diffusivity from experiment data.
///
/// Data-quality failures (`DegenerateSample`, `DegenerateLogInput`,
/// `DegenerateAbscissa`) are distinguished from input failures so a caller
/// can tell a bad experiment run from a bad file.
#[derive(Debug, Error)]
pub enum Error {
    /// An underlying filesystem read failed.
    #[error("i/o error")]
    Io(#[from] std::io::Error),

    /// A raw data file could not be parsed as CSV rows.
    #[error("malformed raw data file")]
    Csv(#[from] csv::Error),

    /// A configuration file could not be parsed.
    #[error("malformed configuration file")]
    Config(#[from] toml::de::Error),

    /// A sample series was empty.
    #[error("experiment contains no samples")]
    Empty,

    /// Input series of different lengths were supplied together.
    #[error("mismatched series lengths: {a} vs {b}")]
    LengthMismatch { a: usize, b: usize },

    /// The time series decreased between consecutive samples.
    #[error("time series decreases at sample {index}")]
    NonMonotonicTime { index: usize },

    /// A negative uncertainty was supplied for a dependent value.
    #[error("negative uncertainty at sample {index}")]
    NegativeUncertainty { index: usize },

    /// The argument of a logarithm was zero, so the propagated error is
    /// undefined.
    #[error("log error propagation undefined for zero argument")]
    DegenerateLogInput,

    /// An axial temperature coincided exactly with the mean reference
    /// temperature, so its linearized value is undefined.
    #[error("axial temperature equals mean reference temperature at sample {index}")]
    DegenerateSample { index: usize },

    /// Fewer than two distinct abscissa values were available, so no line is
    /// determined.
    #[error("fit undefined: fewer than two distinct x values")]
    DegenerateAbscissa,

    /// The diagnostic plot could not be rendered.
    #[error("failed to render diagnostic plot: {0}")]
    Plot(String),
}
