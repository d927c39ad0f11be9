#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// #![warn(clippy::cargo)]

pub mod config;
pub mod diffusivity;
pub mod error;
pub mod experiment;
pub mod fit;
pub mod measurement;
pub mod plot;
pub mod propagation;
pub mod regression;

pub use error::Error;

pub type Result<T> = ::std::result::Result<T, Error>;
