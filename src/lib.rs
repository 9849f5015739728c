pub mod classifier;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod image;
pub mod prediction;
pub mod reference;
pub mod transport;

pub use error::{Error, PredictionError, Result};
