//! Light-year distance conversion.
//!
//! The only user-facing error on the whole site comes from here: a distance
//! that is not a finite positive number. Everything downstream renders the
//! fixed validation message instead of a result block.

use crate::constants::{KM_PER_LIGHT_YEAR, MILES_PER_LIGHT_YEAR, SHUTTLE_YEARS_PER_LIGHT_YEAR};
use thiserror::Error;

pub const INVALID_DISTANCE_MESSAGE: &str = "Please enter a valid distance in light-years.";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("distance must be a finite number greater than zero")]
    InvalidInput,
}

/// Derived figures for a distance given in light-years.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceConversion {
    pub kilometers: f64,
    pub miles: f64,
    /// Travel time at light speed equals the distance itself, in years.
    pub light_speed_years: f64,
    pub shuttle_years: f64,
}

/// Convert a light-year distance into kilometers, miles and travel times.
///
/// Rejects non-finite and non-positive input with
/// [`ConversionError::InvalidInput`].
pub fn convert(light_years: f64) -> Result<DistanceConversion, ConversionError> {
    if !light_years.is_finite() || light_years <= 0.0 {
        return Err(ConversionError::InvalidInput);
    }
    Ok(DistanceConversion {
        kilometers: light_years * KM_PER_LIGHT_YEAR,
        miles: light_years * MILES_PER_LIGHT_YEAR,
        light_speed_years: light_years,
        shuttle_years: light_years * SHUTTLE_YEARS_PER_LIGHT_YEAR,
    })
}
