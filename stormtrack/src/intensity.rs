//! Storm intensity classification
//!
//! Buckets sustained wind speed into the Saffir-Simpson-derived
//! categories the renderers use for marker styling and legends.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum sustained wind speed (mph) for hurricane strength.
pub const HURRICANE_WIND_MPH: u32 = 74;

/// Minimum sustained wind speed (mph) for tropical storm strength.
pub const TROPICAL_STORM_WIND_MPH: u32 = 39;

/// Storm intensity category derived from sustained wind speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StormIntensity {
    /// Sustained winds of 74 mph or more
    Hurricane,
    /// Sustained winds of 39-73 mph
    TropicalStorm,
    /// Sustained winds below 39 mph
    TropicalDepression,
}

impl StormIntensity {
    /// Classifies a sustained wind speed in mph.
    pub fn from_wind_speed(wind_mph: u32) -> Self {
        if wind_mph >= HURRICANE_WIND_MPH {
            StormIntensity::Hurricane
        } else if wind_mph >= TROPICAL_STORM_WIND_MPH {
            StormIntensity::TropicalStorm
        } else {
            StormIntensity::TropicalDepression
        }
    }

    /// Legend label including the wind speed band.
    pub fn label(&self) -> &'static str {
        match self {
            StormIntensity::Hurricane => "Hurricane (≥74 mph)",
            StormIntensity::TropicalStorm => "Tropical Storm (39-73 mph)",
            StormIntensity::TropicalDepression => "Tropical Depression (<39 mph)",
        }
    }
}

impl fmt::Display for StormIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StormIntensity::Hurricane => "Hurricane",
            StormIntensity::TropicalStorm => "Tropical Storm",
            StormIntensity::TropicalDepression => "Tropical Depression",
        };
        write!(f, "{}", name)
    }
}
