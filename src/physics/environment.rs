use crate::constants::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightDistribution {
    NorthPoleDaylight,
    SouthPoleDaylight,
    Balanced,
}

impl LightDistribution {
    pub fn from_axial_tilt(tilt_deg: f64) -> Self {
        if tilt_deg > 10.0 {
            LightDistribution::NorthPoleDaylight
        } else if tilt_deg < -10.0 {
            LightDistribution::SouthPoleDaylight
        } else {
            LightDistribution::Balanced
        }
    }
}

impl fmt::Display for LightDistribution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LightDistribution::NorthPoleDaylight => {
                write!(f, "North Pole in constant light. Southern hemisphere in twilight.")
            }
            LightDistribution::SouthPoleDaylight => {
                write!(f, "South Pole in constant light. Northern hemisphere in twilight.")
            }
            LightDistribution::Balanced => write!(f, "Approximate global light balance."),
        }
    }
}

/// Seasonal conditions seen from the Earth for a given day and Sun distance.
/// Tilt dominates; distance only scales the amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalEnvironment {
    pub axial_tilt_deg: f64, // Positive when the north pole leans sunward
    pub light: LightDistribution,
    pub north_temp_c: f64,
    pub south_temp_c: f64,
    pub solar_flux: f64, // W/m^2
}

impl SeasonalEnvironment {
    pub fn new(day_of_year: u32, distance_km: f64) -> Self {
        let days_since_equinox = day_of_year as f64 - MARCH_EQUINOX_DAY as f64;
        let axial_tilt_deg =
            AXIAL_TILT_DEG * (days_since_equinox / DAYS_PER_YEAR * 2.0 * PI).sin();

        // Inverse square law
        let distance_factor = (AU_KM / distance_km).powi(2);
        let swing = SEASONAL_TEMP_SWING_C
            * (axial_tilt_deg * PI / (2.0 * AXIAL_TILT_DEG)).sin()
            * distance_factor;

        SeasonalEnvironment {
            axial_tilt_deg,
            light: LightDistribution::from_axial_tilt(axial_tilt_deg),
            north_temp_c: MEAN_SURFACE_TEMP_C + swing,
            south_temp_c: MEAN_SURFACE_TEMP_C - swing,
            solar_flux: SOLAR_CONSTANT * distance_factor,
        }
    }

    pub fn sunward_hemisphere(&self) -> char {
        if self.axial_tilt_deg > 0.0 {
            'N'
        } else {
            'S'
        }
    }
}
