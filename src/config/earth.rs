use crate::constants;
use crate::models::orbit::OrbitProperties;

#[derive(Debug, Clone, Copy, Default)]
pub struct EarthOrbit;

impl EarthOrbit {
    pub const SEMI_MAJOR_AXIS_KM: f64 = constants::AU_KM;
    pub const ECCENTRICITY: f64 = constants::ECCENTRICITY;
    pub const PERIHELION_DAY: u32 = constants::PERIHELION_DAY_OF_YEAR;
    pub const MEAN_SPEED_KM_S: f64 = constants::MEAN_SPEED_KM_S;
}

impl OrbitProperties for EarthOrbit {
    fn semi_major_axis_km(&self) -> f64 {
        Self::SEMI_MAJOR_AXIS_KM
    }

    fn eccentricity(&self) -> f64 {
        Self::ECCENTRICITY
    }

    fn perihelion_day_of_year(&self) -> u32 {
        Self::PERIHELION_DAY
    }

    fn mean_speed_km_s(&self) -> f64 {
        Self::MEAN_SPEED_KM_S
    }
}
