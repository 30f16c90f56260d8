use crate::constants::DAYS_PER_YEAR;

pub trait OrbitProperties {
    fn semi_major_axis_km(&self) -> f64;
    fn eccentricity(&self) -> f64;
    fn perihelion_day_of_year(&self) -> u32;
    fn mean_speed_km_s(&self) -> f64;

    fn days_per_year(&self) -> f64 {
        DAYS_PER_YEAR
    }
}
