use crate::constants::{CALM_SPEED_KM_S, HIGH_INTENSITY_SPEED_KM_S};
use crate::models::orbit::OrbitProperties;
use crate::models::{Note, OrbitalState, Phase};
use crate::physics::orbital::OrbitalMechanics;
use chrono::{Datelike, NaiveDate};
use log::debug;

pub struct OrbitalReportGenerator<'a, T: OrbitProperties> {
    orbit: &'a T,
}

impl<'a, T: OrbitProperties> OrbitalReportGenerator<'a, T> {
    pub fn new(orbit: &'a T) -> Self {
        Self { orbit }
    }

    /// Computes the orbital state for `today`. Pure: the same date always
    /// yields the same state.
    pub fn generate_report(&self, today: NaiveDate) -> OrbitalState {
        let a = self.orbit.semi_major_axis_km();
        let e = self.orbit.eccentricity();

        let day_of_year = today.ordinal();
        let days_since_perihelion = OrbitalMechanics::days_since_perihelion(
            day_of_year,
            self.orbit.perihelion_day_of_year(),
        );
        let orbital_degrees =
            OrbitalMechanics::orbital_degrees(days_since_perihelion, self.orbit.days_per_year());

        let distance_km = OrbitalMechanics::radius_vector(a, e, orbital_degrees.to_radians());
        let speed_km_s = OrbitalMechanics::scaled_speed(self.orbit.mean_speed_km_s(), a, distance_km);

        let phase = Phase::from_orbital_degrees(orbital_degrees);
        let note = Note::from_speed(speed_km_s, HIGH_INTENSITY_SPEED_KM_S, CALM_SPEED_KM_S);

        debug!(
            "{}: day {} -> {} days since perihelion, {:.4}° at {:.1} km, {:.4} km/s ({}, {})",
            today,
            day_of_year,
            days_since_perihelion,
            orbital_degrees,
            distance_km,
            speed_km_s,
            phase,
            note
        );

        OrbitalState {
            date: today,
            days_since_perihelion,
            orbital_degrees,
            distance_km,
            speed_km_s,
            phase,
            note,
        }
    }
}
