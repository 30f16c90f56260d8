use super::report_errors::ReportErrors;
use crate::calendar::{next_milestone, TravelStage, UpcomingMilestone};
use crate::constants::SECONDS_PER_DAY;
use crate::models::orbit::OrbitProperties;
use crate::models::OrbitalState;
use crate::physics::environment::SeasonalEnvironment;
use crate::physics::lunar::MoonPhase;
use crate::physics::orbital::OrbitalMechanics;
use nalgebra as na;

/// Secondary readings derived from an [`OrbitalState`].
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    pub day_of_year: u32, // Rotation number within the year
    pub stage: TravelStage,
    pub daily_advance_km: f64, // Distance covered along the orbit per day

    // Heliocentric state in the orbital plane, perihelion on +x
    pub heliocentric_position: na::Vector3<f64>, // km
    pub heliocentric_velocity: na::Vector3<f64>, // km/s

    pub solar_acceleration_mm_s2: f64,
    pub environment: SeasonalEnvironment,
    pub moon: MoonPhase,
    pub next_milestone: UpcomingMilestone,
}

impl Telemetry {
    pub fn from_state<T: OrbitProperties>(
        state: &OrbitalState,
        orbit: &T,
    ) -> Result<Self, ReportErrors> {
        let theta = state.theta_radians();
        let day_of_year = state.day_of_year();

        Ok(Telemetry {
            day_of_year,
            stage: TravelStage::from_day_of_year(day_of_year),
            daily_advance_km: state.speed_km_s * SECONDS_PER_DAY,
            heliocentric_position: OrbitalMechanics::heliocentric_position(
                state.distance_km,
                theta,
            ),
            heliocentric_velocity: OrbitalMechanics::heliocentric_velocity(
                state.speed_km_s,
                orbit.eccentricity(),
                theta,
            ),
            solar_acceleration_mm_s2: OrbitalMechanics::solar_acceleration(state.distance_km),
            environment: SeasonalEnvironment::new(day_of_year, state.distance_km),
            moon: MoonPhase::on(state.date),
            next_milestone: next_milestone(state.date)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Milestone;
    use crate::config::earth::EarthOrbit;
    use crate::report::generator::OrbitalReportGenerator;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    #[test]
    fn perihelion_telemetry() {
        let orbit = EarthOrbit;
        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let state = OrbitalReportGenerator::new(&orbit).generate_report(date);
        let telemetry = Telemetry::from_state(&state, &orbit).unwrap();

        assert_eq!(telemetry.day_of_year, 3);
        assert_eq!(telemetry.stage, TravelStage::LeavingPerihelion);
        assert_abs_diff_eq!(telemetry.daily_advance_km, 2_616_690.74, epsilon = 1e-1);
        assert_abs_diff_eq!(telemetry.heliocentric_position.x, state.distance_km, epsilon = 1e-6);
        assert_abs_diff_eq!(telemetry.heliocentric_position.y, 0.0, epsilon = 1e-6);
        // Moving purely along +y at perihelion
        assert_abs_diff_eq!(telemetry.heliocentric_velocity.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(telemetry.heliocentric_velocity.y, state.speed_km_s, epsilon = 1e-9);
        assert!(telemetry.solar_acceleration_mm_s2 > 6.0);
        assert!(telemetry.environment.axial_tilt_deg < -10.0);
        assert_eq!(telemetry.next_milestone.milestone, Milestone::MarchEquinox);
    }

    #[test]
    fn position_and_velocity_magnitudes_follow_state() {
        let orbit = EarthOrbit;
        let generator = OrbitalReportGenerator::new(&orbit);
        for ordinal in [40, 120, 200, 300] {
            let date = NaiveDate::from_yo_opt(2026, ordinal).unwrap();
            let state = generator.generate_report(date);
            let telemetry = Telemetry::from_state(&state, &orbit).unwrap();
            assert_abs_diff_eq!(
                telemetry.heliocentric_position.magnitude(),
                state.distance_km,
                epsilon = 1e-3
            );
            assert_abs_diff_eq!(
                telemetry.heliocentric_velocity.magnitude(),
                state.speed_km_s,
                epsilon = 1e-9
            );
        }
    }
}
