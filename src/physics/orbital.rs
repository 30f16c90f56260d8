use crate::constants::{DAYS_PER_CALENDAR_YEAR, GM_SUN_KM3_S2};
use nalgebra as na;

pub struct OrbitalMechanics;

impl OrbitalMechanics {
    /// Whole days elapsed since perihelion. Dates before the perihelion day
    /// wrap into the previous orbit using a 365-day calendar year.
    pub fn days_since_perihelion(day_of_year: u32, perihelion_day: u32) -> u32 {
        if day_of_year >= perihelion_day {
            day_of_year - perihelion_day
        } else {
            day_of_year + DAYS_PER_CALENDAR_YEAR - perihelion_day
        }
    }

    /// Linear day-fraction anomaly in degrees, normalised to [0, 360).
    pub fn orbital_degrees(days_since_perihelion: u32, days_per_year: f64) -> f64 {
        (days_since_perihelion as f64 / days_per_year * 360.0).rem_euclid(360.0)
    }

    /// Polar conic radius with the Sun at the focus.
    ///   a: semi-major axis [km]
    ///   e: eccentricity [-]
    ///   theta: angle from perihelion [rad]
    pub fn radius_vector(a: f64, e: f64, theta: f64) -> f64 {
        let p = a * (1.0 - e * e);
        p / (1.0 + e * theta.cos())
    }

    /// Inverse-distance speed scaling around the mean orbital speed. Not the
    /// exact vis-viva solution.
    pub fn scaled_speed(mean_speed: f64, a: f64, r: f64) -> f64 {
        mean_speed * (a / r)
    }

    /// Position in the orbital plane, perihelion along +x.
    pub fn heliocentric_position(r: f64, theta: f64) -> na::Vector3<f64> {
        na::Vector3::new(r * theta.cos(), r * theta.sin(), 0.0)
    }

    /// Velocity in the orbital plane. Direction follows the conic flight path,
    /// magnitude is the supplied speed.
    pub fn heliocentric_velocity(speed: f64, e: f64, theta: f64) -> na::Vector3<f64> {
        let direction = na::Vector3::new(-theta.sin(), e + theta.cos(), 0.0);
        direction.normalize() * speed
    }

    /// Solar gravitational acceleration at distance `r` [km], in mm/s².
    pub fn solar_acceleration(r: f64) -> f64 {
        GM_SUN_KM3_S2 / (r * r) * 1e6
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AU_KM, DAYS_PER_YEAR, ECCENTRICITY, MEAN_SPEED_KM_S, PI};
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use test_case::test_case;

    #[test_case(3, 3, 0; "perihelion day")]
    #[test_case(1, 3, 363; "new year wraps")]
    #[test_case(2, 3, 364; "day before perihelion wraps")]
    #[test_case(186, 3, 183; "early july")]
    #[test_case(366, 3, 363; "leap year end")]
    fn days_since_perihelion(day: u32, perihelion: u32, expected: u32) {
        assert_eq!(
            OrbitalMechanics::days_since_perihelion(day, perihelion),
            expected
        );
    }

    #[test_case(0, 0.0; "zero")]
    #[test_case(183, 180.3696; "past aphelion")]
    #[test_case(363, 357.7823; "wrapped new year")]
    fn orbital_degrees(days: u32, expected: f64) {
        let result = OrbitalMechanics::orbital_degrees(days, DAYS_PER_YEAR);
        assert_abs_diff_eq!(result, expected, epsilon = 1e-4);
    }

    #[test]
    fn orbital_degrees_never_reaches_full_turn() {
        for days in 0..=365 {
            let degrees = OrbitalMechanics::orbital_degrees(days, DAYS_PER_YEAR);
            assert!((0.0..360.0).contains(&degrees), "{days} -> {degrees}");
        }
        // Only reachable with a custom year length
        assert_abs_diff_eq!(OrbitalMechanics::orbital_degrees(10, 10.0), 0.0);
    }

    #[test_case(0.0, 147_099_586.2593; "perihelion")]
    #[test_case(PI, 152_096_155.1407; "aphelion")]
    #[test_case(PI / 2.0, 149_556_149.3498; "semi-latus rectum")]
    fn radius_vector(theta: f64, expected: f64) {
        let r = OrbitalMechanics::radius_vector(AU_KM, ECCENTRICITY, theta);
        assert_abs_diff_eq!(r, expected, epsilon = 1e-2);
    }

    #[test]
    fn speed_decreases_with_distance() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = rng.gen_range(0.0..2.0 * PI);
            let b = rng.gen_range(0.0..2.0 * PI);
            let ra = OrbitalMechanics::radius_vector(AU_KM, ECCENTRICITY, a);
            let rb = OrbitalMechanics::radius_vector(AU_KM, ECCENTRICITY, b);
            if (ra - rb).abs() < 1.0 {
                continue;
            }
            let va = OrbitalMechanics::scaled_speed(MEAN_SPEED_KM_S, AU_KM, ra);
            let vb = OrbitalMechanics::scaled_speed(MEAN_SPEED_KM_S, AU_KM, rb);
            assert_eq!(ra < rb, va > vb);
        }
    }

    #[test]
    fn heliocentric_position_matches_radius() {
        let theta = 1.2;
        let r = OrbitalMechanics::radius_vector(AU_KM, ECCENTRICITY, theta);
        let position = OrbitalMechanics::heliocentric_position(r, theta);
        assert_abs_diff_eq!(position.magnitude(), r, epsilon = 1e-3);
        assert_abs_diff_eq!(position.z, 0.0);
    }

    #[test]
    fn heliocentric_velocity_at_quadrature() {
        let v = OrbitalMechanics::heliocentric_velocity(29.79, ECCENTRICITY, PI / 2.0);
        assert_abs_diff_eq!(v.magnitude(), 29.79, epsilon = 1e-9);
        assert_abs_diff_eq!(v.x, -29.79 * 0.999_860_58, epsilon = 1e-5);
        assert_abs_diff_eq!(v.y, 29.79 * 0.016_697_67, epsilon = 1e-5);
    }

    #[test]
    fn solar_acceleration_at_one_au() {
        assert_abs_diff_eq!(
            OrbitalMechanics::solar_acceleration(AU_KM),
            5.9301,
            epsilon = 1e-4
        );
    }
}
