use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Direction of Earth's radial motion relative to the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Perihelion to aphelion, climbing away from the Sun.
    Decelerating,
    /// Aphelion to perihelion, falling back toward the Sun.
    Accelerating,
}

impl Phase {
    pub fn from_orbital_degrees(degrees: f64) -> Self {
        if (0.0..180.0).contains(&degrees) {
            Phase::Decelerating
        } else {
            Phase::Accelerating
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Phase::Decelerating => "DECELERATING (moving away from the Sun)",
            Phase::Accelerating => "ACCELERATING (falling toward the Sun)",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Phase::Decelerating => write!(f, "Decelerating"),
            Phase::Accelerating => write!(f, "Accelerating"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Note {
    HighIntensity,
    Calm,
    Stable,
}

impl Note {
    pub fn from_speed(speed_km_s: f64, high_intensity: f64, calm: f64) -> Self {
        if speed_km_s > high_intensity {
            Note::HighIntensity
        } else if speed_km_s < calm {
            Note::Calm
        } else {
            Note::Stable
        }
    }

    pub fn sentence(&self) -> &'static str {
        match self {
            Note::HighIntensity => "You are at the peak kinetic intensity of the year.",
            Note::Calm => "A calm moment. Floating along the high part of the orbit.",
            Note::Stable => "Stable cruise.",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Note::HighIntensity => write!(f, "High Intensity"),
            Note::Calm => write!(f, "Calm"),
            Note::Stable => write!(f, "Stable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalState {
    pub date: NaiveDate,
    pub days_since_perihelion: u32,

    // Position along the orbit
    pub orbital_degrees: f64, // [0, 360) from perihelion
    pub distance_km: f64,     // Sun-Earth radius vector

    // Motion
    pub speed_km_s: f64,
    pub phase: Phase,
    pub note: Note,
}

impl OrbitalState {
    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }

    pub fn theta_radians(&self) -> f64 {
        self.orbital_degrees.to_radians()
    }

    pub fn distance_million_km(&self) -> f64 {
        self.distance_km / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, Phase::Decelerating; "perihelion boundary is decelerating")]
    #[test_case(90.0, Phase::Decelerating; "first quadrant")]
    #[test_case(179.999, Phase::Decelerating; "just before aphelion")]
    #[test_case(180.0, Phase::Accelerating; "aphelion boundary is accelerating")]
    #[test_case(357.78, Phase::Accelerating; "closing on perihelion")]
    fn phase_from_degrees(degrees: f64, expected: Phase) {
        assert_eq!(Phase::from_orbital_degrees(degrees), expected);
    }

    #[test_case(30.29, Note::HighIntensity; "above thirty")]
    #[test_case(30.0, Note::Stable; "exactly thirty is not high")]
    #[test_case(29.74, Note::Stable; "cruise")]
    #[test_case(29.4, Note::Stable; "exactly calm threshold is stable")]
    #[test_case(29.29, Note::Calm; "near aphelion")]
    fn note_from_speed(speed: f64, expected: Note) {
        assert_eq!(Note::from_speed(speed, 30.0, 29.4), expected);
    }
}
