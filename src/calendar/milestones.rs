use crate::constants::{
    APHELION_DAY, MARCH_EQUINOX_DAY, PERIHELION_DAY_OF_YEAR, SEPTEMBER_EQUINOX_DAY,
};
use crate::report::report_errors::ReportErrors;
use chrono::{Datelike, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Perihelion,
    MarchEquinox,
    Aphelion,
    SeptemberEquinox,
}

impl Milestone {
    /// Milestones in calendar order.
    pub const ALL: [Milestone; 4] = [
        Milestone::Perihelion,
        Milestone::MarchEquinox,
        Milestone::Aphelion,
        Milestone::SeptemberEquinox,
    ];

    pub fn day_of_year(&self) -> u32 {
        match self {
            Milestone::Perihelion => PERIHELION_DAY_OF_YEAR,
            Milestone::MarchEquinox => MARCH_EQUINOX_DAY,
            Milestone::Aphelion => APHELION_DAY,
            Milestone::SeptemberEquinox => SEPTEMBER_EQUINOX_DAY,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Milestone::Perihelion => "Maximum speed and closest approach to the Sun.",
            Milestone::MarchEquinox => "Light balance. Crossing the ascending node.",
            Milestone::Aphelion => "Minimum speed. Farthest point.",
            Milestone::SeptemberEquinox => "Second global light balance.",
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Milestone::Perihelion => write!(f, "PERIHELION"),
            Milestone::MarchEquinox => write!(f, "MARCH EQUINOX"),
            Milestone::Aphelion => write!(f, "APHELION"),
            Milestone::SeptemberEquinox => write!(f, "SEPTEMBER EQUINOX"),
        }
    }
}

/// Leg of the yearly journey between consecutive milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelStage {
    LeavingPerihelion,
    TowardAphelion,
    GravitationalFall,
    TowardPerihelion,
}

impl TravelStage {
    pub fn from_day_of_year(day: u32) -> Self {
        match day {
            d if (PERIHELION_DAY_OF_YEAR..MARCH_EQUINOX_DAY).contains(&d) => {
                TravelStage::LeavingPerihelion
            }
            d if (MARCH_EQUINOX_DAY..APHELION_DAY).contains(&d) => TravelStage::TowardAphelion,
            d if (APHELION_DAY..SEPTEMBER_EQUINOX_DAY).contains(&d) => {
                TravelStage::GravitationalFall
            }
            _ => TravelStage::TowardPerihelion,
        }
    }
}

impl fmt::Display for TravelStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TravelStage::LeavingPerihelion => write!(f, "Decelerating (leaving perihelion)"),
            TravelStage::TowardAphelion => write!(f, "Decelerating toward aphelion"),
            TravelStage::GravitationalFall => write!(f, "Accelerating (gravitational fall)"),
            TravelStage::TowardPerihelion => write!(f, "Accelerating toward perihelion"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingMilestone {
    pub milestone: Milestone,
    pub date: NaiveDate,
}

/// First milestone strictly after `today`. Past the last one of the year it
/// rolls over to next year's perihelion.
pub fn next_milestone(today: NaiveDate) -> Result<UpcomingMilestone, ReportErrors> {
    let day = today.ordinal();
    let (milestone, year) = Milestone::ALL
        .iter()
        .find(|m| m.day_of_year() > day)
        .map(|m| (*m, today.year()))
        .unwrap_or((Milestone::Perihelion, today.year() + 1));

    let date = NaiveDate::from_yo_opt(year, milestone.day_of_year())
        .ok_or(ReportErrors::DateOutOfRange(year))?;

    Ok(UpcomingMilestone { milestone, date })
}
