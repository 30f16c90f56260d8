use crate::constants::{SECONDS_PER_DAY, SYNODIC_MONTH_DAYS};
use chrono::{Datelike, NaiveDate};
use hifitime::Epoch;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl LunarPhase {
    /// Names a position within the synodic cycle, `fraction` in [0, 1).
    pub fn from_cycle_fraction(fraction: f64) -> Self {
        match fraction {
            f if !(0.03..=0.97).contains(&f) => LunarPhase::NewMoon,
            f if f < 0.22 => LunarPhase::WaxingCrescent,
            f if f < 0.28 => LunarPhase::FirstQuarter,
            f if f < 0.47 => LunarPhase::WaxingGibbous,
            f if f < 0.53 => LunarPhase::FullMoon,
            f if f < 0.72 => LunarPhase::WaningGibbous,
            f if f < 0.78 => LunarPhase::LastQuarter,
            _ => LunarPhase::WaningCrescent,
        }
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LunarPhase::NewMoon => write!(f, "New Moon"),
            LunarPhase::WaxingCrescent => write!(f, "Waxing Crescent"),
            LunarPhase::FirstQuarter => write!(f, "First Quarter"),
            LunarPhase::WaxingGibbous => write!(f, "Waxing Gibbous"),
            LunarPhase::FullMoon => write!(f, "Full Moon"),
            LunarPhase::WaningGibbous => write!(f, "Waning Gibbous"),
            LunarPhase::LastQuarter => write!(f, "Last Quarter"),
            LunarPhase::WaningCrescent => write!(f, "Waning Crescent"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhase {
    pub cycle_fraction: f64,
    pub phase: LunarPhase,
}

impl MoonPhase {
    /// Reference new moon: 2024-01-11.
    pub fn reference_epoch() -> Epoch {
        Epoch::from_gregorian_utc_at_midnight(2024, 1, 11)
    }

    /// Mean synodic phase at midnight UTC of `date`.
    pub fn on(date: NaiveDate) -> Self {
        let epoch =
            Epoch::from_gregorian_utc_at_midnight(date.year(), date.month() as u8, date.day() as u8);
        let elapsed_days = (epoch - Self::reference_epoch()).to_seconds() / SECONDS_PER_DAY;
        let cycle_fraction =
            elapsed_days.rem_euclid(SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;

        MoonPhase {
            cycle_fraction,
            phase: LunarPhase::from_cycle_fraction(cycle_fraction),
        }
    }

    pub fn cycle_percent(&self) -> f64 {
        self.cycle_fraction * 100.0
    }
}
