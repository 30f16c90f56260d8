use crate::report::report_errors::ReportErrors;
use chrono::{Local, NaiveDate};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Where "today" comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    SystemClock,
    Fixed(NaiveDate),
}

impl DateSource {
    /// Local calendar date for the system clock, or the fixed date.
    pub fn resolve(&self) -> NaiveDate {
        match self {
            DateSource::SystemClock => Local::now().date_naive(),
            DateSource::Fixed(date) => *date,
        }
    }
}

impl FromStr for DateSource {
    type Err = ReportErrors;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ReportErrors::MissingDate);
        }

        NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT)
            .map(DateSource::Fixed)
            .map_err(|source| ReportErrors::InvalidDate {
                input: trimmed.to_string(),
                source,
            })
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub date_source: DateSource,
    pub telemetry: bool,
    pub annual_csv: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl ReportConfig {
    pub fn new(
        date: Option<&str>,
        telemetry: bool,
        annual_csv: Option<PathBuf>,
        verbose: bool,
    ) -> Result<Self, ReportErrors> {
        let date_source = match date {
            Some(input) => input.parse()?,
            None => DateSource::SystemClock,
        };

        Ok(Self {
            date_source,
            telemetry,
            annual_csv,
            log_level: if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            },
        })
    }
}
