use super::generator::OrbitalReportGenerator;
use super::report_errors::ReportErrors;
use crate::models::orbit::OrbitProperties;
use crate::models::{Note, OrbitalState, Phase};
use chrono::{Datelike, NaiveDate};
use csv::Writer;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Debug, Serialize)]
struct AnnualRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Day of Year")]
    day_of_year: u32,
    #[serde(rename = "Days Since Perihelion")]
    days_since_perihelion: u32,
    #[serde(rename = "Orbital Angle (deg)")]
    orbital_degrees: f64,
    #[serde(rename = "Distance (million km)")]
    distance_million_km: f64,
    #[serde(rename = "Speed (km/s)")]
    speed_km_s: f64,
    #[serde(rename = "Phase")]
    phase: Phase,
    #[serde(rename = "Note")]
    note: Note,
}

impl From<&OrbitalState> for AnnualRow {
    fn from(state: &OrbitalState) -> Self {
        AnnualRow {
            date: state.date,
            day_of_year: state.day_of_year(),
            days_since_perihelion: state.days_since_perihelion,
            orbital_degrees: state.orbital_degrees,
            distance_million_km: state.distance_million_km(),
            speed_km_s: state.speed_km_s,
            phase: state.phase,
            note: state.note,
        }
    }
}

/// Writes one CSV row per calendar day of `year`, header included.
/// Returns the number of data rows written.
pub fn write_annual_table<T: OrbitProperties, W: io::Write>(
    generator: &OrbitalReportGenerator<T>,
    year: i32,
    writer: W,
) -> Result<usize, ReportErrors> {
    let first_day = NaiveDate::from_yo_opt(year, 1).ok_or(ReportErrors::DateOutOfRange(year))?;
    let mut writer = Writer::from_writer(writer);
    let mut rows = 0;

    for date in first_day.iter_days().take_while(|d| d.year() == year) {
        let state = generator.generate_report(date);
        writer.serialize(AnnualRow::from(&state))?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

pub fn export_annual_csv<T: OrbitProperties>(
    generator: &OrbitalReportGenerator<T>,
    year: i32,
    path: &Path,
) -> Result<usize, ReportErrors> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let rows = write_annual_table(generator, year, file)?;
    info!("Annual table for {} ({} days) written to {}", year, rows, path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::earth::EarthOrbit;
    use test_case::test_case;

    #[test_case(2025, 365; "common year")]
    #[test_case(2024, 366; "leap year")]
    fn row_count(year: i32, expected: usize) {
        let orbit = EarthOrbit;
        let generator = OrbitalReportGenerator::new(&orbit);
        let mut buffer = Vec::new();
        let rows = write_annual_table(&generator, year, &mut buffer).unwrap();
        assert_eq!(rows, expected);

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), expected + 1);
    }

    #[test]
    fn header_and_first_rows() {
        let orbit = EarthOrbit;
        let generator = OrbitalReportGenerator::new(&orbit);
        let mut buffer = Vec::new();
        write_annual_table(&generator, 2025, &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "Date");
        assert_eq!(&headers[5], "Speed (km/s)");
        assert_eq!(&headers[7], "Note");

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&records[0][0], "2025-01-01");
        assert_eq!(&records[0][2], "363");
        assert_eq!(&records[0][6], "ACCELERATING");
        assert_eq!(&records[2][3], "0.0");
        assert_eq!(&records[2][6], "DECELERATING");
        assert_eq!(&records[2][7], "HIGH_INTENSITY");
    }
}
