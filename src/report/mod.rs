pub mod annual;
pub mod generator;
pub mod render;
pub mod report_errors;
pub mod telemetry;

use crate::models::orbit::OrbitProperties;
use chrono::NaiveDate;
use generator::OrbitalReportGenerator;
use report_errors::ReportErrors;
use telemetry::Telemetry;

/// Full report text for `date`, optionally followed by the telemetry block.
pub fn compose<T: OrbitProperties>(
    orbit: &T,
    date: NaiveDate,
    with_telemetry: bool,
) -> Result<String, ReportErrors> {
    let state = OrbitalReportGenerator::new(orbit).generate_report(date);
    let mut text = render::render(&state);

    if with_telemetry {
        let telemetry = Telemetry::from_state(&state, orbit)?;
        text.push_str(&render::render_telemetry(&telemetry));
    }

    Ok(text)
}
