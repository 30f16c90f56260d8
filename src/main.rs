use chrono::Datelike;
use clap::{ArgAction, Parser};
use log::debug;
use orbital_report::config::earth::EarthOrbit;
use orbital_report::config::report::ReportConfig;
use orbital_report::logger;
use orbital_report::report::annual::export_annual_csv;
use orbital_report::report::compose;
use orbital_report::report::generator::OrbitalReportGenerator;
use std::error::Error;
use std::path::PathBuf;

/// Earth orbital flight report
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prints Earth's simplified heliocentric position, speed and orbital phase for a date",
    long_about = None
)]
struct Args {
    /// Evaluate this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    date: Option<String>,

    /// Append the extended telemetry block
    #[arg(short, long, action = ArgAction::SetTrue)]
    telemetry: bool,

    /// Also write a day-by-day table for the report year to this CSV file
    #[arg(long, value_name = "PATH")]
    annual_csv: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    static ORBIT: EarthOrbit = EarthOrbit;
    let args = Args::parse();

    let config = ReportConfig::new(
        args.date.as_deref(),
        args.telemetry,
        args.annual_csv,
        args.verbose,
    )?;
    logger::init(config.log_level)?;
    debug!("Resolved configuration: {:?}", config);

    let today = config.date_source.resolve();
    print!("{}", compose(&ORBIT, today, config.telemetry)?);

    if let Some(path) = &config.annual_csv {
        let generator = OrbitalReportGenerator::new(&ORBIT);
        export_annual_csv(&generator, today.year(), path)?;
    }

    Ok(())
}
