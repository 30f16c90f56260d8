use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum ReportErrors {
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },
    MissingDate,
    DateOutOfRange(i32),
    IoError(io::Error),
    CsvError(csv::Error),
    LoggerError(log::SetLoggerError),
}

impl fmt::Display for ReportErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportErrors::InvalidDate { input, source } => write!(
                f,
                "Configuration error: invalid date '{}' (expected YYYY-MM-DD): {}",
                input, source
            ),
            ReportErrors::MissingDate => {
                write!(f, "Configuration error: date source is empty")
            }
            ReportErrors::DateOutOfRange(year) => {
                write!(f, "Date out of supported range for year {}", year)
            }
            ReportErrors::IoError(e) => write!(f, "I/O error: {}", e),
            ReportErrors::CsvError(e) => write!(f, "CSV writing error: {}", e),
            ReportErrors::LoggerError(e) => write!(f, "Logger setup error: {}", e),
        }
    }
}

impl Error for ReportErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportErrors::InvalidDate { source, .. } => Some(source),
            ReportErrors::IoError(e) => Some(e),
            ReportErrors::CsvError(e) => Some(e),
            ReportErrors::LoggerError(e) => Some(e),
            ReportErrors::MissingDate | ReportErrors::DateOutOfRange(_) => None,
        }
    }
}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for ReportErrors {
    fn from(err: io::Error) -> Self {
        ReportErrors::IoError(err)
    }
}

impl From<csv::Error> for ReportErrors {
    fn from(err: csv::Error) -> Self {
        ReportErrors::CsvError(err)
    }
}

impl From<log::SetLoggerError> for ReportErrors {
    fn from(err: log::SetLoggerError) -> Self {
        ReportErrors::LoggerError(err)
    }
}
