pub const AU_KM: f64 = 149_597_870.7; // Astronomical unit (km)
pub const ECCENTRICITY: f64 = 0.0167; // Earth's orbital eccentricity
pub const PERIHELION_DAY_OF_YEAR: u32 = 3; // ~3 January
pub const MEAN_SPEED_KM_S: f64 = 29.78; // Mean orbital speed (km/s)
pub const DAYS_PER_YEAR: f64 = 365.25;
pub const DAYS_PER_CALENDAR_YEAR: u32 = 365;

// Report thresholds
pub const HIGH_INTENSITY_SPEED_KM_S: f64 = 30.0;
pub const CALM_SPEED_KM_S: f64 = 29.4;

// Calendar milestones (day of year)
pub const MARCH_EQUINOX_DAY: u32 = 79; // ~20 March
pub const APHELION_DAY: u32 = 185; // ~4 July
pub const SEPTEMBER_EQUINOX_DAY: u32 = 265; // ~22 September

// Environmental constants
pub const GM_SUN_KM3_S2: f64 = 1.327_124_400_18e11; // Heliocentric gravitational parameter (km³/s²)
pub const SOLAR_CONSTANT: f64 = 1361.0; // Solar constant at 1 AU (W/m^2)
pub const AXIAL_TILT_DEG: f64 = 23.44; // Obliquity of the ecliptic
pub const MEAN_SURFACE_TEMP_C: f64 = 15.0;
pub const SEASONAL_TEMP_SWING_C: f64 = 15.0;
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_59;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// Math
pub const PI: f64 = std::f64::consts::PI;
